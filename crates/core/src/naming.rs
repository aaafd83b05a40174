//! Discriminator naming convention.
//!
//! Pure functions from type identity to wire tokens and listing-resource
//! keys. Results are deterministic and stable across runs for the same type:
//! both become part of a persisted contract (the wire tag and the packaged
//! resource name respectively).

use crate::TypeKey;

/// Default wire discriminator for a type path: the final path segment, with
/// generic arguments stripped.
pub fn simple_name(path: &'static str) -> &'static str {
	let base = match path.find('<') {
		Some(idx) => &path[..idx],
		None => path,
	};
	match base.rfind("::") {
		Some(idx) => &base[idx + 2..],
		None => base,
	}
}

/// Listing-resource key for a root: the full path of the root's `dyn Trait`
/// type with the `dyn ` prefix stripped and `::` replaced by `.`, so the key
/// is a valid file name on every platform.
pub fn listing_key(root: TypeKey) -> String {
	root.path().trim_start_matches("dyn ").replace("::", ".")
}
