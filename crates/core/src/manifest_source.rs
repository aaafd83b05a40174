//! Embedded listing resources.

use crate::TypeKey;

/// A packaged listing resource contributed by one crate: newline-separated,
/// fully-qualified type paths for a single root. Usually the output of
/// build-time tooling pulled in with `include_str!` through
/// [`subtype_manifest!`](crate::subtype_manifest).
///
/// Several crates may contribute a source for the same root; discovery
/// merges the union of their lines.
pub struct ManifestSource {
	/// Key of the root this listing belongs to.
	pub root: fn() -> TypeKey,
	/// Crate that contributed the listing.
	pub package: &'static str,
	/// Raw listing text.
	pub contents: &'static str,
}

impl ManifestSource {
	/// Identity of the root this listing belongs to.
	pub fn root_key(&self) -> TypeKey {
		(self.root)()
	}
}

/// Wrapper for `inventory::collect!`.
pub struct ManifestSourceReg(pub &'static ManifestSource);

inventory::collect!(ManifestSourceReg);

/// Iterates every embedded listing resource linked into the process.
pub fn manifest_sources() -> impl Iterator<Item = &'static ManifestSource> {
	inventory::iter::<ManifestSourceReg>.into_iter().map(|reg| reg.0)
}
