//! Subtype discovery strategies.
//!
//! [`SubtypeFinder`] is the seam: a stateless strategy enumerating the
//! concrete subtypes of one root. The default [`ManifestSubtypeFinder`]
//! reads packaged listing resources; [`StaticSubtypeFinder`] serves a
//! compiled explicit list. Custom strategies (network-fetched manifests,
//! filtered views) implement the same contract.

use taxon_core::{SubtypeDef, TypeKey};

use crate::error::DiscoveryError;

mod manifest;
mod static_list;

pub use manifest::ManifestSubtypeFinder;
pub use static_list::StaticSubtypeFinder;

/// Discovery strategy: enumerates the concrete subtypes of a root type.
pub trait SubtypeFinder {
	/// Returns every candidate assignable to `root` that this strategy can
	/// see, deduplicated and sorted by type path. An empty result is valid:
	/// a root with no known subtypes is not an error.
	///
	/// Individual candidates that fail to resolve must be skipped, never
	/// raised; only resource-level failures abort discovery.
	fn find_subtypes(&self, root: TypeKey) -> Result<Vec<&'static SubtypeDef>, DiscoveryError>;
}

/// Collapses duplicates and fixes the contract order (by type path).
pub(crate) fn dedup_by_type(mut defs: Vec<&'static SubtypeDef>) -> Vec<&'static SubtypeDef> {
	defs.sort_by_key(|def| def.type_key().path());
	defs.dedup_by_key(|def| def.type_key().id());
	defs
}
