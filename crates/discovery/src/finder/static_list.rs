//! Compiled explicit-list strategy.

use taxon_core::{SubtypeDef, TypeKey};

use crate::error::DiscoveryError;
use crate::finder::{SubtypeFinder, dedup_by_type};

/// Serves a fixed candidate list, filtered by the requested root.
///
/// For closed sets of subtypes known at compile time, and as a
/// deterministic strategy in tests. The assignability check still applies:
/// entries registered for a different root are filtered out, not errors.
#[derive(Debug, Clone, Default)]
pub struct StaticSubtypeFinder {
	defs: Vec<&'static SubtypeDef>,
}

impl StaticSubtypeFinder {
	pub fn new(defs: impl IntoIterator<Item = &'static SubtypeDef>) -> Self {
		Self {
			defs: defs.into_iter().collect(),
		}
	}
}

impl SubtypeFinder for StaticSubtypeFinder {
	fn find_subtypes(&self, root: TypeKey) -> Result<Vec<&'static SubtypeDef>, DiscoveryError> {
		let matching = self
			.defs
			.iter()
			.copied()
			.filter(|def| def.root_key().id() == root.id())
			.collect();
		Ok(dedup_by_type(matching))
	}
}
