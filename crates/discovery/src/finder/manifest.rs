//! Default discovery strategy: packaged listing resources.
//!
//! # Mental Model
//!
//! 1. Derive the listing key from the root's identity
//!    ([`naming::listing_key`]).
//! 2. Collect every contributing resource for that key: embedded manifest
//!    sources linked into the binary, then the `services/<key>` file under
//!    each configured manifest directory.
//! 3. Merge the union of listed names, resolve each against the linked
//!    candidate pool, and keep only candidates assignable to the root.
//!
//! An absent resource contributes nothing; an unreadable one aborts the
//! scan. Per-name problems (a type that was never linked, a candidate
//! registered for a different root) are skipped at debug level so one stale
//! line cannot poison the rest of the listing.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;

use rustc_hash::FxHashMap;
use taxon_core::{SubtypeDef, TypeKey, candidates, manifest_sources, naming};

use crate::config::{DiscoveryConfig, SERVICES_NAMESPACE};
use crate::error::DiscoveryError;
use crate::finder::{SubtypeFinder, dedup_by_type};
use crate::listing::listed_names;

/// Reads and merges the listing resources packaged for a root.
#[derive(Debug, Clone, Default)]
pub struct ManifestSubtypeFinder {
	config: DiscoveryConfig,
}

impl ManifestSubtypeFinder {
	/// Finder with the default [`DiscoveryConfig`]: embedded sources only.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: DiscoveryConfig) -> Self {
		Self { config }
	}

	/// Union of listed names across every contributing resource for `root`.
	fn merged_names(&self, root: TypeKey) -> Result<BTreeSet<String>, DiscoveryError> {
		let mut names = BTreeSet::new();
		let mut resources = 0usize;

		if self.config.use_embedded() {
			for source in manifest_sources().filter(|s| s.root_key().id() == root.id()) {
				names.extend(listed_names(source.contents).map(str::to_owned));
				resources += 1;
			}
		}

		let key = naming::listing_key(root);
		for dir in self.config.manifest_dirs() {
			let path = dir.join(SERVICES_NAMESPACE).join(&key);
			match fs::read_to_string(&path) {
				Ok(contents) => {
					names.extend(listed_names(&contents).map(str::to_owned));
					resources += 1;
				}
				Err(err) if err.kind() == ErrorKind::NotFound => {}
				Err(err) => return Err(DiscoveryError::Io { path, source: err }),
			}
		}

		tracing::debug!(
			root = root.path(),
			resources,
			names = names.len(),
			"merged listing resources"
		);
		Ok(names)
	}
}

impl SubtypeFinder for ManifestSubtypeFinder {
	fn find_subtypes(&self, root: TypeKey) -> Result<Vec<&'static SubtypeDef>, DiscoveryError> {
		let names = self.merged_names(root)?;

		// Fresh index per scan: discovery is a one-shot startup operation and
		// concurrent scans must not share mutable state.
		let mut pool: FxHashMap<&'static str, Vec<&'static SubtypeDef>> = FxHashMap::default();
		for def in candidates() {
			pool.entry(def.type_key().path()).or_default().push(def);
		}

		let mut found = Vec::with_capacity(names.len());
		for name in &names {
			let Some(defs) = pool.get(name.as_str()) else {
				tracing::debug!(
					name = name.as_str(),
					root = root.path(),
					"listed type not linked into this process; skipped"
				);
				continue;
			};
			match defs.iter().find(|def| def.root_key().id() == root.id()) {
				Some(def) => found.push(*def),
				None => {
					tracing::debug!(
						name = name.as_str(),
						root = root.path(),
						"listed type not assignable to root; skipped"
					);
				}
			}
		}

		Ok(dedup_by_type(found))
	}
}
