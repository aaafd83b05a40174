//! Subtype discovery and registration.
//!
//! # Purpose
//!
//! Given a root marker trait, locate every concrete subtype linked into the
//! process and freeze the result into an immutable (discriminator → type)
//! registry a serialization engine can consume. Callers never hand-list
//! variants; crates declare them at their definition site and discovery
//! assembles the registry at startup.
//!
//! # Mental Model
//!
//! 1. **Declare:** crates register candidates with
//!    [`discoverable_subtype!`] and package listings with
//!    [`subtype_manifest!`] (or ship listing files under a manifest
//!    directory's `services/` namespace).
//! 2. **Discover:** a [`SubtypeFinder`] strategy enumerates the candidates
//!    for one root. The default [`ManifestSubtypeFinder`] merges every
//!    contributing listing resource and resolves names against the linked
//!    candidate pool.
//! 3. **Resolve:** [`SubtypeResolver`] construction runs the finder once,
//!    computes each candidate's wire discriminator, and inserts the pairs
//!    into its [`SubtypeRegistry`] — idempotent for identical pairs,
//!    fail-fast on discriminator clashes.
//! 4. **Consume:** [`SubtypeResolver::registered_subtypes`] exposes the
//!    frozen registry; the engine looks entries up by discriminator for
//!    decoding and by type for encoding.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`SubtypeFinder`] | Discovery strategy seam. |
//! | [`ManifestSubtypeFinder`] | Default strategy over packaged listings. |
//! | [`StaticSubtypeFinder`] | Compiled explicit-list strategy. |
//! | [`SubtypeResolver`] | One-shot orchestrator owning the registry. |
//! | [`SubtypeRegistry`] | Frozen discriminator ↔ type mapping. |
//!
//! # Concurrency
//!
//! Discovery is synchronous and run-to-completion on the constructing
//! thread. The registry is written once during construction and never
//! mutated afterwards, so shared references to it are safe across threads
//! without locking. Resolvers constructed concurrently perform independent
//! scans; there is no shared mutable state between instances.

mod config;
mod error;
mod listing;
mod registry;
mod resolver;

pub mod finder;

pub use config::{DiscoveryConfig, SERVICES_NAMESPACE};
pub use error::{DiscoveryError, ResolveError};
pub use finder::{ManifestSubtypeFinder, StaticSubtypeFinder, SubtypeFinder};
pub use registry::{RegisteredSubtype, SubtypeRegistry};
pub use resolver::{SubtypeResolver, SubtypeResolverBuilder};

// Re-export the declaration vocabulary so depending on this crate is enough.
pub use taxon_core::{
	DecodeFn, Discoverable, ManifestSource, SubtypeDef, TypeKey, candidates, default_root,
	discoverable_subtype, manifest_sources, naming, subtype_manifest,
};

#[cfg(test)]
mod tests;
