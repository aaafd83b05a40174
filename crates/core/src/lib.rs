//! Shared vocabulary for discoverable subtype registration.
//!
//! This crate holds the leaf pieces the discovery machinery is built from:
//! type identity ([`TypeKey`]), the default root marker ([`Discoverable`]),
//! the link-time candidate pool ([`SubtypeDef`]/[`candidates`]), embedded
//! listing resources ([`ManifestSource`]/[`manifest_sources`]), and the
//! registration macros that populate both.
//!
//! Depend on `taxon-discovery` for the finder strategies and the resolver;
//! depend on this crate alone when all a crate does is declare subtypes.

mod candidate;
mod discoverable;
mod key;
mod macros;
mod manifest_source;

pub mod naming;

pub use candidate::{DecodeFn, SubtypeDef, SubtypeReg, candidates};
pub use discoverable::{Discoverable, default_root};
pub use key::TypeKey;
pub use manifest_source::{ManifestSource, ManifestSourceReg, manifest_sources};

// Macro support. The registration macros expand against these paths so that
// depending on `taxon-core` is enough to use them.
#[doc(hidden)]
pub use {erased_serde, inventory};
