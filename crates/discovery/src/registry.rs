//! The frozen discriminator registry.
//!
//! # Role
//!
//! Owns the post-construction mapping in both directions: wire discriminator
//! → registered subtype for decoding, and concrete type → discriminator for
//! encoding. Built once by a resolver, then exposed only behind a shared
//! reference — there is no mutating surface outside the build step, which is
//! what makes unsynchronized concurrent reads safe.
//!
//! # Invariants
//!
//! - One type per discriminator and one discriminator per type; violations
//!   fail the build, they are never resolved silently.
//! - Iteration order is discriminator order, stable across runs.

use core::any::TypeId;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use rustc_hash::FxHashMap;
use taxon_core::{DecodeFn, SubtypeDef, TypeKey};

use crate::error::ResolveError;

/// One (discriminator, type) pair held by the registry.
#[derive(Clone, Copy, Debug)]
pub struct RegisteredSubtype {
	name: &'static str,
	def: &'static SubtypeDef,
}

impl RegisteredSubtype {
	/// Wire discriminator.
	pub fn discriminator(&self) -> &'static str {
		self.name
	}

	/// Identity of the concrete type.
	pub fn type_key(&self) -> TypeKey {
		self.def.type_key()
	}

	/// Crate that declared the registration.
	pub fn package(&self) -> &'static str {
		self.def.package
	}

	/// Decode hook for the serialization engine.
	pub fn decode(&self) -> DecodeFn {
		self.def.decode
	}
}

/// Write-once mapping between discriminators and concrete types.
///
/// A registry is also usable as a layering base: pass a populated one to
/// [`SubtypeResolver::builder`](crate::SubtypeResolver::builder) and newly
/// discovered pairs merge into it.
#[derive(Clone, Debug, Default)]
pub struct SubtypeRegistry {
	by_name: BTreeMap<&'static str, RegisteredSubtype>,
	by_type: FxHashMap<TypeId, &'static str>,
}

impl SubtypeRegistry {
	/// An empty registry.
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}

	/// Looks up the entry a wire discriminator selects.
	pub fn get(&self, discriminator: &str) -> Option<&RegisteredSubtype> {
		self.by_name.get(discriminator)
	}

	/// Reverse lookup: the discriminator a concrete type serializes under.
	pub fn discriminator_for(&self, ty: TypeId) -> Option<&'static str> {
		self.by_type.get(&ty).copied()
	}

	pub fn contains(&self, discriminator: &str) -> bool {
		self.by_name.contains_key(discriminator)
	}

	/// Iterates entries in discriminator order.
	pub fn iter(&self) -> impl Iterator<Item = &RegisteredSubtype> {
		self.by_name.values()
	}

	/// Registers one pair. Re-registering an identical pair is a no-op; a
	/// discriminator or type clash is fatal.
	pub(crate) fn insert(&mut self, def: &'static SubtypeDef) -> Result<(), ResolveError> {
		let name = def.discriminator();
		let ty = def.type_key();
		if name.is_empty() {
			return Err(ResolveError::EmptyDiscriminator { ty: ty.path() });
		}

		match self.by_name.entry(name) {
			Entry::Occupied(occupied) => {
				let existing = occupied.get();
				if existing.type_key().id() == ty.id() {
					return Ok(());
				}
				Err(ResolveError::Conflict {
					name,
					existing: existing.type_key().path(),
					incoming: ty.path(),
				})
			}
			Entry::Vacant(slot) => {
				if let Some(&existing) = self.by_type.get(&ty.id()) {
					return Err(ResolveError::TypeAlreadyNamed {
						ty: ty.path(),
						existing,
						incoming: name,
					});
				}
				slot.insert(RegisteredSubtype { name, def });
				self.by_type.insert(ty.id(), name);
				Ok(())
			}
		}
	}
}
