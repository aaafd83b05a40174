//! Link-time candidate pool.
//!
//! Every type declared with [`discoverable_subtype!`](crate::discoverable_subtype)
//! contributes one static [`SubtypeDef`] per root it is registered under. The
//! pool is assembled by the linker through `inventory`; a listed name "loads"
//! iff a matching def was linked into the running binary. The pool itself is
//! not a registry: finders consult it, resolvers decide what gets registered.

use core::any::Any;
use core::fmt;

use crate::TypeKey;

/// Type-erased decode hook: materializes a value of the registered type from
/// any self-describing format. Stored for the serialization engine to invoke
/// after discriminator dispatch; discovery never calls it.
pub type DecodeFn = fn(
	&mut dyn erased_serde::Deserializer<'_>,
) -> Result<Box<dyn Any + Send + Sync>, erased_serde::Error>;

/// One candidate registration: a concrete type declared discoverable under a
/// root marker trait.
///
/// The type and root keys are thunks because [`core::any::TypeId`] cannot be
/// produced in a `static` initializer; they are evaluated on first use.
pub struct SubtypeDef {
	/// Key of the concrete type.
	pub ty: fn() -> TypeKey,
	/// Key of the root (`dyn Trait`) this registration targets.
	pub root: fn() -> TypeKey,
	/// Crate that declared the registration.
	pub package: &'static str,
	/// Explicit discriminator; `None` falls back to the naming default.
	pub name: Option<&'static str>,
	/// Decode hook for the serialization engine.
	pub decode: DecodeFn,
}

impl SubtypeDef {
	/// Identity of the concrete type.
	pub fn type_key(&self) -> TypeKey {
		(self.ty)()
	}

	/// Identity of the root this registration targets.
	pub fn root_key(&self) -> TypeKey {
		(self.root)()
	}

	/// Wire discriminator: the explicit name if one was given, otherwise the
	/// type's simple name.
	pub fn discriminator(&self) -> &'static str {
		self.name.unwrap_or_else(|| self.type_key().simple_name())
	}
}

impl fmt::Debug for SubtypeDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SubtypeDef")
			.field("ty", &self.type_key().path())
			.field("root", &self.root_key().path())
			.field("package", &self.package)
			.field("name", &self.name)
			.finish_non_exhaustive()
	}
}

/// Wrapper for `inventory::collect!`.
pub struct SubtypeReg(pub &'static SubtypeDef);

inventory::collect!(SubtypeReg);

/// Iterates every candidate linked into the process, across all roots.
pub fn candidates() -> impl Iterator<Item = &'static SubtypeDef> {
	inventory::iter::<SubtypeReg>.into_iter().map(|reg| reg.0)
}
