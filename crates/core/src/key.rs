use core::any::{TypeId, type_name};
use core::fmt;

/// Fully-qualified identity of a type participating in discovery.
///
/// Pairs the compiler's [`TypeId`] with the fully-qualified type path. Root
/// marker traits are identified by their `dyn Trait` type, so a root's key is
/// obtained with `TypeKey::of::<dyn MyRoot>()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
	id: TypeId,
	path: &'static str,
}

impl TypeKey {
	/// Returns the key for `T`. `T` may be unsized so `dyn Trait` roots work.
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			path: type_name::<T>(),
		}
	}

	/// Nominal identity used for all equality checks during discovery.
	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Fully-qualified type path as the compiler renders it.
	pub fn path(&self) -> &'static str {
		self.path
	}

	/// Final path segment with generic arguments stripped.
	pub fn simple_name(&self) -> &'static str {
		crate::naming::simple_name(self.path)
	}
}

impl fmt::Debug for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("TypeKey").field(&self.path).finish()
	}
}

impl fmt::Display for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.path)
	}
}
