use core::any::Any;

use crate::TypeKey;

/// Base capability marker for discoverable subtypes.
///
/// Serves as the default root when a resolver is constructed without an
/// explicit one. Nothing in discovery requires this particular root: any
/// object-safe marker trait works, and a type may be registered under
/// several roots at once.
pub trait Discoverable: Any + Send + Sync {}

/// Key of the default root, `dyn Discoverable`.
pub fn default_root() -> TypeKey {
	TypeKey::of::<dyn Discoverable>()
}
