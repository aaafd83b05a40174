//! Resolver construction.
//!
//! # Mental Model
//!
//! Uninitialized → Populated, in one step: construction runs the finder
//! once, names every discovered candidate, and freezes the registry. There
//! is no reset — callers wanting different results construct a new
//! resolver. Construction never partially registers: any fatal problem
//! aborts before a resolver exists.

use taxon_core::{TypeKey, default_root};

use crate::error::ResolveError;
use crate::finder::{ManifestSubtypeFinder, SubtypeFinder};
use crate::registry::SubtypeRegistry;

/// Discovers the subtypes of one root and freezes them into a registry.
#[derive(Debug)]
pub struct SubtypeResolver {
	root: TypeKey,
	registry: SubtypeRegistry,
}

impl SubtypeResolver {
	/// Default root (`dyn Discoverable`), default manifest finder.
	pub fn new() -> Result<Self, ResolveError> {
		Self::for_root(default_root())
	}

	/// Custom root, default manifest finder.
	pub fn for_root(root: TypeKey) -> Result<Self, ResolveError> {
		Self::with_finder(&ManifestSubtypeFinder::new(), root)
	}

	/// Custom root, custom finder.
	pub fn with_finder(finder: &dyn SubtypeFinder, root: TypeKey) -> Result<Self, ResolveError> {
		Self::build(finder, root, SubtypeRegistry::empty())
	}

	/// Builder form, for layering on a base registry or overriding pieces
	/// individually.
	pub fn builder<'f>() -> SubtypeResolverBuilder<'f> {
		SubtypeResolverBuilder::new()
	}

	/// Root this resolver discovered against.
	pub fn root(&self) -> TypeKey {
		self.root
	}

	/// Immutable view of the post-construction registry.
	pub fn registered_subtypes(&self) -> &SubtypeRegistry {
		&self.registry
	}

	fn build(
		finder: &dyn SubtypeFinder,
		root: TypeKey,
		mut registry: SubtypeRegistry,
	) -> Result<Self, ResolveError> {
		let found = finder.find_subtypes(root)?;
		let discovered = found.len();
		for def in found {
			registry.insert(def)?;
		}

		tracing::debug!(
			root = root.path(),
			discovered,
			registered = registry.len(),
			"resolver populated"
		);
		Ok(Self { root, registry })
	}
}

/// Assembles a [`SubtypeResolver`] from optional parts: a root (defaults to
/// `dyn Discoverable`), a finder (defaults to the manifest finder) and a
/// base registry to layer newly discovered pairs onto.
pub struct SubtypeResolverBuilder<'f> {
	root: TypeKey,
	finder: Option<&'f dyn SubtypeFinder>,
	base: SubtypeRegistry,
}

impl<'f> SubtypeResolverBuilder<'f> {
	fn new() -> Self {
		Self {
			root: default_root(),
			finder: None,
			base: SubtypeRegistry::empty(),
		}
	}

	pub fn root(mut self, root: TypeKey) -> Self {
		self.root = root;
		self
	}

	pub fn finder(mut self, finder: &'f dyn SubtypeFinder) -> Self {
		self.finder = Some(finder);
		self
	}

	/// Layers discovery on top of `base`: its entries are kept and newly
	/// discovered pairs merge in under the usual idempotence and conflict
	/// rules.
	pub fn base(mut self, base: SubtypeRegistry) -> Self {
		self.base = base;
		self
	}

	/// Runs discovery and freezes the registry.
	pub fn build(self) -> Result<SubtypeResolver, ResolveError> {
		match self.finder {
			Some(finder) => SubtypeResolver::build(finder, self.root, self.base),
			None => SubtypeResolver::build(&ManifestSubtypeFinder::new(), self.root, self.base),
		}
	}
}
