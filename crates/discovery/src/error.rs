//! Error taxonomy for discovery and registration.
//!
//! Per-entry problems (one stale listing line) are absorbed where they occur
//! and never surface here. These errors are the fatal ones: a resource that
//! exists but cannot be read, and registry clashes that would make wire
//! decoding ambiguous. All of them abort resolver construction.

use std::io;
use std::path::PathBuf;

/// Failures while enumerating listing resources.
///
/// An absent resource is not an error — a root with no packaged listings
/// simply has no discovered subtypes.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
	/// A listing resource exists but could not be read.
	#[error("failed to read listing resource {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Fatal registration errors surfaced at resolver construction.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
	#[error(transparent)]
	Discovery(#[from] DiscoveryError),

	/// Two distinct types mapped to the same discriminator.
	#[error("discriminator conflict: name={name:?} existing={existing} incoming={incoming}")]
	Conflict {
		name: &'static str,
		existing: &'static str,
		incoming: &'static str,
	},

	/// One type registered under two different discriminators.
	#[error("type already named: type={ty} existing={existing:?} incoming={incoming:?}")]
	TypeAlreadyNamed {
		ty: &'static str,
		existing: &'static str,
		incoming: &'static str,
	},

	/// A registration produced an empty discriminator.
	#[error("empty discriminator: type={ty}")]
	EmptyDiscriminator { ty: &'static str },
}
