//! Storage contract and the built-in single-slot store for memoized credentials.

pub mod memory;

pub use memory::MemoryStore;

// self
use crate::auth::Credential;

/// Holder for the one credential the token provider may reuse.
///
/// The slot is keyed by nothing: there is exactly one client identity per provider, so a
/// store either has a credential or it does not. Freshness is decided by the caller.
pub trait CredentialStore
where
	Self: Send + Sync,
{
	/// Returns the stored credential, fresh or not.
	fn fetch(&self) -> Option<Credential>;

	/// Stores `credential`, replacing any previous one.
	fn save(&self, credential: Credential);

	/// Removes and returns the stored credential.
	fn evict(&self) -> Option<Credential>;
}
