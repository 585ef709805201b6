//! Thread-safe in-memory [`CredentialStore`] implementation.

// self
use crate::{_prelude::*, auth::Credential, store::CredentialStore};

type Slot = Arc<Mutex<Option<Credential>>>;

/// Single-slot store that keeps the credential in-process; clones share the slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Slot);
impl CredentialStore for MemoryStore {
	fn fetch(&self) -> Option<Credential> {
		self.0.lock().clone()
	}

	fn save(&self, credential: Credential) {
		*self.0.lock() = Some(credential);
	}

	fn evict(&self) -> Option<Credential> {
		self.0.lock().take()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	fn credential(token: &str) -> Credential {
		Credential::new(token, macros::datetime!(2025-06-01 09:00 UTC), Credential::DEFAULT_TTL)
	}

	#[test]
	fn save_replaces_previous_credential() {
		let store = MemoryStore::default();

		assert!(store.fetch().is_none());

		store.save(credential("first"));
		store.save(credential("second"));

		let fetched = store.fetch().expect("Saved credential should be present.");

		assert_eq!(fetched.bearer(), "second");
	}

	#[test]
	fn clones_share_the_slot() {
		let store = MemoryStore::default();
		let shared = store.clone();

		store.save(credential("shared"));

		assert_eq!(shared.fetch().map(|c| c.bearer().to_owned()).as_deref(), Some("shared"));
		assert!(shared.evict().is_some());
		assert!(store.fetch().is_none());
	}
}
