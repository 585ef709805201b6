//! Memoizable bearer credential with a locally imposed expiry window.

// self
use crate::{_prelude::*, auth::SecretString};

/// Lifecycle status for a cached credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialStatus {
	/// Credential may be reused without contacting the identity endpoint.
	Active,
	/// Credential outlived its local window and must be fetched again.
	Expired,
}

/// Bearer token issued by the identity endpoint.
///
/// The expiry is derived from the local memoization window, not from the provider's
/// `expires_in`: a credential is reused for at most `ttl` after it was fetched even if the
/// provider would honor it longer.
#[derive(Clone)]
pub struct Credential {
	/// Access token secret; callers must avoid logging it.
	pub access_token: SecretString,
	/// Instant the credential was obtained.
	pub fetched_at: OffsetDateTime,
	/// Instant after which the credential is no longer reused.
	pub expires_at: OffsetDateTime,
}
impl Credential {
	/// Memoization window applied when no other TTL is configured.
	pub const DEFAULT_TTL: Duration = Duration::minutes(5);

	/// Creates a credential fetched at `fetched_at` that stays reusable for `ttl`.
	pub fn new(access_token: impl Into<String>, fetched_at: OffsetDateTime, ttl: Duration) -> Self {
		let ttl = if ttl.is_negative() { Duration::ZERO } else { ttl };

		Self {
			access_token: SecretString::new(access_token),
			fetched_at,
			expires_at: fetched_at + ttl,
		}
	}

	/// Computes the lifecycle status at a given instant.
	pub fn status_at(&self, instant: OffsetDateTime) -> CredentialStatus {
		if instant >= self.expires_at { CredentialStatus::Expired } else { CredentialStatus::Active }
	}

	/// Returns `true` if the credential can be reused at the provided instant.
	pub fn is_active_at(&self, instant: OffsetDateTime) -> bool {
		matches!(self.status_at(instant), CredentialStatus::Active)
	}

	/// Returns the bearer value for the `Authorization` header.
	pub fn bearer(&self) -> &str {
		self.access_token.expose()
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credential")
			.field("access_token", &"<redacted>")
			.field("fetched_at", &self.fetched_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}
