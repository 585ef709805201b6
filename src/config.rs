//! Secret lookup for the client-credentials grant.
//!
//! Secrets are read through a [`SecretSource`] every time a token is fetched, so rotating
//! `AMADEUS_API_KEY`/`AMADEUS_API_SECRET` takes effect on the next cache miss without
//! rebuilding the client.

// self
use crate::{_prelude::*, auth::SecretString, error::ConfigError};

/// Configuration key holding the OAuth client identifier.
pub const API_KEY_VAR: &str = "AMADEUS_API_KEY";
/// Configuration key holding the OAuth client secret.
pub const API_SECRET_VAR: &str = "AMADEUS_API_SECRET";

/// Process-wide secret store consulted at call time.
pub trait SecretSource
where
	Self: Send + Sync,
{
	/// Returns the value stored under `name`, if any.
	fn secret(&self, name: &str) -> Option<String>;
}

/// Reads secrets from the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvSecrets;
impl SecretSource for EnvSecrets {
	fn secret(&self, name: &str) -> Option<String> {
		std::env::var(name).ok()
	}
}

/// In-memory secret map, mostly useful for tests and embedding.
#[derive(Clone, Default)]
pub struct StaticSecrets(HashMap<String, String>);
impl StaticSecrets {
	/// Builds a source holding both API credentials.
	pub fn api_credentials(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self::default().with(API_KEY_VAR, client_id).with(API_SECRET_VAR, client_secret)
	}

	/// Adds or replaces a single entry.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.0.insert(name.into(), value.into());

		self
	}
}
impl SecretSource for StaticSecrets {
	fn secret(&self, name: &str) -> Option<String> {
		self.0.get(name).cloned()
	}
}
impl Debug for StaticSecrets {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_set().entries(self.0.keys()).finish()
	}
}

/// Client identifier and secret presented to the identity endpoint.
#[derive(Clone, Debug)]
pub struct ClientCredentials {
	/// OAuth client identifier (`AMADEUS_API_KEY`).
	pub client_id: String,
	/// OAuth client secret (`AMADEUS_API_SECRET`).
	pub client_secret: SecretString,
}
impl ClientCredentials {
	/// Loads both values, failing on the first one that is absent or blank.
	pub fn load(source: &dyn SecretSource) -> Result<Self, ConfigError> {
		let client_id = required(source, API_KEY_VAR)?;
		let client_secret = required(source, API_SECRET_VAR)?;

		Ok(Self { client_id: client_id.expose().to_owned(), client_secret })
	}
}

fn required(source: &dyn SecretSource, name: &'static str) -> Result<SecretString, ConfigError> {
	source
		.secret(name)
		.map(SecretString::from)
		.filter(|value| !value.is_blank())
		.ok_or(ConfigError::MissingSecret { name })
}
