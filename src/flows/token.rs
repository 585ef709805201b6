//! Client Credentials grant with a single memoized slot and a singleflight guard.
//!
//! A credential fetched from the identity endpoint is reused for a fixed window (five
//! minutes by default) regardless of the provider's own `expires_in`. Concurrent callers that
//! miss the cache wait on one guard and re-check the store, so a stampede still issues a
//! single token request. Failures are never cached.

// self
use crate::{
	_prelude::*,
	auth::Credential,
	config::{ClientCredentials, EnvSecrets, SecretSource},
	error::{ParseError, TransportError},
	http::{self, ReqwestHttpClient},
	obs::{self, Operation, OperationSpan, Outcome},
	provider::{EndpointKind, ProviderDescriptor},
	store::{CredentialStore, MemoryStore},
};

const GRANT_TYPE: &str = "client_credentials";

#[derive(Deserialize)]
struct TokenResponse {
	access_token: String,
}

/// Obtains and memoizes bearer credentials.
#[derive(Clone)]
pub struct TokenProvider {
	/// HTTP client used for the identity endpoint.
	pub http_client: ReqwestHttpClient,
	/// Identity endpoint URL.
	pub token_endpoint: Url,
	/// Secret source consulted on every cache miss.
	pub secrets: Arc<dyn SecretSource>,
	/// Slot holding the memoized credential.
	pub store: Arc<dyn CredentialStore>,
	/// Memoization window.
	pub ttl: Duration,
	fetch_guard: Arc<AsyncMutex<()>>,
}
impl TokenProvider {
	/// Creates a provider with the default five-minute window.
	pub fn new(
		descriptor: &ProviderDescriptor,
		http_client: ReqwestHttpClient,
		secrets: Arc<dyn SecretSource>,
		store: Arc<dyn CredentialStore>,
	) -> Self {
		Self {
			http_client,
			token_endpoint: descriptor.endpoints.token.clone(),
			secrets,
			store,
			ttl: Credential::DEFAULT_TTL,
			fetch_guard: Arc::new(AsyncMutex::new(())),
		}
	}

	/// Creates a provider reading secrets from the environment and memoizing in memory.
	pub fn from_env(descriptor: &ProviderDescriptor, http_client: ReqwestHttpClient) -> Self {
		Self::new(descriptor, http_client, Arc::new(EnvSecrets), Arc::new(MemoryStore::default()))
	}

	/// Overrides the memoization window.
	pub fn with_ttl(mut self, ttl: Duration) -> Self {
		self.ttl = if ttl.is_negative() { Duration::ZERO } else { ttl };

		self
	}

	/// Returns a usable credential, or `None` on any failure.
	pub async fn token(&self) -> Option<Credential> {
		self.token_at(OffsetDateTime::now_utc()).await
	}

	/// Same as [`TokenProvider::token`] with `now` treated as the current instant.
	pub async fn token_at(&self, now: OffsetDateTime) -> Option<Credential> {
		match self.try_token_at(now).await {
			Ok(credential) => Some(credential),
			Err(e) => {
				obs::log_suppressed(Operation::TokenFetch, &e);
				obs::record_fallback(Operation::TokenFetch, e.failure());

				None
			},
		}
	}

	/// Returns a usable credential or the reason none could be obtained.
	pub async fn try_token(&self) -> Result<Credential> {
		self.try_token_at(OffsetDateTime::now_utc()).await
	}

	/// Same as [`TokenProvider::try_token`] with `now` treated as the current instant.
	pub async fn try_token_at(&self, now: OffsetDateTime) -> Result<Credential> {
		if let Some(current) = self.cached_at(now) {
			return Ok(current);
		}

		const OP: Operation = Operation::TokenFetch;

		let span = OperationSpan::new(OP, "try_token");

		obs::record_outcome(OP, Outcome::Attempt);

		let result: Result<Credential> = span
			.instrument(async move {
				let _singleflight = self.fetch_guard.lock().await;

				if let Some(current) = self.cached_at(now) {
					return Ok(current);
				}

				let credentials = ClientCredentials::load(self.secrets.as_ref())?;
				let credential = self.request_token(&credentials, now).await?;

				self.store.save(credential.clone());

				Ok(credential)
			})
			.await;

		match &result {
			Ok(_) => obs::record_outcome(OP, Outcome::Success),
			Err(_) => obs::record_outcome(OP, Outcome::Failure),
		}

		result
	}

	/// Drops the memoized credential so the next call hits the identity endpoint.
	pub fn invalidate(&self) -> Option<Credential> {
		self.store.evict()
	}

	fn cached_at(&self, now: OffsetDateTime) -> Option<Credential> {
		self.store.fetch().filter(|credential| credential.is_active_at(now))
	}

	async fn request_token(
		&self,
		credentials: &ClientCredentials,
		now: OffsetDateTime,
	) -> Result<Credential> {
		const ENDPOINT: EndpointKind = EndpointKind::Token;

		let form = [
			("grant_type", GRANT_TYPE),
			("client_id", credentials.client_id.as_str()),
			("client_secret", credentials.client_secret.expose()),
		];
		let response = self
			.http_client
			.post(self.token_endpoint.clone())
			.form(&form)
			.send()
			.await
			.map_err(|e| TransportError::from_reqwest(ENDPOINT, e))?;
		let body = http::read_success_body(ENDPOINT, response).await?;
		let payload: TokenResponse = http::decode_json(ENDPOINT, &body)?;

		if payload.access_token.trim().is_empty() {
			return Err(ParseError::EmptyAccessToken.into());
		}

		Ok(Credential::new(payload.access_token, now, self.ttl))
	}
}
impl Debug for TokenProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenProvider")
			.field("token_endpoint", &self.token_endpoint.as_str())
			.field("ttl", &self.ttl)
			.field("cached", &self.store.fetch().is_some())
			.finish()
	}
}
