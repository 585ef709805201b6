//! Flight-offers search with graceful degradation.
//!
//! Every search runs `Start → token → request → parse` once. A missing credential ends in the
//! "No API access" fallback, anything that goes wrong after that ends in the manual-playbook
//! fallback, and a clean parse ends with up to three offers. There are no retries; a new
//! call starts over.

// self
use crate::{
	_prelude::*,
	auth::Credential,
	error::TransportError,
	flows::TokenProvider,
	http::{self, HttpSettings, ReqwestHttpClient},
	obs::{self, Operation, OperationSpan, Outcome},
	provider::{EndpointKind, ProviderDescriptor},
	search::{self, LocationCode, LocationCodeError, OfferRow, SearchOutcome, SearchRequest},
};

/// Issues flight-offers searches on behalf of the display layer.
#[derive(Clone, Debug)]
pub struct FlightSearchClient {
	/// HTTP client used for the search endpoint.
	pub http_client: ReqwestHttpClient,
	/// Flight-offers endpoint URL.
	pub flight_offers_endpoint: Url,
	/// Credential source consulted before every search.
	pub tokens: TokenProvider,
}
impl FlightSearchClient {
	/// Creates a client that shares `tokens` (and its memoized credential).
	pub fn new(
		descriptor: &ProviderDescriptor,
		http_client: ReqwestHttpClient,
		tokens: TokenProvider,
	) -> Self {
		Self { http_client, flight_offers_endpoint: descriptor.endpoints.flight_offers.clone(), tokens }
	}

	/// Builds a client with bounded timeouts, environment secrets, and an in-memory token slot.
	pub fn from_env(descriptor: &ProviderDescriptor, settings: &HttpSettings) -> Result<Self> {
		let http_client = ReqwestHttpClient::new(settings)?;
		let tokens = TokenProvider::from_env(descriptor, http_client.clone());

		Ok(Self::new(descriptor, http_client, tokens))
	}

	/// Searches offers for `request`, never failing.
	///
	/// The detailed cause of a fallback is logged and reduced to its
	/// [`SearchFailure`](crate::search::SearchFailure) kind.
	pub async fn search(&self, request: &SearchRequest) -> SearchOutcome {
		let result = self.try_search(request).await;

		if let Err(e) = &result {
			obs::log_suppressed(Operation::FlightSearch, e);
			obs::record_fallback(Operation::FlightSearch, e.failure());
		}

		result.into()
	}

	/// Convenience wrapper taking raw codes; only the codes themselves can be rejected.
	pub async fn search_flights(
		&self,
		origin: &str,
		destination: &str,
		departure_date: Date,
	) -> Result<SearchOutcome, LocationCodeError> {
		let request =
			SearchRequest::new(LocationCode::new(origin)?, LocationCode::new(destination)?, departure_date);

		Ok(self.search(&request).await)
	}

	/// Searches offers for `request`, surfacing the detailed error.
	pub async fn try_search(&self, request: &SearchRequest) -> Result<Vec<OfferRow>> {
		const OP: Operation = Operation::FlightSearch;

		let span = OperationSpan::new(OP, "try_search");

		obs::record_outcome(OP, Outcome::Attempt);

		let result: Result<Vec<OfferRow>> = span
			.instrument(async move {
				let credential = self.tokens.try_token().await?;

				self.fetch_offers(request, &credential).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_outcome(OP, Outcome::Success),
			Err(_) => obs::record_outcome(OP, Outcome::Failure),
		}

		result
	}

	async fn fetch_offers(
		&self,
		request: &SearchRequest,
		credential: &Credential,
	) -> Result<Vec<OfferRow>> {
		const ENDPOINT: EndpointKind = EndpointKind::FlightOffers;

		let response = self
			.http_client
			.get(self.flight_offers_endpoint.clone())
			.query(&request.query_pairs())
			.bearer_auth(credential.bearer())
			.send()
			.await
			.map_err(|e| TransportError::from_reqwest(ENDPOINT, e))?;
		let body = http::read_success_body(ENDPOINT, response).await?;

		search::parse_offer_rows(&body)
	}
}
