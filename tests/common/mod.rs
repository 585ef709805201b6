//! Helpers shared by the integration tests.

#![allow(dead_code)]

// std
use std::{sync::Arc, time::Duration as StdDuration};
// crates.io
use httpmock::prelude::*;
// self
use flight_playbook::{
	config::StaticSecrets,
	flows::{FlightSearchClient, TokenProvider},
	http::ReqwestHttpClient,
	provider::{FLIGHT_OFFERS_PATH, ProviderDescriptor, TOKEN_PATH},
	reqwest::Client,
	store::MemoryStore,
	url::Url,
};

pub const CLIENT_ID: &str = "playbook-client";
pub const CLIENT_SECRET: &str = "playbook-secret";

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock` and gives up quickly.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.timeout(StdDuration::from_secs(5))
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

pub fn build_descriptor(server: &MockServer) -> ProviderDescriptor {
	ProviderDescriptor::builder("mock-amadeus")
		.token_endpoint(
			Url::parse(&server.url(TOKEN_PATH)).expect("Mock token endpoint should parse."),
		)
		.flight_offers_endpoint(
			Url::parse(&server.url(FLIGHT_OFFERS_PATH))
				.expect("Mock flight-offers endpoint should parse."),
		)
		.build()
		.expect("Mock provider descriptor should build.")
}

pub fn build_token_provider(
	server: &MockServer,
	secrets: StaticSecrets,
) -> (TokenProvider, Arc<MemoryStore>) {
	let store = Arc::new(MemoryStore::default());
	let provider = TokenProvider::new(
		&build_descriptor(server),
		test_reqwest_http_client(),
		Arc::new(secrets),
		store.clone(),
	);

	(provider, store)
}

pub fn build_search_client(server: &MockServer, secrets: StaticSecrets) -> FlightSearchClient {
	let (tokens, _store) = build_token_provider(server, secrets);

	FlightSearchClient::new(&build_descriptor(server), test_reqwest_http_client(), tokens)
}

pub fn valid_secrets() -> StaticSecrets {
	StaticSecrets::api_credentials(CLIENT_ID, CLIENT_SECRET)
}

pub fn token_body(access_token: &str) -> String {
	format!(
		r#"{{"type":"amadeusOAuth2Token","username":"desk@example.com","application_name":"playbook","client_id":"{CLIENT_ID}","token_type":"Bearer","access_token":"{access_token}","expires_in":1799,"state":"approved","scope":""}}"#
	)
}

pub fn offer(carrier: &str, total: &str, duration: &str) -> serde_json::Value {
	serde_json::json!({
		"type": "flight-offer",
		"id": "1",
		"source": "GDS",
		"itineraries": [{
			"duration": duration,
			"segments": [{
				"departure": { "iataCode": "SOF", "at": "2025-06-01T06:05:00" },
				"arrival": { "iataCode": "CDG", "at": "2025-06-01T08:40:00" },
				"carrierCode": carrier,
				"number": "431"
			}]
		}],
		"price": { "currency": "EUR", "total": total, "base": "99.00" }
	})
}

pub fn offers_body(offers: Vec<serde_json::Value>) -> serde_json::Value {
	serde_json::json!({ "meta": { "count": offers.len() }, "data": offers })
}
