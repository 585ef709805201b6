mod common;

// crates.io
use httpmock::prelude::*;
use time::{Duration, OffsetDateTime, macros};
// self
use common::*;
use flight_playbook::{
	config::{API_KEY_VAR, StaticSecrets},
	error::{ConfigError, Error, ParseError, UpstreamError},
	provider::{EndpointKind, TOKEN_PATH},
	store::CredentialStore,
};

const NOW: OffsetDateTime = macros::datetime!(2025-06-01 09:00 UTC);

#[tokio::test]
async fn posts_client_credentials_form_and_extracts_access_token() {
	let server = MockServer::start_async().await;
	let (provider, store) = build_token_provider(&server, valid_secrets());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(TOKEN_PATH)
				.header("content-type", "application/x-www-form-urlencoded")
				.body_includes("grant_type=client_credentials")
				.body_includes(format!("client_id={CLIENT_ID}"))
				.body_includes(format!("client_secret={CLIENT_SECRET}"));
			then.status(200)
				.header("content-type", "application/json")
				.body(token_body("tok-form"));
		})
		.await;
	let credential =
		provider.try_token_at(NOW).await.expect("Token request with valid secrets should succeed.");

	assert_eq!(credential.bearer(), "tok-form");
	assert_eq!(credential.fetched_at, NOW);
	assert_eq!(credential.expires_at, NOW + Duration::minutes(5));
	assert_eq!(store.fetch().map(|c| c.bearer().to_owned()).as_deref(), Some("tok-form"));

	mock.assert_async().await;
}

#[tokio::test]
async fn memoizes_for_five_minutes_then_refetches() {
	let server = MockServer::start_async().await;
	let (provider, _store) = build_token_provider(&server, valid_secrets());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200)
				.header("content-type", "application/json")
				.body(token_body("tok-cached"));
		})
		.await;

	provider.token_at(NOW).await.expect("First call should fetch a token.");
	provider
		.token_at(NOW + Duration::minutes(4) + Duration::seconds(59))
		.await
		.expect("Second call inside the window should reuse the token.");

	mock.assert_calls_async(1).await;

	let refreshed = provider
		.token_at(NOW + Duration::minutes(6))
		.await
		.expect("Call after the window should fetch again.");

	assert_eq!(refreshed.fetched_at, NOW + Duration::minutes(6));

	mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn concurrent_misses_issue_one_request() {
	let server = MockServer::start_async().await;
	let (provider, _store) = build_token_provider(&server, valid_secrets());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200)
				.header("content-type", "application/json")
				.body(token_body("tok-guard"))
				.delay(std::time::Duration::from_millis(50));
		})
		.await;
	let (first, second) = tokio::join!(provider.token_at(NOW), provider.token_at(NOW));

	assert_eq!(first.expect("First concurrent call should succeed.").bearer(), "tok-guard");
	assert_eq!(second.expect("Second concurrent call should succeed.").bearer(), "tok-guard");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn rejected_client_yields_absent_and_caches_nothing() {
	let server = MockServer::start_async().await;
	let (provider, store) = build_token_provider(&server, valid_secrets());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(401).header("content-type", "application/json").body(
				r#"{"error":"invalid_client","error_description":"Client credentials are invalid","code":38187}"#,
			);
		})
		.await;

	assert!(provider.token_at(NOW).await.is_none());
	assert!(store.fetch().is_none());

	let err = provider.try_token_at(NOW).await.expect_err("401 should surface as an error.");

	assert!(matches!(
		err,
		Error::Upstream(UpstreamError::Status { endpoint: EndpointKind::Token, status: 401 })
	));

	mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn missing_secret_never_reaches_the_network() {
	let server = MockServer::start_async().await;
	let (provider, _store) =
		build_token_provider(&server, StaticSecrets::default().with(API_KEY_VAR, CLIENT_ID));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).body(token_body("unused"));
		})
		.await;
	let err = provider.try_token_at(NOW).await.expect_err("Missing secret should fail.");

	assert!(matches!(err, Error::Config(ConfigError::MissingSecret { name: "AMADEUS_API_SECRET" })));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn malformed_or_empty_token_bodies_yield_absent() {
	let server = MockServer::start_async().await;
	let (provider, _store) = build_token_provider(&server, valid_secrets());
	let mut mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").body(r#"{"token":"x"}"#);
		})
		.await;
	let err = provider.try_token_at(NOW).await.expect_err("Body without access_token should fail.");

	assert!(matches!(err, Error::Parse(ParseError::Json { endpoint: EndpointKind::Token, .. })));

	mock.delete_async().await;
	mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").body(token_body(""));
		})
		.await;

	assert!(provider.token_at(NOW).await.is_none());

	mock.assert_async().await;
}

#[tokio::test]
async fn invalidate_forces_a_new_fetch() {
	let server = MockServer::start_async().await;
	let (provider, _store) = build_token_provider(&server, valid_secrets());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200)
				.header("content-type", "application/json")
				.body(token_body("tok-invalidate"));
		})
		.await;

	provider.token_at(NOW).await.expect("Initial fetch should succeed.");

	assert!(provider.invalidate().is_some());

	provider.token_at(NOW).await.expect("Fetch after invalidation should succeed.");

	mock.assert_calls_async(2).await;
}
