//! Transport primitives shared by the token provider and the offer search.
//!
//! Both outbound calls go through [`ReqwestHttpClient`], which applies a bounded request
//! timeout and refuses to follow redirects. Bodies are read fully and decoded with
//! `serde_path_to_error` so malformed payloads report the JSON path that broke.

// std
use std::{ops::Deref, time::Duration as StdDuration};
// crates.io
use reqwest::{Response, redirect::Policy};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, ParseError, TransportError, UpstreamError},
	provider::EndpointKind,
};

/// Timeouts applied to every outbound call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HttpSettings {
	/// Upper bound for a whole request, body included.
	pub timeout: StdDuration,
	/// Upper bound for establishing the connection.
	pub connect_timeout: StdDuration,
}
impl Default for HttpSettings {
	fn default() -> Self {
		Self { timeout: StdDuration::from_secs(10), connect_timeout: StdDuration::from_secs(5) }
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Neither endpoint is expected to redirect; a client built through [`ReqwestHttpClient::new`]
/// disables redirect following. Callers wrapping their own [`ReqwestClient`] via
/// [`ReqwestHttpClient::with_client`] are responsible for configuring timeouts.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Builds a client applying `settings`.
	pub fn new(settings: &HttpSettings) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder()
			.timeout(settings.timeout)
			.connect_timeout(settings.connect_timeout)
			.redirect(Policy::none())
			.build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Rejects non-2xx answers and returns the full body of successful ones.
pub(crate) async fn read_success_body(endpoint: EndpointKind, response: Response) -> Result<Vec<u8>> {
	let status = response.status();

	if !status.is_success() {
		return Err(UpstreamError::Status { endpoint, status: status.as_u16() }.into());
	}

	let body =
		response.bytes().await.map_err(|e| TransportError::from_reqwest(endpoint, e))?;

	Ok(body.to_vec())
}

/// Decodes a JSON body, keeping the path of the first mismatch.
pub(crate) fn decode_json<T>(endpoint: EndpointKind, body: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de)
		.map_err(|source| ParseError::Json { endpoint, source }.into())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Debug, Deserialize)]
	struct Envelope {
		#[allow(dead_code)]
		data: Vec<u8>,
	}

	#[test]
	fn decode_json_reports_the_failing_path() {
		let err = decode_json::<Envelope>(EndpointKind::FlightOffers, br#"{"data":[1,"x"]}"#)
			.expect_err("Mixed array should fail to decode.");

		match err {
			Error::Parse(ParseError::Json { endpoint, source }) => {
				assert_eq!(endpoint, EndpointKind::FlightOffers);
				assert_eq!(source.path().to_string(), "data[1]");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn decode_json_rejects_non_json_bodies() {
		let err = decode_json::<Envelope>(EndpointKind::Token, b"<html>gateway</html>")
			.expect_err("HTML should not decode.");

		assert!(matches!(err, Error::Parse(ParseError::Json { endpoint: EndpointKind::Token, .. })));
	}

	#[test]
	fn default_settings_are_bounded() {
		let settings = HttpSettings::default();

		assert!(settings.timeout > StdDuration::ZERO);
		assert!(settings.connect_timeout <= settings.timeout);
		ReqwestHttpClient::new(&settings).expect("Default settings should build a client.");
	}
}
