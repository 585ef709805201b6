//! Crate-level error types shared by the token provider, the offer search, and the playbook.

// self
use crate::{_prelude::*, provider::EndpointKind, search::SearchFailure};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;
type JsonPathError = serde_path_to_error::Error<serde_json::Error>;

/// Canonical error exposed by the fallible (`try_*`) APIs.
///
/// The non-fallible entry points never return this type; they classify it through
/// [`Error::failure`] and hand the caller a [`SearchFailure`] instead.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (missing secret, bad endpoint, client build).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Upstream answered with a non-success status.
	#[error(transparent)]
	Upstream(#[from] UpstreamError),
	/// Upstream body could not be interpreted.
	#[error(transparent)]
	Parse(#[from] ParseError),
}
impl Error {
	/// Endpoint the failure is attributed to, when it happened on the wire.
	pub fn endpoint(&self) -> Option<EndpointKind> {
		match self {
			Self::Config(_) => None,
			Self::Transport(e) => Some(e.endpoint()),
			Self::Upstream(UpstreamError::Status { endpoint, .. }) => Some(*endpoint),
			Self::Parse(e) => Some(e.endpoint()),
		}
	}

	/// Collapses the detailed error into the user-facing failure taxonomy.
	///
	/// Anything that happens on the way to a credential (configuration included) is a
	/// [`SearchFailure::MissingCredential`]. On the search endpoint, transport and status
	/// failures become [`SearchFailure::RequestFailure`] and body problems become
	/// [`SearchFailure::MalformedResponse`].
	pub fn failure(&self) -> SearchFailure {
		match (self, self.endpoint()) {
			(_, None) | (_, Some(EndpointKind::Token)) => SearchFailure::MissingCredential,
			(Self::Parse(_), Some(EndpointKind::FlightOffers)) => SearchFailure::MalformedResponse,
			(_, Some(EndpointKind::FlightOffers)) => SearchFailure::RequestFailure,
		}
	}
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// A required secret is absent or blank.
	#[error("Secret `{name}` is not configured.")]
	MissingSecret {
		/// Configuration key that was looked up.
		name: &'static str,
	},
	/// Provider descriptor failed validation.
	#[error(transparent)]
	InvalidDescriptor(#[from] crate::provider::ProviderDescriptorError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, timeout).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// The bounded request timeout elapsed.
	#[error("Request to the {endpoint} endpoint timed out.")]
	Timeout {
		/// Endpoint that was being called.
		endpoint: EndpointKind,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the {endpoint} endpoint.")]
	Network {
		/// Endpoint that was being called.
		endpoint: EndpointKind,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Classifies a reqwest failure raised while talking to `endpoint`.
	pub fn from_reqwest(endpoint: EndpointKind, e: ReqwestError) -> Self {
		if e.is_timeout() {
			Self::Timeout { endpoint }
		} else {
			Self::Network { endpoint, source: Box::new(e) }
		}
	}

	/// Endpoint that was being called.
	pub fn endpoint(&self) -> EndpointKind {
		match self {
			Self::Timeout { endpoint } | Self::Network { endpoint, .. } => *endpoint,
		}
	}
}

/// Non-success answers from the provider.
#[derive(Debug, ThisError)]
pub enum UpstreamError {
	/// HTTP status outside the 2xx range.
	#[error("The {endpoint} endpoint returned HTTP {status}.")]
	Status {
		/// Endpoint that answered.
		endpoint: EndpointKind,
		/// HTTP status code.
		status: u16,
	},
}

/// Body decoding failures.
#[derive(Debug, ThisError)]
pub enum ParseError {
	/// The body was not JSON or did not match the expected envelope.
	#[error("The {endpoint} endpoint returned malformed JSON.")]
	Json {
		/// Endpoint that answered.
		endpoint: EndpointKind,
		/// Structured parsing failure carrying the JSON path.
		#[source]
		source: JsonPathError,
	},
	/// Token response carried an empty `access_token`.
	#[error("The token endpoint returned an empty access token.")]
	EmptyAccessToken,
	/// One of the inspected offers did not deserialize.
	#[error("Offer #{index} is malformed.")]
	Offer {
		/// Zero-based position in the provider's `data` list.
		index: usize,
		/// Structured parsing failure carrying the JSON path inside the offer.
		#[source]
		source: JsonPathError,
	},
	/// One of the inspected offers lacks a required nested element.
	#[error("Offer #{index} is missing `{field}`.")]
	OfferMissing {
		/// Zero-based position in the provider's `data` list.
		index: usize,
		/// Field path that was absent.
		field: &'static str,
	},
}
impl ParseError {
	/// Endpoint whose body failed to parse.
	pub fn endpoint(&self) -> EndpointKind {
		match self {
			Self::Json { endpoint, .. } => *endpoint,
			Self::EmptyAccessToken => EndpointKind::Token,
			Self::Offer { .. } | Self::OfferMissing { .. } => EndpointKind::FlightOffers,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_side_failures_collapse_into_missing_credential() {
		let config: Error = ConfigError::MissingSecret { name: "AMADEUS_API_KEY" }.into();
		let status: Error =
			UpstreamError::Status { endpoint: EndpointKind::Token, status: 401 }.into();
		let timeout: Error = TransportError::Timeout { endpoint: EndpointKind::Token }.into();
		let empty: Error = ParseError::EmptyAccessToken.into();

		for err in [config, status, timeout, empty] {
			assert_eq!(err.failure(), SearchFailure::MissingCredential, "{err}");
		}
	}

	#[test]
	fn search_side_failures_split_into_request_and_malformed() {
		let status: Error =
			UpstreamError::Status { endpoint: EndpointKind::FlightOffers, status: 500 }.into();
		let timeout: Error =
			TransportError::Timeout { endpoint: EndpointKind::FlightOffers }.into();
		let missing: Error = ParseError::OfferMissing { index: 1, field: "itineraries[0]" }.into();

		assert_eq!(status.failure(), SearchFailure::RequestFailure);
		assert_eq!(timeout.failure(), SearchFailure::RequestFailure);
		assert_eq!(missing.failure(), SearchFailure::MalformedResponse);
	}

	#[test]
	fn messages_name_the_endpoint() {
		let err: Error =
			UpstreamError::Status { endpoint: EndpointKind::FlightOffers, status: 503 }.into();

		assert_eq!(err.to_string(), "The flight_offers endpoint returned HTTP 503.");
	}
}
