//! Provider descriptor data structures shared by the token provider and the offer search.

/// Builder API for assembling provider descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::_prelude::*;

/// Path of the client-credentials token endpoint relative to the provider base URL.
pub const TOKEN_PATH: &str = "/v1/security/oauth2/token";
/// Path of the flight-offers search endpoint relative to the provider base URL.
pub const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";
/// Base URL of the Amadeus self-service test environment.
pub const AMADEUS_TEST_BASE_URL: &str = "https://test.api.amadeus.com";

/// Remote endpoints the crate talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
	/// OAuth-style identity endpoint issuing bearer tokens.
	Token,
	/// Flight-offers search endpoint.
	FlightOffers,
}
impl EndpointKind {
	/// Returns a stable label suitable for messages, span fields, or metric labels.
	pub const fn as_str(self) -> &'static str {
		match self {
			EndpointKind::Token => "token",
			EndpointKind::FlightOffers => "flight_offers",
		}
	}
}
impl Display for EndpointKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Endpoint set declared by a provider descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// Token endpoint used for the client-credentials grant.
	pub token: Url,
	/// Flight-offers search endpoint.
	pub flight_offers: Url,
}
impl ProviderEndpoints {
	/// Returns the URL for the requested endpoint.
	pub fn get(&self, kind: EndpointKind) -> &Url {
		match kind {
			EndpointKind::Token => &self.token,
			EndpointKind::FlightOffers => &self.flight_offers,
		}
	}
}

/// Immutable provider descriptor consumed by the flows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
	/// Human-readable descriptor name, used in logs.
	pub name: String,
	/// Endpoint definitions exposed by the provider.
	pub endpoints: ProviderEndpoints,
}
impl ProviderDescriptor {
	/// Creates a new builder for the provided name.
	pub fn builder(name: impl Into<String>) -> ProviderDescriptorBuilder {
		ProviderDescriptorBuilder::new(name)
	}

	/// Descriptor for the Amadeus self-service test environment.
	pub fn amadeus_test() -> Result<Self, ProviderDescriptorError> {
		let base = Url::parse(AMADEUS_TEST_BASE_URL)
			.map_err(|source| ProviderDescriptorError::InvalidUrl { source })?;

		Self::builder("amadeus-test").base_url(&base)?.build()
	}
}
