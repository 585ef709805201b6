// crates.io
use url::Host;
// self
use crate::{
	_prelude::*,
	provider::{FLIGHT_OFFERS_PATH, ProviderDescriptor, ProviderEndpoints, TOKEN_PATH},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ProviderDescriptorError {
	/// Token endpoint is mandatory.
	#[error("Missing token endpoint.")]
	MissingTokenEndpoint,
	/// Flight-offers endpoint is mandatory.
	#[error("Missing flight-offers endpoint.")]
	MissingFlightOffersEndpoint,
	/// Endpoints must use HTTPS unless they target a loopback host.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// A URL could not be parsed or joined.
	#[error("Descriptor contains an invalid URL.")]
	InvalidUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Builder for [`ProviderDescriptor`] values.
#[derive(Debug)]
pub struct ProviderDescriptorBuilder {
	/// Name for the descriptor being constructed.
	pub name: String,
	/// Token endpoint used for the client-credentials grant.
	pub token_endpoint: Option<Url>,
	/// Flight-offers search endpoint.
	pub flight_offers_endpoint: Option<Url>,
}
impl ProviderDescriptorBuilder {
	/// Creates a new builder seeded with the provided name.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into(), token_endpoint: None, flight_offers_endpoint: None }
	}

	/// Derives both endpoints from a provider base URL using the standard paths.
	pub fn base_url(self, base: &Url) -> Result<Self, ProviderDescriptorError> {
		let join =
			|path| base.join(path).map_err(|source| ProviderDescriptorError::InvalidUrl { source });
		let token = join(TOKEN_PATH)?;
		let flight_offers = join(FLIGHT_OFFERS_PATH)?;

		Ok(self.token_endpoint(token).flight_offers_endpoint(flight_offers))
	}

	/// Sets the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Sets the flight-offers endpoint.
	pub fn flight_offers_endpoint(mut self, url: Url) -> Self {
		self.flight_offers_endpoint = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ProviderDescriptor, ProviderDescriptorError> {
		let token = self.token_endpoint.ok_or(ProviderDescriptorError::MissingTokenEndpoint)?;
		let flight_offers = self
			.flight_offers_endpoint
			.ok_or(ProviderDescriptorError::MissingFlightOffersEndpoint)?;
		let descriptor = ProviderDescriptor {
			name: self.name,
			endpoints: ProviderEndpoints { token, flight_offers },
		};

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl ProviderDescriptor {
	fn validate(&self) -> Result<(), ProviderDescriptorError> {
		validate_endpoint("token", &self.endpoints.token)?;
		validate_endpoint("flight_offers", &self.endpoints.flight_offers)?;

		Ok(())
	}
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ProviderDescriptorError> {
	if url.scheme() == "https" || (url.scheme() == "http" && is_loopback(url)) {
		Ok(())
	} else {
		Err(ProviderDescriptorError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(Host::Ipv4(ip)) => ip.is_loopback(),
		Some(Host::Ipv6(ip)) => ip.is_loopback(),
		None => false,
	}
}
