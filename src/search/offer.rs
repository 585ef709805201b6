//! Offer rows and the all-or-nothing mapping from the provider's flight-offers payload.

// self
use crate::{_prelude::*, error::ParseError, http, provider::EndpointKind};

/// Maximum number of offers kept from a response, in provider order.
pub const MAX_OFFER_ROWS: usize = 3;

/// One displayed itinerary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRow {
	/// Carrier code of the first segment of the first itinerary.
	#[serde(rename = "Airline")]
	pub airline: String,
	/// Offer total price as a decimal string, in the currency the provider quoted.
	#[serde(rename = "Price")]
	pub price: String,
	/// ISO-8601 duration of the first itinerary (e.g. `PT2H35M`).
	#[serde(rename = "Duration")]
	pub duration: String,
}
impl Display for OfferRow {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} | {} | {}", self.airline, self.price, self.duration)
	}
}

#[derive(Debug, Deserialize)]
struct OffersPage {
	#[serde(default)]
	data: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawOffer {
	itineraries: Vec<RawItinerary>,
	price: RawPrice,
}

#[derive(Debug, Deserialize)]
struct RawItinerary {
	duration: String,
	segments: Vec<RawSegment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSegment {
	carrier_code: String,
}

#[derive(Debug, Deserialize)]
struct RawPrice {
	total: RawAmount,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
	Text(String),
	Number(serde_json::Number),
}
impl From<RawAmount> for String {
	fn from(value: RawAmount) -> Self {
		match value {
			RawAmount::Text(text) => text,
			RawAmount::Number(number) => number.to_string(),
		}
	}
}

/// Maps a flight-offers response body into at most [`MAX_OFFER_ROWS`] rows.
///
/// Only the first [`MAX_OFFER_ROWS`] entries of `data` are inspected; if any of them lacks a
/// required field the whole body is rejected. A body without `data` yields no rows; a body
/// that is not a JSON object is malformed.
pub fn parse_offer_rows(body: &[u8]) -> Result<Vec<OfferRow>> {
	const ENDPOINT: EndpointKind = EndpointKind::FlightOffers;

	// Only a JSON object is a valid envelope.
	let envelope: serde_json::Map<String, serde_json::Value> = http::decode_json(ENDPOINT, body)?;
	let page: OffersPage = serde_path_to_error::deserialize(serde_json::Value::Object(envelope))
		.map_err(|source| ParseError::Json { endpoint: ENDPOINT, source })?;

	page.data
		.into_iter()
		.take(MAX_OFFER_ROWS)
		.enumerate()
		.map(|(index, value)| {
			let offer: RawOffer = serde_path_to_error::deserialize(value)
				.map_err(|source| ParseError::Offer { index, source })?;

			offer.into_row(index).map_err(Error::from)
		})
		.collect()
}

impl RawOffer {
	fn into_row(self, index: usize) -> Result<OfferRow, ParseError> {
		let itinerary = self
			.itineraries
			.into_iter()
			.next()
			.ok_or(ParseError::OfferMissing { index, field: "itineraries[0]" })?;
		let segment = itinerary
			.segments
			.into_iter()
			.next()
			.ok_or(ParseError::OfferMissing { index, field: "itineraries[0].segments[0]" })?;

		Ok(OfferRow {
			airline: segment.carrier_code,
			price: self.price.total.into(),
			duration: itinerary.duration,
		})
	}
}
