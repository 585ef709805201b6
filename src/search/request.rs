//! Immutable search request and its location codes.

// std
use std::ops::Deref;
// crates.io
use time::{format_description::BorrowedFormatItem, macros::format_description};
// self
use crate::_prelude::*;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Error returned when a location code fails the presence check.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum LocationCodeError {
	/// The code was empty or whitespace.
	#[error("Location code cannot be empty.")]
	Empty,
	/// The code contains inner whitespace.
	#[error("Location code `{0}` contains whitespace.")]
	ContainsWhitespace(String),
}

/// Origin or destination code (typically a three-letter IATA code such as `SOF`).
///
/// Only presence is checked: surrounding whitespace is trimmed and inner whitespace is
/// rejected; case and length are passed to the provider untouched.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationCode(String);
impl LocationCode {
	/// Creates a new code after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, LocationCodeError> {
		let view = value.as_ref().trim();

		if view.is_empty() {
			return Err(LocationCodeError::Empty);
		}
		if view.chars().any(char::is_whitespace) {
			return Err(LocationCodeError::ContainsWhitespace(view.to_owned()));
		}

		Ok(Self(view.to_owned()))
	}
}
impl Deref for LocationCode {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for LocationCode {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<LocationCode> for String {
	fn from(value: LocationCode) -> Self {
		value.0
	}
}
impl TryFrom<String> for LocationCode {
	type Error = LocationCodeError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for LocationCode {
	type Err = LocationCodeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for LocationCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "LocationCode({})", self.0)
	}
}
impl Display for LocationCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// One flight-offers query; passenger count and result cap are fixed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
	/// Departure location.
	pub origin: LocationCode,
	/// Arrival location.
	pub destination: LocationCode,
	/// Calendar date of departure.
	pub departure_date: Date,
}
impl SearchRequest {
	/// Passenger count sent with every query.
	pub const ADULTS: u8 = 1;
	/// Server-side result cap sent with every query.
	pub const MAX_RESULTS: u8 = 5;

	/// Creates a request for a single adult.
	pub fn new(origin: LocationCode, destination: LocationCode, departure_date: Date) -> Self {
		Self { origin, destination, departure_date }
	}

	/// Parses a `YYYY-MM-DD` date as accepted by [`SearchRequest::new`].
	pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
		Date::parse(value.trim(), DATE_FORMAT)
	}

	/// Departure date rendered as `YYYY-MM-DD`.
	pub fn departure_date_param(&self) -> String {
		self.departure_date
			.format(DATE_FORMAT)
			.unwrap_or_else(|_| self.departure_date.to_string())
	}

	/// Query parameters for the flight-offers endpoint, in the provider's naming.
	pub fn query_pairs(&self) -> [(&'static str, String); 5] {
		[
			("originLocationCode", self.origin.to_string()),
			("destinationLocationCode", self.destination.to_string()),
			("departureDate", self.departure_date_param()),
			("adults", Self::ADULTS.to_string()),
			("max", Self::MAX_RESULTS.to_string()),
		]
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn location_codes_are_trimmed_and_presence_checked() {
		assert_eq!(LocationCode::new(" SOF ").expect("Padded code should be accepted.").as_ref(), "SOF");
		assert_eq!(LocationCode::new("   "), Err(LocationCodeError::Empty));
		assert!(matches!(
			LocationCode::new("S OF"),
			Err(LocationCodeError::ContainsWhitespace(_))
		));
	}

	#[test]
	fn query_pairs_use_provider_names_and_fixed_values() {
		let request = SearchRequest::new(
			"SOF".parse().expect("Origin fixture should be valid."),
			"PAR".parse().expect("Destination fixture should be valid."),
			macros::date!(2025-06-01),
		);

		assert_eq!(
			request.query_pairs(),
			[
				("originLocationCode", "SOF".to_owned()),
				("destinationLocationCode", "PAR".to_owned()),
				("departureDate", "2025-06-01".to_owned()),
				("adults", "1".to_owned()),
				("max", "5".to_owned()),
			]
		);
	}

	#[test]
	fn parse_date_accepts_iso_calendar_dates_only() {
		assert_eq!(
			SearchRequest::parse_date("2025-06-01").expect("ISO date should parse."),
			macros::date!(2025-06-01)
		);
		assert!(SearchRequest::parse_date("01.06.2025").is_err());
	}
}
