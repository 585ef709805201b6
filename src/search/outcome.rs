//! Search outcome and the rows handed to the display layer.

// crates.io
use serde::ser::{SerializeMap, Serializer};
// self
use crate::{_prelude::*, search::OfferRow};

/// Guidance shown when the provider could not be used.
pub const MANUAL_PLAYBOOK_GUIDANCE: &str = "Google Flights → Skyscanner → Kayak";
/// Message shown when no credential could be obtained.
pub const NO_API_ACCESS: &str = "No API access";

/// Why a search fell back to static guidance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFailure {
	/// The identity endpoint was unreachable, rejected the client, or secrets are missing.
	MissingCredential,
	/// The search call failed in transport, timed out, or answered with a non-2xx status.
	RequestFailure,
	/// The search body was not JSON or lacked expected fields.
	MalformedResponse,
}
impl SearchFailure {
	/// Returns a stable label suitable for logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			SearchFailure::MissingCredential => "missing_credential",
			SearchFailure::RequestFailure => "request_failure",
			SearchFailure::MalformedResponse => "malformed_response",
		}
	}

	/// Fallback row presented for this failure.
	///
	/// Request and parse failures share the manual-playbook row.
	pub const fn fallback_row(self) -> FallbackRow {
		match self {
			SearchFailure::MissingCredential => FallbackRow::NoApiAccess,
			SearchFailure::RequestFailure | SearchFailure::MalformedResponse =>
				FallbackRow::ManualPlaybook,
		}
	}
}
impl Display for SearchFailure {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Single-column sentinel row shown instead of offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FallbackRow {
	/// Serialized as `{"Error": "No API access"}`.
	NoApiAccess,
	/// Serialized as `{"Playbook": "<guidance>"}`.
	ManualPlaybook,
}
impl FallbackRow {
	/// Column header of the row.
	pub const fn column(self) -> &'static str {
		match self {
			FallbackRow::NoApiAccess => "Error",
			FallbackRow::ManualPlaybook => "Playbook",
		}
	}

	/// Cell text of the row.
	pub const fn message(self) -> &'static str {
		match self {
			FallbackRow::NoApiAccess => NO_API_ACCESS,
			FallbackRow::ManualPlaybook => MANUAL_PLAYBOOK_GUIDANCE,
		}
	}
}
impl Display for FallbackRow {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.message())
	}
}
impl Serialize for FallbackRow {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(Some(1))?;

		map.serialize_entry(self.column(), self.message())?;
		map.end()
	}
}

/// A displayed row: either an offer or a fallback, never both in one result set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResultRow {
	/// Offer mapped from the provider response.
	Offer(OfferRow),
	/// Sentinel row replacing all offers.
	Fallback(FallbackRow),
}
impl Display for ResultRow {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Offer(row) => Display::fmt(row, f),
			Self::Fallback(row) => Display::fmt(row, f),
		}
	}
}

/// Result of one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
	/// Zero to three offers in provider order.
	Offers(Vec<OfferRow>),
	/// The search fell back; the kind decides which fallback row is shown.
	Failed(SearchFailure),
}
impl SearchOutcome {
	/// Column headers for [`SearchOutcome::rows`].
	pub fn columns(&self) -> &'static [&'static str] {
		match self {
			Self::Offers(_) => &["Airline", "Price", "Duration"],
			Self::Failed(failure) => match failure.fallback_row() {
				FallbackRow::NoApiAccess => &["Error"],
				FallbackRow::ManualPlaybook => &["Playbook"],
			},
		}
	}

	/// Rows to display: every offer, or exactly one fallback row.
	pub fn rows(&self) -> Vec<ResultRow> {
		match self {
			Self::Offers(offers) => offers.iter().cloned().map(ResultRow::Offer).collect(),
			Self::Failed(failure) => vec![ResultRow::Fallback(failure.fallback_row())],
		}
	}

	/// Returns the failure kind when the search fell back.
	pub fn failure(&self) -> Option<SearchFailure> {
		match self {
			Self::Offers(_) => None,
			Self::Failed(failure) => Some(*failure),
		}
	}
}
impl From<Result<Vec<OfferRow>>> for SearchOutcome {
	fn from(result: Result<Vec<OfferRow>>) -> Self {
		match result {
			Ok(offers) => Self::Offers(offers),
			Err(e) => Self::Failed(e.failure()),
		}
	}
}
impl Serialize for SearchOutcome {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_seq(self.rows())
	}
}
