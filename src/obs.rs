//! Optional observability helpers for token fetches, searches, and notifications.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (on by default) to emit spans named `flight_playbook.operation` with the
//!   `operation` and `stage` fields, and `warn` events for every failure the public API
//!   suppresses into a fallback.
//! - Enable `metrics` to increment the `flight_playbook_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`, and the
//!   `flight_playbook_fallback_total` counter for every fallback, labeled by `operation`,
//!   `failure` and `row`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Client-credentials token acquisition.
	TokenFetch,
	/// Flight-offers search.
	FlightSearch,
	/// Simulated playbook notification.
	Notify,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::TokenFetch => "token_fetch",
			Operation::FlightSearch => "flight_search",
			Operation::Notify => "notify",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure, whether propagated or suppressed.
	Failure,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Attempt => "attempt",
			Outcome::Success => "success",
			Outcome::Failure => "failure",
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
