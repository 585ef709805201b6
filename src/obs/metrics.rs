// self
use crate::{
	obs::{Operation, Outcome},
	search::SearchFailure,
};

/// Counter incremented for every attempt, success, and failure.
pub const OPERATION_COUNTER: &str = "flight_playbook_operation_total";
/// Counter incremented whenever a failure is replaced by a fallback row.
pub const FALLBACK_COUNTER: &str = "flight_playbook_fallback_total";

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_outcome(operation: Operation, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			OPERATION_COUNTER,
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

/// Records which fallback the caller saw instead of a result.
///
/// The `failure` label keeps the three causes apart even though the display layer only shows
/// two fallback rows.
pub fn record_fallback(operation: Operation, failure: SearchFailure) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			FALLBACK_COUNTER,
			"operation" => operation.as_str(),
			"failure" => failure.as_str(),
			"row" => failure.fallback_row().column()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, failure);
	}
}
