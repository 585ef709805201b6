//! Travel-desk playbook: one search per travel request, static follow-up steps, and a
//! simulated notification.
//!
//! [`generate_playbook`] and [`Notifier::notify`] are independent; the only thing they share
//! is the [`Playbook`] value passed from one to the other.

// self
use crate::{
	_prelude::*,
	flows::FlightSearchClient,
	obs::{self, Operation, Outcome},
	search::{LocationCode, LocationCodeError, SearchOutcome, SearchRequest},
};

/// Manual follow-up steps printed under every result table.
pub const INSTRUCTIONS: &[&str] = &[
	"Copy the company name.",
	"Open Google Flights (https://www.google.com/travel/flights).",
	"Apply the filters (1 stop max).",
	"Book directly.",
];

/// Errors raised while accepting a travel request.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum PlaybookError {
	/// The requester name was empty.
	#[error("Requester name cannot be empty.")]
	MissingRequester,
	/// The origin code failed the presence check.
	#[error("Origin is invalid: {0}")]
	Origin(#[source] LocationCodeError),
	/// The destination code failed the presence check.
	#[error("Destination is invalid: {0}")]
	Destination(#[source] LocationCodeError),
}

/// What the travel desk was asked for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRequest {
	/// Person the offer is prepared for.
	pub requester: String,
	/// Departure location.
	pub origin: LocationCode,
	/// Arrival location.
	pub destination: LocationCode,
	/// Calendar date of departure.
	pub departure_date: Date,
	/// Budget in euros; informational only.
	pub budget_eur: u32,
}
impl TravelRequest {
	/// Budget pre-filled by the console.
	pub const DEFAULT_BUDGET_EUR: u32 = 1_000;

	/// Accepts a request after presence checks.
	pub fn new(
		requester: impl Into<String>,
		origin: &str,
		destination: &str,
		departure_date: Date,
		budget_eur: u32,
	) -> Result<Self, PlaybookError> {
		let requester = requester.into().trim().to_owned();

		if requester.is_empty() {
			return Err(PlaybookError::MissingRequester);
		}

		Ok(Self {
			requester,
			origin: LocationCode::new(origin).map_err(PlaybookError::Origin)?,
			destination: LocationCode::new(destination).map_err(PlaybookError::Destination)?,
			departure_date,
			budget_eur,
		})
	}

	/// Search request derived from this travel request.
	pub fn search_request(&self) -> SearchRequest {
		SearchRequest::new(self.origin.clone(), self.destination.clone(), self.departure_date)
	}
}

/// Search result bundled with the follow-up steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playbook {
	/// Request the playbook answers.
	pub request: TravelRequest,
	/// Offers or the fallback.
	pub outcome: SearchOutcome,
	/// Manual follow-up steps.
	pub instructions: &'static [&'static str],
	/// Instant the playbook was produced.
	pub generated_at: OffsetDateTime,
}

/// Runs one search for `request` and bundles it with [`INSTRUCTIONS`].
pub async fn generate_playbook(client: &FlightSearchClient, request: TravelRequest) -> Playbook {
	let outcome = client.search(&request.search_request()).await;

	Playbook { request, outcome, instructions: INSTRUCTIONS, generated_at: OffsetDateTime::now_utc() }
}

/// Acknowledgement of a simulated notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ack {
	/// Sender address.
	pub sender: String,
	/// Recipient address.
	pub recipient: String,
	/// Subject line.
	pub subject: String,
	/// Plain-text body.
	pub body: String,
	/// Instant the notification was rendered.
	pub sent_at: OffsetDateTime,
}

/// Renders playbook notifications; nothing leaves the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notifier {
	/// Sender address printed on the notification.
	pub sender: String,
	/// Recipient address printed on the notification.
	pub recipient: String,
}
impl Notifier {
	/// Creates a notifier for the given addresses.
	pub fn new(sender: impl Into<String>, recipient: impl Into<String>) -> Self {
		Self { sender: sender.into(), recipient: recipient.into() }
	}

	/// Renders the notification for `playbook`.
	pub fn notify(&self, playbook: &Playbook) -> Ack {
		self.notify_at(playbook, OffsetDateTime::now_utc())
	}

	/// Same as [`Notifier::notify`] with an explicit timestamp.
	pub fn notify_at(&self, playbook: &Playbook, sent_at: OffsetDateTime) -> Ack {
		obs::record_outcome(Operation::Notify, Outcome::Attempt);

		let request = &playbook.request;
		let subject = format!("Playbook - {} for {}", request.destination, request.requester);
		let body = render_body(playbook);

		obs::log_notification(&self.recipient, &subject);
		obs::record_outcome(Operation::Notify, Outcome::Success);

		Ack {
			sender: self.sender.clone(),
			recipient: self.recipient.clone(),
			subject,
			body,
			sent_at,
		}
	}
}

fn render_body(playbook: &Playbook) -> String {
	let request = &playbook.request;
	let rows = playbook.outcome.rows().iter().map(|row| format!("{row}\n")).collect::<String>();
	let steps = playbook
		.instructions
		.iter()
		.enumerate()
		.map(|(idx, step)| format!("{}. {step}\n", idx + 1))
		.collect::<String>();

	format!(
		"Offer for {requester} sent!\n\
		 Route: {origin} → {destination} on {date}, budget €{budget}.\n\
		 \n\
		 {columns}\n\
		 {rows}\n\
		 {steps}\n\
		 [Generated automatically by the Global Playbook Console]",
		requester = request.requester,
		origin = request.origin,
		destination = request.destination,
		date = request.search_request().departure_date_param(),
		budget = request.budget_eur,
		columns = playbook.outcome.columns().join(" | "),
	)
}
