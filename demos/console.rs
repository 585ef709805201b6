//! Runs one travel-desk request against the Amadeus test environment and prints the playbook
//! table, the follow-up steps, and the simulated notification.
//!
//! Usage: `cargo run --example console -- [ORIGIN] [DESTINATION] [YYYY-MM-DD] [REQUESTER] [BUDGET]`.
//! Credentials come from `AMADEUS_API_KEY` and `AMADEUS_API_SECRET`; without them the table
//! shows the "No API access" fallback.

// std
use std::env;
// crates.io
use color_eyre::Result;
use time::{Duration, OffsetDateTime};
// self
use flight_playbook::{
	flows::FlightSearchClient,
	http::HttpSettings,
	playbook::{self, Notifier, TravelRequest},
	provider::ProviderDescriptor,
	search::SearchRequest,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let mut args = env::args().skip(1);
	let origin = args.next().unwrap_or_else(|| "SOF".into());
	let destination = args.next().unwrap_or_else(|| "PAR".into());
	let departure_date = match args.next() {
		Some(date) => SearchRequest::parse_date(&date)?,
		None => OffsetDateTime::now_utc().date() + Duration::days(14),
	};
	let requester = args.next().unwrap_or_else(|| "Travel Desk".into());
	let budget_eur = match args.next() {
		Some(budget) => budget.parse()?,
		None => TravelRequest::DEFAULT_BUDGET_EUR,
	};
	let request = TravelRequest::new(requester, &origin, &destination, departure_date, budget_eur)?;
	let client =
		FlightSearchClient::from_env(&ProviderDescriptor::amadeus_test()?, &HttpSettings::default())?;
	let playbook = playbook::generate_playbook(&client, request).await;

	println!("{}", playbook.outcome.columns().join(" | "));

	for row in playbook.outcome.rows() {
		println!("{row}");
	}

	println!();

	for (idx, step) in playbook.instructions.iter().enumerate() {
		println!("{}. {step}", idx + 1);
	}

	let ack = Notifier::new("desk@example.com", "travel@example.com").notify(&playbook);

	println!("\nTo: {}\nSubject: {}\n\n{}", ack.recipient, ack.subject, ack.body);

	Ok(())
}
