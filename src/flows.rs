//! Token acquisition and flight-offer search orchestration.
//!
//! [`TokenProvider`] performs the client-credentials grant and memoizes the result in a
//! [`CredentialStore`](crate::store::CredentialStore). [`FlightSearchClient`] asks it for a
//! credential on every search and turns the provider's answer into a
//! [`SearchOutcome`](crate::search::SearchOutcome).

mod search;
mod token;

pub use search::*;
pub use token::*;
