//! Bearer credentials issued by the identity endpoint and the secret wrapper guarding them.

pub mod credential;
pub mod secret;

pub use credential::*;
pub use secret::*;
