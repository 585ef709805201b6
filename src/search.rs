//! Search inputs, offer rows, and the outcome handed to the display layer.

pub mod offer;
pub mod outcome;
pub mod request;

pub use offer::*;
pub use outcome::*;
pub use request::*;
