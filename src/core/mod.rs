//! Sale facts and caller-side plumbing.
//!
//! The types here are read-only views of what the surrounding system
//! knows about a completed sale: the buyer, the lot, the auction, and the
//! winning bid. The VAT engine in [`crate::vat`] consumes them as-is and
//! owns none of their lifecycle.

mod builder;
mod countries;
mod error;
mod types;
mod validation;

pub use builder::*;
pub use countries::is_known_country_code;
pub use error::*;
pub use types::*;
pub use validation::*;
