//! Core traits for the realty engines
//!
//! Implementations are swapped without touching callers:
//!
//! ```text
//! Calculation:
//!   - MortgageCalculator: amortized payment, PMI and field derivation
//!
//! Listings:
//!   - PropertySource: supplies immutable listing snapshots
//! ```

mod calculator;
mod source;

pub use calculator::MortgageCalculator;
pub use source::PropertySource;
