//! Core traits and types for the realty engines
//!
//! This crate provides foundational types used across all other crates:
//! - Property listings and agent contacts
//! - Query criteria, price range presets and sort keys
//! - Loan parameters and payment breakdowns
//! - Traits for pluggable calculators and listing sources
//! - Error types
//! - Currency formatting helpers

pub mod criteria;
pub mod error;
pub mod format;
pub mod loan;
pub mod property;
pub mod traits;

pub use criteria::{PriceRange, QueryCriteria, SortKey};
pub use error::{Error, Result};
pub use format::format_currency;
pub use loan::{LoanField, LoanParameters, PaymentBreakdown};
pub use property::{AgentContact, Coordinates, PropertyId, PropertyRecord, PropertyType};

pub use traits::{MortgageCalculator, PropertySource};
