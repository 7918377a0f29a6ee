//! Mortgage payment engine
//!
//! Derives the loan fields that depend on each other (down payment, loan
//! amount, PMI) and computes the monthly cost breakdown:
//!
//! - Principal and interest via the fixed-rate amortization formula
//! - PMI while the down payment is under the configured threshold
//! - Property tax, insurance and HOA add-ons
//!
//! Rates and heuristics come from [`realty_config::MortgageConfig`].

pub mod amortization;
pub mod engine;

pub use amortization::{amortized_payment, total_interest};
pub use engine::{compute_mortgage, derive_loan_fields, MortgagePaymentEngine};

pub use realty_core::{LoanField, LoanParameters, MortgageCalculator, PaymentBreakdown};
