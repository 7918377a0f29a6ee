//! Mortgage calculator trait
//!
//! Provides the interface for home loan payment calculations. Rates,
//! thresholds and default heuristics come from configuration, so the same
//! interface serves different markets.
//!
//! # Example
//!
//! ```ignore
//! use realty_core::{LoanField, MortgageCalculator};
//!
//! let calc = MortgagePaymentEngine::default();
//! let params = calc.initial_parameters(450_000.0);
//! let params = calc.derive(&params, LoanField::DownPayment, 45_000.0);
//! let breakdown = calc.compute(&params);
//! ```

use crate::loan::{LoanField, LoanParameters, PaymentBreakdown};

/// Home loan calculator
pub trait MortgageCalculator: Send + Sync {
    /// Level monthly principal and interest payment
    ///
    /// Uses the standard amortization formula:
    /// P = L × r × (1 + r)^n / [(1 + r)^n - 1]
    ///
    /// Where:
    /// - L = loan amount
    /// - r = monthly interest rate (annual_rate / 100 / 12)
    /// - n = term in months
    ///
    /// Returns `0.0` when the loan amount, rate or term is not positive.
    fn monthly_principal_and_interest(
        &self,
        loan_amount: f64,
        annual_rate_percent: f64,
        term_years: u32,
    ) -> f64;

    /// Total interest paid over the term
    ///
    /// Total Interest = (P × n) - loan amount
    fn total_interest(&self, loan_amount: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
        let payment = self.monthly_principal_and_interest(loan_amount, annual_rate_percent, term_years);
        if payment <= 0.0 {
            return 0.0;
        }
        payment * f64::from(term_years) * 12.0 - loan_amount
    }

    /// Monthly PMI charge implied by the down payment ratio
    fn monthly_pmi(&self, property_price: f64, down_payment: f64, loan_amount: f64) -> f64;

    /// Starting parameters for a listing price
    fn initial_parameters(&self, property_price: f64) -> LoanParameters;

    /// Apply one edit and recompute every dependent field
    fn derive(&self, params: &LoanParameters, edited: LoanField, value: f64) -> LoanParameters;

    /// Full monthly cost breakdown
    fn compute(&self, params: &LoanParameters) -> PaymentBreakdown;
}
