//! Mortgage payment engine
//!
//! Every edit goes through one pure recomputation ([`MortgagePaymentEngine::derive`]):
//! the edited field is applied, its complement (down payment or loan amount)
//! is recomputed, and PMI is re-derived from the fresh loan amount. Nothing
//! cascades, so there is no stale intermediate state.

use realty_config::MortgageConfig;
use realty_core::{LoanField, LoanParameters, MortgageCalculator, PaymentBreakdown};

use crate::amortization::{amortized_payment, is_positive, total_interest};

/// Config-driven mortgage calculator
#[derive(Debug, Clone, Default)]
pub struct MortgagePaymentEngine {
    config: MortgageConfig,
}

impl MortgagePaymentEngine {
    pub fn new(config: MortgageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MortgageConfig {
        &self.config
    }

    /// Down payment shortcuts (% of price)
    pub fn down_payment_presets(&self) -> &[f64] {
        &self.config.down_payment_presets
    }

    /// Loan terms offered (years)
    pub fn term_presets(&self) -> &[u32] {
        &self.config.term_presets
    }

    /// The preset matching the current down payment, within 0.1 points
    pub fn active_down_payment_preset(&self, params: &LoanParameters) -> Option<f64> {
        let percent = params.down_payment_percent();
        self.config
            .down_payment_presets
            .iter()
            .copied()
            .find(|preset| (percent - preset).abs() < 0.1)
    }

    /// Set the down payment to a percentage of the price
    pub fn apply_down_payment_percent(&self, params: &LoanParameters, percent: f64) -> LoanParameters {
        self.derive_loan_fields(params, LoanField::DownPaymentPercent, percent)
    }

    /// PMI for a price/down payment/loan triple
    ///
    /// Charged while `down_payment / property_price` is under the configured
    /// threshold, otherwise zero. A zero price never triggers PMI.
    pub fn derive_pmi(&self, property_price: f64, down_payment: f64, loan_amount: f64) -> f64 {
        if self.config.requires_pmi(property_price, down_payment) {
            self.config.monthly_pmi(loan_amount).max(0.0)
        } else {
            0.0
        }
    }

    /// Apply one edit and recompute every dependent field
    ///
    /// Money values are clamped into `[0, property_price]`, rates and add-ons
    /// to non-negative values, and non-finite input is read as zero.
    pub fn derive_loan_fields(
        &self,
        params: &LoanParameters,
        edited: LoanField,
        value: f64,
    ) -> LoanParameters {
        let value = finite_or_zero(value);
        let mut next = params.clone();
        let price = non_negative(next.property_price);
        next.property_price = price;

        match edited {
            LoanField::PropertyPrice => {
                let price = non_negative(value);
                next.property_price = price;
                next.down_payment = clamp_money(next.down_payment, price);
                next.loan_amount = price - next.down_payment;
            }
            LoanField::DownPayment => {
                next.down_payment = clamp_money(value, price);
                next.loan_amount = price - next.down_payment;
            }
            LoanField::DownPaymentPercent => {
                let percent = value.clamp(0.0, 100.0);
                next.down_payment = clamp_money(price * percent / 100.0, price);
                next.loan_amount = price - next.down_payment;
            }
            LoanField::LoanAmount => {
                next.loan_amount = clamp_money(value, price);
                next.down_payment = price - next.loan_amount;
            }
            LoanField::InterestRate => next.interest_rate_annual_percent = non_negative(value),
            LoanField::LoanTerm => next.loan_term_years = years(value),
            LoanField::PropertyTax => next.monthly_property_tax = non_negative(value),
            LoanField::Insurance => next.monthly_insurance = non_negative(value),
            LoanField::Hoa => next.monthly_hoa = non_negative(value),
        }

        next.monthly_pmi = self.derive_pmi(next.property_price, next.down_payment, next.loan_amount);

        tracing::trace!(
            field = ?edited,
            down_payment = next.down_payment,
            loan_amount = next.loan_amount,
            monthly_pmi = next.monthly_pmi,
            "Derived loan fields"
        );

        next
    }

    /// Full monthly cost breakdown
    ///
    /// A non-positive loan amount, rate or term yields an all-zero payment.
    /// PMI is re-derived from the parameters; a stale `monthly_pmi` is ignored.
    pub fn compute_mortgage(&self, params: &LoanParameters) -> PaymentBreakdown {
        let loan = params.loan_amount;
        let rate = params.interest_rate_annual_percent;
        let term = params.loan_term_years;

        if !is_positive(loan) || !is_positive(rate) || term == 0 {
            tracing::debug!(
                loan_amount = loan,
                rate,
                term_years = term,
                "Degenerate loan, returning zeroed payment"
            );
            return PaymentBreakdown {
                down_payment_percent: params.down_payment_percent(),
                ..PaymentBreakdown::zeroed()
            };
        }

        let principal_and_interest = amortized_payment(loan, rate, term);
        let pmi = self.derive_pmi(params.property_price, params.down_payment, loan);
        let tax = non_negative(params.monthly_property_tax);
        let insurance = non_negative(params.monthly_insurance);
        let hoa = non_negative(params.monthly_hoa);

        let breakdown = PaymentBreakdown {
            monthly_principal_and_interest: principal_and_interest,
            monthly_pmi: pmi,
            monthly_property_tax: tax,
            monthly_insurance: insurance,
            monthly_hoa: hoa,
            total_monthly_payment: principal_and_interest + tax + insurance + pmi + hoa,
            total_interest: total_interest(loan, rate, term),
            down_payment_percent: params.down_payment_percent(),
        };

        tracing::debug!(loan_amount = loan, payment = %breakdown, "Computed mortgage payment");

        breakdown
    }

    /// Starting parameters for a listing price
    pub fn initial_parameters(&self, property_price: f64) -> LoanParameters {
        let price = non_negative(finite_or_zero(property_price));
        let down_payment = clamp_money(self.config.default_down_payment(price), price);
        let loan_amount = price - down_payment;

        LoanParameters {
            property_price: price,
            down_payment,
            loan_amount,
            interest_rate_annual_percent: self.config.default_interest_rate_percent,
            loan_term_years: self.config.default_term_years,
            monthly_property_tax: self.config.monthly_property_tax(price),
            monthly_insurance: self.config.monthly_insurance(price),
            monthly_hoa: self.config.default_monthly_hoa,
            monthly_pmi: self.derive_pmi(price, down_payment, loan_amount),
        }
    }
}

impl MortgageCalculator for MortgagePaymentEngine {
    fn monthly_principal_and_interest(
        &self,
        loan_amount: f64,
        annual_rate_percent: f64,
        term_years: u32,
    ) -> f64 {
        amortized_payment(loan_amount, annual_rate_percent, term_years)
    }

    fn monthly_pmi(&self, property_price: f64, down_payment: f64, loan_amount: f64) -> f64 {
        self.derive_pmi(property_price, down_payment, loan_amount)
    }

    fn initial_parameters(&self, property_price: f64) -> LoanParameters {
        MortgagePaymentEngine::initial_parameters(self, property_price)
    }

    fn derive(&self, params: &LoanParameters, edited: LoanField, value: f64) -> LoanParameters {
        self.derive_loan_fields(params, edited, value)
    }

    fn compute(&self, params: &LoanParameters) -> PaymentBreakdown {
        self.compute_mortgage(params)
    }
}

/// Breakdown using the default configuration
pub fn compute_mortgage(params: &LoanParameters) -> PaymentBreakdown {
    MortgagePaymentEngine::default().compute_mortgage(params)
}

/// Field derivation using the default configuration
pub fn derive_loan_fields(params: &LoanParameters, edited: LoanField, value: f64) -> LoanParameters {
    MortgagePaymentEngine::default().derive_loan_fields(params, edited, value)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

fn clamp_money(value: f64, upper: f64) -> f64 {
    non_negative(value).min(non_negative(upper))
}

fn years(value: f64) -> u32 {
    // saturating float-to-int cast
    non_negative(value).round() as u32
}
