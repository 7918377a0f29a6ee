//! Loan parameter and payment types

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::format_currency;

/// Inputs to a mortgage payment calculation
///
/// `down_payment + loan_amount == property_price` holds for values produced
/// by the mortgage engine. `monthly_pmi` is derived, never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanParameters {
    pub property_price: f64,
    pub down_payment: f64,
    pub loan_amount: f64,
    /// Nominal annual rate, 6.5 meaning 6.5%
    pub interest_rate_annual_percent: f64,
    pub loan_term_years: u32,
    #[serde(default)]
    pub monthly_property_tax: f64,
    #[serde(default)]
    pub monthly_insurance: f64,
    #[serde(default, rename = "monthlyHOA")]
    pub monthly_hoa: f64,
    #[serde(default, rename = "monthlyPMI")]
    pub monthly_pmi: f64,
}

impl LoanParameters {
    /// Down payment as a percentage of price, `0.0` when the price is not positive
    pub fn down_payment_percent(&self) -> f64 {
        if self.property_price > 0.0 {
            self.down_payment / self.property_price * 100.0
        } else {
            0.0
        }
    }

    /// Strict validation for callers that reject bad input at entry
    ///
    /// The payment engine itself never fails; it zeroes out degenerate
    /// inputs. This is for the layer that accepts user input.
    pub fn validate(&self) -> Result<()> {
        let money = [
            ("property_price", self.property_price),
            ("down_payment", self.down_payment),
            ("loan_amount", self.loan_amount),
            ("interest_rate_annual_percent", self.interest_rate_annual_percent),
            ("monthly_property_tax", self.monthly_property_tax),
            ("monthly_insurance", self.monthly_insurance),
            ("monthly_hoa", self.monthly_hoa),
        ];
        for (field, value) in money {
            if !value.is_finite() {
                return Err(Error::invalid_input(field, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(Error::invalid_input(
                    field,
                    format!("must not be negative, got {}", value),
                ));
            }
        }

        if self.loan_term_years == 0 {
            return Err(Error::invalid_input("loan_term_years", "must be at least 1"));
        }

        if self.down_payment > self.property_price {
            return Err(Error::invalid_input(
                "down_payment",
                format!(
                    "{} exceeds property price {}",
                    self.down_payment, self.property_price
                ),
            ));
        }

        let drift = (self.down_payment + self.loan_amount - self.property_price).abs();
        if drift > 0.01 {
            return Err(Error::invalid_input(
                "loan_amount",
                "down payment and loan amount must add up to the property price",
            ));
        }

        Ok(())
    }
}

/// The field touched by a single user edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanField {
    PropertyPrice,
    DownPayment,
    /// Down payment given as a percentage of price
    DownPaymentPercent,
    LoanAmount,
    InterestRate,
    LoanTerm,
    PropertyTax,
    Insurance,
    Hoa,
}

/// Monthly cost breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub monthly_principal_and_interest: f64,
    #[serde(rename = "monthlyPMI")]
    pub monthly_pmi: f64,
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    #[serde(rename = "monthlyHOA")]
    pub monthly_hoa: f64,
    pub total_monthly_payment: f64,
    /// Interest paid over the full term
    pub total_interest: f64,
    pub down_payment_percent: f64,
}

impl PaymentBreakdown {
    /// All-zero breakdown returned for degenerate loans
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn is_zeroed(&self) -> bool {
        self.monthly_principal_and_interest == 0.0 && self.total_monthly_payment == 0.0
    }
}

/// One-line summary in whole dollars, PMI and HOA only when charged
impl std::fmt::Display for PaymentBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/mo (P&I {}, tax {}, insurance {}",
            format_currency(self.total_monthly_payment),
            format_currency(self.monthly_principal_and_interest),
            format_currency(self.monthly_property_tax),
            format_currency(self.monthly_insurance),
        )?;
        if self.monthly_pmi > 0.0 {
            write!(f, ", PMI {}", format_currency(self.monthly_pmi))?;
        }
        if self.monthly_hoa > 0.0 {
            write!(f, ", HOA {}", format_currency(self.monthly_hoa))?;
        }
        write!(f, ")")
    }
}
