//! Mortgage Business Configuration
//!
//! Contains configurable business parameters for mortgage calculations.

use serde::{Deserialize, Serialize};

use crate::constants::{add_ons, loan_defaults, pmi};
use crate::ConfigError;

/// Mortgage business configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageConfig {
    /// Starting annual interest rate (%)
    #[serde(default = "default_interest_rate")]
    pub default_interest_rate_percent: f64,

    /// Starting loan term in years
    #[serde(default = "default_term_years")]
    pub default_term_years: u32,

    /// Starting down payment (% of price)
    #[serde(default = "default_down_payment_percent")]
    pub default_down_payment_percent: f64,

    /// Property tax heuristic (% of price per year)
    #[serde(default = "default_property_tax_percent")]
    pub property_tax_annual_percent: f64,

    /// Homeowner's insurance heuristic (% of price per year)
    #[serde(default = "default_insurance_percent")]
    pub insurance_annual_percent: f64,

    /// Starting monthly HOA fee
    #[serde(default = "default_hoa")]
    pub default_monthly_hoa: f64,

    /// PMI is charged while the down payment is below this share of price (%)
    #[serde(default = "default_pmi_threshold")]
    pub pmi_threshold_percent: f64,

    /// Annual PMI rate (% of loan amount)
    #[serde(default = "default_pmi_rate")]
    pub pmi_rate_percent: f64,

    /// Down payment shortcuts offered to users (% of price)
    #[serde(default = "default_down_payment_presets")]
    pub down_payment_presets: Vec<f64>,

    /// Loan terms offered to users (years)
    #[serde(default = "default_term_presets")]
    pub term_presets: Vec<u32>,
}

fn default_interest_rate() -> f64 {
    loan_defaults::INTEREST_RATE_PERCENT
}

fn default_term_years() -> u32 {
    loan_defaults::TERM_YEARS
}

fn default_down_payment_percent() -> f64 {
    loan_defaults::DOWN_PAYMENT_PERCENT
}

fn default_property_tax_percent() -> f64 {
    add_ons::PROPERTY_TAX_ANNUAL_PERCENT
}

fn default_insurance_percent() -> f64 {
    add_ons::INSURANCE_ANNUAL_PERCENT
}

fn default_hoa() -> f64 {
    add_ons::HOA_MONTHLY
}

fn default_pmi_threshold() -> f64 {
    pmi::THRESHOLD_PERCENT
}

fn default_pmi_rate() -> f64 {
    pmi::ANNUAL_RATE_PERCENT
}

fn default_down_payment_presets() -> Vec<f64> {
    loan_defaults::DOWN_PAYMENT_PRESETS.to_vec()
}

fn default_term_presets() -> Vec<u32> {
    loan_defaults::TERM_PRESETS.to_vec()
}

impl Default for MortgageConfig {
    fn default() -> Self {
        Self {
            default_interest_rate_percent: default_interest_rate(),
            default_term_years: default_term_years(),
            default_down_payment_percent: default_down_payment_percent(),
            property_tax_annual_percent: default_property_tax_percent(),
            insurance_annual_percent: default_insurance_percent(),
            default_monthly_hoa: default_hoa(),
            pmi_threshold_percent: default_pmi_threshold(),
            pmi_rate_percent: default_pmi_rate(),
            down_payment_presets: default_down_payment_presets(),
            term_presets: default_term_presets(),
        }
    }
}

impl MortgageConfig {
    /// Monthly property tax estimate for a price
    pub fn monthly_property_tax(&self, property_price: f64) -> f64 {
        property_price * (self.property_tax_annual_percent / 100.0) / 12.0
    }

    /// Monthly insurance estimate for a price
    pub fn monthly_insurance(&self, property_price: f64) -> f64 {
        property_price * (self.insurance_annual_percent / 100.0) / 12.0
    }

    /// Starting down payment for a price
    pub fn default_down_payment(&self, property_price: f64) -> f64 {
        property_price * (self.default_down_payment_percent / 100.0)
    }

    /// Whether a down payment ratio falls under the PMI threshold
    ///
    /// A zero price yields a NaN ratio, which never triggers PMI.
    pub fn requires_pmi(&self, property_price: f64, down_payment: f64) -> bool {
        let ratio = down_payment / property_price;
        ratio < self.pmi_threshold_percent / 100.0
    }

    /// Monthly PMI charge for a loan amount
    pub fn monthly_pmi(&self, loan_amount: f64) -> f64 {
        (loan_amount * (self.pmi_rate_percent / 100.0)) / 12.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("mortgage.default_interest_rate_percent", self.default_interest_rate_percent),
            ("mortgage.property_tax_annual_percent", self.property_tax_annual_percent),
            ("mortgage.insurance_annual_percent", self.insurance_annual_percent),
            ("mortgage.default_monthly_hoa", self.default_monthly_hoa),
            ("mortgage.pmi_rate_percent", self.pmi_rate_percent),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("Must be a non-negative number, got {}", value),
                });
            }
        }

        let percents = [
            ("mortgage.default_down_payment_percent", self.default_down_payment_percent),
            ("mortgage.pmi_threshold_percent", self.pmi_threshold_percent),
        ];
        for (field, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("Must be between 0 and 100, got {}", value),
                });
            }
        }

        if self.default_term_years == 0 {
            return Err(ConfigError::InvalidValue {
                field: "mortgage.default_term_years".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if self.down_payment_presets.is_empty() {
            return Err(ConfigError::MissingField(
                "mortgage.down_payment_presets".to_string(),
            ));
        }

        if let Some(bad) = self
            .down_payment_presets
            .iter()
            .find(|p| !(0.0..=100.0).contains(*p))
        {
            return Err(ConfigError::InvalidValue {
                field: "mortgage.down_payment_presets".to_string(),
                message: format!("Preset {} is outside 0-100", bad),
            });
        }

        if self.term_presets.is_empty() || self.term_presets.contains(&0) {
            return Err(ConfigError::InvalidValue {
                field: "mortgage.term_presets".to_string(),
                message: "Must list at least one term, each at least 1 year".to_string(),
            });
        }

        Ok(())
    }
}
