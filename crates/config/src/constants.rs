//! Centralized constants for the realty engines
//!
//! Single source of truth for business defaults. Configuration files may
//! override any of these through [`crate::MortgageConfig`].

/// Loan defaults applied when a calculator is opened for a listing
pub mod loan_defaults {
    /// Annual interest rate (percent)
    pub const INTEREST_RATE_PERCENT: f64 = 6.5;

    /// Loan term in years
    pub const TERM_YEARS: u32 = 30;

    /// Down payment as a percentage of price
    pub const DOWN_PAYMENT_PERCENT: f64 = 20.0;

    /// Offered down payment shortcuts (percent of price)
    pub const DOWN_PAYMENT_PRESETS: [f64; 4] = [10.0, 15.0, 20.0, 25.0];

    /// Offered loan terms (years)
    pub const TERM_PRESETS: [u32; 4] = [15, 20, 25, 30];
}

/// Monthly add-on heuristics, as annual percentages of the price
pub mod add_ons {
    pub const PROPERTY_TAX_ANNUAL_PERCENT: f64 = 1.0;

    pub const INSURANCE_ANNUAL_PERCENT: f64 = 0.5;

    /// Monthly HOA fee
    pub const HOA_MONTHLY: f64 = 0.0;
}

/// Private mortgage insurance
pub mod pmi {
    /// PMI applies while the down payment is below this share of the price
    pub const THRESHOLD_PERCENT: f64 = 20.0;

    /// Annual PMI rate as a percentage of the loan amount
    pub const ANNUAL_RATE_PERCENT: f64 = 0.5;
}

/// Configuration loading
pub mod env {
    /// Prefix for environment overrides, e.g. `REALTY__MORTGAGE__PMI_RATE_PERCENT`
    pub const PREFIX: &str = "REALTY";

    /// Separator between nested keys in environment overrides
    pub const SEPARATOR: &str = "__";

    /// Directory searched for `default.*` and `{env}.*` files
    pub const CONFIG_DIR: &str = "config";

    /// Environment variable naming the runtime environment
    pub const ENV_VAR: &str = "REALTY_ENV";
}
