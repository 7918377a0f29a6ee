//! Fixed-rate amortization math

/// Level monthly payment for a fixed-rate loan
///
/// P = L × r × (1 + r)^n / [(1 + r)^n - 1]
///
/// Where:
/// - L = loan amount
/// - r = monthly rate (annual_rate_percent / 100 / 12)
/// - n = term_years × 12
///
/// Returns `0.0` when the loan amount, rate or term is not positive, or when
/// the amount or rate is not finite.
///
/// When `(1 + r)^n` overflows (very long terms or huge rates) the payment is
/// its limit `L × r`, interest only. A rate too small to move `1 + r` gives
/// straight-line repayment `L / n`. A payment that still is not finite is
/// reported as `0.0`.
pub fn amortized_payment(loan_amount: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    if !is_positive(loan_amount) || !is_positive(annual_rate_percent) || term_years == 0 {
        return 0.0;
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let n = f64::from(term_years) * 12.0;
    let one_plus_r_n = (1.0 + monthly_rate).powf(n);
    let growth = one_plus_r_n - 1.0;

    let payment = if !one_plus_r_n.is_finite() {
        loan_amount * monthly_rate
    } else if growth <= 0.0 {
        // rate too small to register, straight-line repayment
        loan_amount / n
    } else {
        loan_amount * (monthly_rate * one_plus_r_n) / growth
    };

    if payment.is_finite() {
        payment
    } else {
        0.0
    }
}

/// Interest paid over the full term
///
/// Total Interest = (P × n) - L
pub fn total_interest(loan_amount: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    let payment = amortized_payment(loan_amount, annual_rate_percent, term_years);
    if payment == 0.0 {
        return 0.0;
    }
    payment * f64::from(term_years) * 12.0 - loan_amount
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
