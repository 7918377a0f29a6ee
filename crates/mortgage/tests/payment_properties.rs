//! Payment engine behavior across edit sequences

use realty_config::MortgageConfig;
use realty_mortgage::{
    compute_mortgage, derive_loan_fields, LoanField, LoanParameters, MortgageCalculator,
    MortgagePaymentEngine,
};

fn listing_params(price: f64) -> LoanParameters {
    MortgagePaymentEngine::default().initial_parameters(price)
}

fn assert_complement(p: &LoanParameters) {
    let drift = (p.down_payment + p.loan_amount - p.property_price).abs();
    assert!(
        drift < 1e-6,
        "down {} + loan {} != price {}",
        p.down_payment,
        p.loan_amount,
        p.property_price
    );
}

#[test]
fn test_thirty_year_amortization() {
    let params = listing_params(450_000.0);
    assert_eq!(params.loan_amount, 360_000.0);

    let breakdown = compute_mortgage(&params);
    assert!(
        (breakdown.monthly_principal_and_interest - 2275.44).abs() < 0.01,
        "got {}",
        breakdown.monthly_principal_and_interest
    );
    // 2275.44 + 375 tax + 187.50 insurance
    assert!((breakdown.total_monthly_payment - 2837.94).abs() < 0.01);
    assert_eq!(breakdown.monthly_pmi, 0.0);
}

#[test]
fn test_complement_holds_across_edit_sequence() {
    let edits = [
        (LoanField::DownPayment, 45_000.0),
        (LoanField::PropertyPrice, 520_000.0),
        (LoanField::LoanAmount, 400_000.0),
        (LoanField::DownPaymentPercent, 12.5),
        (LoanField::InterestRate, 7.1),
        (LoanField::LoanAmount, 900_000.0),
        (LoanField::PropertyPrice, 250_000.0),
        (LoanField::DownPayment, -5.0),
        (LoanField::LoanTerm, 15.0),
        (LoanField::DownPayment, f64::INFINITY),
        (LoanField::PropertyPrice, 333_333.33),
        (LoanField::DownPaymentPercent, 3.5),
    ];

    let mut params = listing_params(300_000.0);
    for (field, value) in edits {
        params = derive_loan_fields(&params, field, value);
        assert_complement(&params);
        assert!(params.down_payment >= 0.0 && params.loan_amount >= 0.0);
        assert!(params.validate().is_ok(), "{:?} after {:?}", params, field);
    }
}

#[test]
fn test_pmi_threshold() {
    let base = listing_params(300_000.0);

    let fifteen = derive_loan_fields(&base, LoanField::DownPayment, 45_000.0);
    assert_eq!(fifteen.loan_amount, 255_000.0);
    assert!((fifteen.monthly_pmi - 106.25).abs() < 1e-9);
    assert!((compute_mortgage(&fifteen).monthly_pmi - 106.25).abs() < 1e-9);

    let twenty = derive_loan_fields(&fifteen, LoanField::DownPayment, 60_000.0);
    assert_eq!(twenty.monthly_pmi, 0.0);
    assert_eq!(compute_mortgage(&twenty).monthly_pmi, 0.0);
}

#[test]
fn test_zero_guard() {
    let base = listing_params(300_000.0);

    let no_loan = derive_loan_fields(&base, LoanField::LoanAmount, 0.0);
    assert_eq!(compute_mortgage(&no_loan).monthly_principal_and_interest, 0.0);

    let no_rate = derive_loan_fields(&base, LoanField::InterestRate, 0.0);
    let breakdown = compute_mortgage(&no_rate);
    assert_eq!(breakdown.monthly_principal_and_interest, 0.0);
    assert!(breakdown.is_zeroed());
    assert!((breakdown.down_payment_percent - 20.0).abs() < 1e-9);
}

#[test]
fn test_engine_follows_config() {
    let config = MortgageConfig {
        default_interest_rate_percent: 5.0,
        default_term_years: 15,
        default_down_payment_percent: 20.0,
        ..MortgageConfig::default()
    };
    let engine = MortgagePaymentEngine::new(config);

    let params = engine.initial_parameters(250_000.0);
    assert_eq!(params.loan_amount, 200_000.0);
    let breakdown = engine.compute(&params);
    assert!((breakdown.monthly_principal_and_interest - 1581.59).abs() < 0.01);
    assert_eq!(engine.term_presets(), &[15, 20, 25, 30]);
}

#[test]
fn test_breakdown_serializes_camel_case() {
    let breakdown = compute_mortgage(&listing_params(450_000.0));
    let json = serde_json::to_value(breakdown).unwrap();
    assert!(json["monthlyPrincipalAndInterest"].as_f64().unwrap() > 2275.0);
    assert_eq!(json["monthlyPMI"], 0.0);
}
