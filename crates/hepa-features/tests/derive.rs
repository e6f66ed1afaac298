use hepa_core::models::patient::RawPatientRecord;
use hepa_features::derive::{age_bin, bilirubin_bins, derive, stage_grouped, LogPolicy};
use hepa_features::error::DerivationError;

fn record() -> RawPatientRecord {
    RawPatientRecord {
        id: 1,
        n_days: 150,
        drug: "Placebo".to_string(),
        age: 45,
        sex: "Female".to_string(),
        ascites: 0,
        hepatomegaly: 0,
        spiders: 0,
        edema: 0,
        bilirubin: 1.8,
        cholesterol: 200.0,
        albumin: 3.5,
        copper: 80.0,
        alk_phos: 120.0,
        sgot: 90.0,
        tryglicerides: 150.0,
        platelets: 250000.0,
        prothrombin: 10.0,
        stage: 2,
    }
}

#[test]
fn age_bin_boundaries() {
    assert_eq!(age_bin(34), "<35");
    assert_eq!(age_bin(35), "35-50");
    assert_eq!(age_bin(50), "35-50");
    assert_eq!(age_bin(51), ">50");
}

#[test]
fn stage_groups() {
    assert_eq!(stage_grouped(1), "low");
    assert_eq!(stage_grouped(2), "mid");
    assert_eq!(stage_grouped(3), "high");
    assert_eq!(stage_grouped(4), "high");
    // Out-of-range stages are not validated.
    assert_eq!(stage_grouped(0), "high");
    assert_eq!(stage_grouped(9), "high");
}

#[test]
fn bilirubin_bins_leave_high_range_uncoded() {
    assert_eq!(bilirubin_bins(1.1), (1, 0));
    assert_eq!(bilirubin_bins(1.2), (0, 1));
    assert_eq!(bilirubin_bins(1.5), (0, 1));
    assert_eq!(bilirubin_bins(1.999), (0, 1));
    assert_eq!(bilirubin_bins(2.0), (0, 0));
    assert_eq!(bilirubin_bins(2.5), (0, 0));
}

#[test]
fn bilirubin_bins_are_mutually_exclusive() {
    let mut b = 0.0;
    while b < 5.0 {
        let (one, two) = bilirubin_bins(b);
        assert!(one + two <= 1, "both bins set at {b}");
        b += 0.05;
    }
}

#[test]
fn zero_denominators_give_zero() {
    let mut raw = record();
    raw.albumin = 0.0;
    raw.platelets = 0.0;
    let derived = derive(&raw, LogPolicy::Strict).unwrap();
    assert_eq!(derived.bili_alb, 0.0);
    assert_eq!(derived.prothrombin_platelets_ratio, 0.0);
}

#[test]
fn ratios_and_products() {
    let derived = derive(&record(), LogPolicy::Strict).unwrap();
    assert_eq!(derived.bili_alb, 1.8 / 3.5);
    assert!((derived.bili_alb - 0.514).abs() < 1e-3);
    assert_eq!(derived.age_stage, 90);
    assert_eq!(derived.prothrombin_platelets_ratio, 10.0 / 250000.0);
}

#[test]
fn logs_are_natural() {
    let derived = derive(&record(), LogPolicy::Strict).unwrap();
    assert_eq!(derived.bilirubin_log, 1.8_f64.ln());
    assert_eq!(derived.cholesterol_log, 200.0_f64.ln());
    assert_eq!(derived.sgot_log, 90.0_f64.ln());
}

#[test]
fn strict_policy_rejects_non_positive_log_input() {
    let mut raw = record();
    raw.cholesterol = 0.0;
    let err = derive(&raw, LogPolicy::Strict).unwrap_err();
    assert_eq!(
        err,
        DerivationError::NonPositiveLog {
            field: "Cholesterol",
            value: 0.0,
        }
    );
}

#[test]
fn zero_policy_maps_non_positive_log_input_to_zero() {
    let mut raw = record();
    raw.bilirubin = 0.0;
    raw.sgot = -3.0;
    let derived = derive(&raw, LogPolicy::ZeroOnNonPositive).unwrap();
    assert_eq!(derived.bilirubin_log, 0.0);
    assert_eq!(derived.sgot_log, 0.0);
    assert_eq!(derived.cholesterol_log, 200.0_f64.ln());
}

#[test]
fn policies_agree_on_positive_inputs() {
    let strict = derive(&record(), LogPolicy::Strict).unwrap();
    let zero = derive(&record(), LogPolicy::ZeroOnNonPositive).unwrap();
    assert_eq!(strict, zero);
}

#[test]
fn non_finite_lab_value_is_rejected_under_both_policies() {
    let mut raw = record();
    raw.copper = f64::NAN;
    for policy in [LogPolicy::Strict, LogPolicy::ZeroOnNonPositive] {
        assert_eq!(
            derive(&raw, policy).unwrap_err(),
            DerivationError::NonFinite { field: "Copper" }
        );
    }

    let mut raw = record();
    raw.platelets = f64::INFINITY;
    assert!(matches!(
        derive(&raw, LogPolicy::ZeroOnNonPositive),
        Err(DerivationError::NonFinite { field: "Platelets" })
    ));
}

#[test]
fn overflowing_ratio_is_rejected() {
    let mut raw = record();
    raw.bilirubin = 1e308;
    raw.albumin = 1e-308;
    assert_eq!(
        derive(&raw, LogPolicy::ZeroOnNonPositive).unwrap_err(),
        DerivationError::NonFinite { field: "Bili_Alb" }
    );

    let mut raw = record();
    raw.prothrombin = 1e308;
    raw.platelets = 1e-10;
    assert_eq!(
        derive(&raw, LogPolicy::Strict).unwrap_err(),
        DerivationError::NonFinite {
            field: "Prothrombin_Platelets_Ratio"
        }
    );
}

#[test]
fn log_policy_parses_from_config_strings() {
    assert_eq!("strict".parse::<LogPolicy>(), Ok(LogPolicy::Strict));
    assert_eq!(
        "zero-on-non-positive".parse::<LogPolicy>(),
        Ok(LogPolicy::ZeroOnNonPositive)
    );
    assert!("lenient".parse::<LogPolicy>().is_err());
    assert_eq!(LogPolicy::ZeroOnNonPositive.to_string(), "zero-on-non-positive");
}
