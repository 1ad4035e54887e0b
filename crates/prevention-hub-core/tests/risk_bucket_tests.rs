//! Tests probability bucketing boundaries.

use prevention_hub_core::{RiskAssessment, RiskLevel, bucket};
use proptest::prelude::*;

#[test]
fn risk_bucket_tests_boundaries_belong_to_higher_bucket() {
    assert_eq!(bucket(Some(0.199999)), RiskLevel::Low);
    assert_eq!(bucket(Some(0.20)), RiskLevel::Moderate);
    assert_eq!(bucket(Some(0.499999)), RiskLevel::Moderate);
    assert_eq!(bucket(Some(0.50)), RiskLevel::Elevated);
    assert_eq!(bucket(Some(0.0)), RiskLevel::Low);
    assert_eq!(bucket(Some(1.0)), RiskLevel::Elevated);
}

#[test]
fn risk_bucket_tests_missing_probability_is_unavailable() {
    assert_eq!(bucket(None), RiskLevel::Unavailable);

    let assessment = RiskAssessment::unavailable();
    assert_eq!(assessment.level(), RiskLevel::Unavailable);
    assert_eq!(assessment.probability(), None);
    assert!(!assessment.is_available());
}

#[test]
fn risk_bucket_tests_assessment_keeps_probability_and_level_consistent() {
    let assessment = RiskAssessment::from_probability(Some(0.34));
    assert_eq!(assessment.level(), RiskLevel::Moderate);
    assert_eq!(assessment.probability(), Some(0.34));
    assert!((assessment.percent().expect("percent") - 34.0).abs() < 1e-9);
}

#[test]
fn risk_bucket_tests_out_of_range_probability_is_unavailable() {
    assert_eq!(bucket(Some(-0.3)), RiskLevel::Unavailable);
    assert_eq!(bucket(Some(1.7)), RiskLevel::Unavailable);
    assert_eq!(bucket(Some(f64::NAN)), RiskLevel::Unavailable);

    for p in [-0.3, 1.7, f64::INFINITY] {
        let assessment = RiskAssessment::from_probability(Some(p));
        assert_eq!(assessment.level(), RiskLevel::Unavailable);
        assert_eq!(assessment.probability(), None);
        assert_eq!(assessment.percent(), None);
    }
}

proptest! {
    #[test]
    fn risk_bucket_tests_values_outside_unit_interval_are_unavailable(
        p in prop_oneof![-1.0e6f64..-1.0e-9, 1.0 + 1.0e-9..1.0e6f64]
    ) {
        prop_assert_eq!(bucket(Some(p)), RiskLevel::Unavailable);
        prop_assert_eq!(RiskAssessment::from_probability(Some(p)).probability(), None);
    }


    #[test]
    fn risk_bucket_tests_partition_covers_unit_interval(p in 0.0f64..=1.0) {
        let level = bucket(Some(p));
        let memberships = [
            p < 0.20,
            (0.20..0.50).contains(&p),
            p >= 0.50,
        ];
        prop_assert_eq!(memberships.iter().filter(|member| **member).count(), 1);
        prop_assert_ne!(level, RiskLevel::Unavailable);
        let expected = if memberships[0] {
            RiskLevel::Low
        } else if memberships[1] {
            RiskLevel::Moderate
        } else {
            RiskLevel::Elevated
        };
        prop_assert_eq!(level, expected);
    }
}
