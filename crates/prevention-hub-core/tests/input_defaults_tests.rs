//! Tests per-field default resolution of blank measurements.

use prevention_hub_core::{AssessmentInput, Field};

fn fully_specified() -> AssessmentInput {
    AssessmentInput {
        age: Some(41.0),
        pregnancies: Some(2.0),
        glucose: Some(130.0),
        blood_pressure: Some(72.0),
        skin_thickness: Some(31.0),
        insulin: Some(110.0),
        weight: Some(82.0),
        height: Some(1.75),
        diabetes_pedigree_function: Some(0.9),
    }
}

#[test]
fn input_defaults_tests_resolve_each_blank_field_independently() {
    for blank in Field::ALL {
        let mut input = fully_specified();
        input.set(blank, None);

        let resolved = input.resolve().expect("input should resolve");
        let resolved_input = AssessmentInput {
            age: Some(resolved.age),
            pregnancies: Some(resolved.pregnancies),
            glucose: Some(resolved.glucose),
            blood_pressure: Some(resolved.blood_pressure),
            skin_thickness: Some(resolved.skin_thickness),
            insulin: Some(resolved.insulin),
            weight: Some(resolved.weight),
            height: Some(resolved.height),
            diabetes_pedigree_function: Some(resolved.diabetes_pedigree_function),
        };

        for field in Field::ALL {
            let expected = if field == blank {
                field.default_value()
            } else {
                fully_specified().get(field).expect("fixture is complete")
            };
            assert_eq!(
                resolved_input.get(field),
                Some(expected),
                "{field} while {blank} is blank"
            );
        }
    }
}

#[test]
fn input_defaults_tests_supplied_zero_is_not_replaced() {
    let input = AssessmentInput::default().with(Field::Glucose, 0.0);
    let resolved = input.resolve().expect("zero glucose is valid");
    assert_eq!(resolved.glucose, 0.0);
}

#[test]
fn input_defaults_tests_blank_form_decodes_from_empty_json() {
    let input: AssessmentInput = serde_json::from_str("{}").expect("empty form should decode");
    assert_eq!(input, AssessmentInput::default());

    let partial: AssessmentInput =
        serde_json::from_str(r#"{"glucose":180,"height":1.6}"#).expect("partial form");
    assert_eq!(partial.glucose, Some(180.0));
    assert_eq!(partial.weight, None);
}
