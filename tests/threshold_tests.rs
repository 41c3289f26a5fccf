//! Threshold selection scenarios through the public API.

use modfsm::threshold::{find_best_threshold, SelectionConfig, ThresholdError, ThresholdSelector};

#[test]
fn normal_case() {
    let thresholds = [0.1, 0.2, 0.3, 0.4, 0.5];
    let tp = [50.0, 48.0, 45.0, 40.0, 35.0];
    let tn = [30.0, 32.0, 33.0, 40.0, 50.0];
    let fp = [10.0, 12.0, 14.0, 18.0, 20.0];
    let fn_ = [5.0, 6.0, 7.0, 8.0, 9.0];

    let result = find_best_threshold(&thresholds, &tp, &fn_, Some(&tn), Some(&fp));
    assert_eq!(result, Ok(Some(0.1)));
}

#[test]
fn empty_input_lists() {
    let result = find_best_threshold(&[], &[], &[], Some(&[]), Some(&[]));

    let err = result.unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("All input lists must be non-empty"));
}

#[test]
fn non_negative_values() {
    let result = find_best_threshold(&[0.1], &[50.0], &[-30.0], Some(&[10.0]), Some(&[5.0]));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("All inputs must be non-negative"));
}

#[test]
fn input_length_mismatch() {
    let result = find_best_threshold(&[0.1], &[50.0, 48.0], &[30.0], Some(&[10.0]), Some(&[5.0]));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("All input lists must have the same length"));
}

#[test]
fn mismatched_optional_list_is_rejected() {
    let result = find_best_threshold(&[0.1, 0.2], &[9.0, 9.0], &[1.0, 1.0], None, Some(&[1.0]));

    assert_eq!(
        result,
        Err(ThresholdError::LengthMismatch {
            name: "false_positives",
            expected: 2,
            found: 1,
        })
    );
}

#[test]
fn all_zero_inputs() {
    // The warnings for this case are counted by the unit test
    // `all_zero_inputs_warn_and_return_none` in src/threshold/mod.rs
    let zeros = [0.0; 3];
    let result = find_best_threshold(&[0.1, 0.2, 0.3], &zeros, &zeros, Some(&zeros), Some(&zeros));

    assert_eq!(result, Ok(None));
}

#[test]
fn zero_tp_fn_combination() {
    let result = find_best_threshold(
        &[0.1, 0.2, 0.3],
        &[0.0, 20.0, 30.0],
        &[0.0, 2.0, 3.0],
        Some(&[5.0, 6.0, 7.0]),
        Some(&[0.0, 0.0, 0.0]),
    );

    assert!(result.unwrap().is_some());
}

#[test]
fn configured_recall_floor() {
    let thresholds = [0.1, 0.2, 0.3];
    let tp = [90.0, 80.0, 70.0];
    let fn_ = [10.0, 20.0, 30.0];
    let fp = [30.0, 10.0, 5.0];

    // Only 0.1 reaches the default floor
    assert_eq!(
        find_best_threshold(&thresholds, &tp, &fn_, None, Some(&fp)),
        Ok(Some(0.1))
    );

    let config = SelectionConfig::from_json(r#"{ "min_recall": 0.7 }"#).unwrap();
    let selector = ThresholdSelector::new(config).unwrap();
    assert_eq!(
        selector.select(&thresholds, &tp, &fn_, None, Some(&fp)),
        Ok(Some(0.3))
    );
}
