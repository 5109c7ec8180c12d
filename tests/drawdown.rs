use tsutil::{TsError, max_drawdown};

#[test]
fn peak_to_trough_drop() {
    let dd = max_drawdown(&[10.0, 15.0, 20.0, 12.0, 18.0, 14.0, 5.0, 6.0, 7.0]).unwrap();
    assert_eq!(dd, 15.0);
}

#[test]
fn non_decreasing_sequence_has_zero_drawdown() {
    assert_eq!(max_drawdown(&[1.0, 2.0, 2.0, 5.0, 9.0]).unwrap(), 0.0);
}

#[test]
fn single_value_has_zero_drawdown() {
    assert_eq!(max_drawdown(&[42.0]).unwrap(), 0.0);
}

#[test]
fn later_peak_resets_the_reference() {
    // Drop 3 from the first peak, then a higher peak with a drop of 4.
    assert_eq!(max_drawdown(&[5.0, 2.0, 8.0, 4.0]).unwrap(), 4.0);
}

#[test]
fn negative_values_still_measure_absolute_drop() {
    assert_eq!(max_drawdown(&[-1.0, -4.0, -2.0]).unwrap(), 3.0);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(max_drawdown(&[]).unwrap_err(), TsError::EmptySeries);
}
