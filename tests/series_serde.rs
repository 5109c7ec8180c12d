use tsutil::Series;

#[test]
fn series_round_trips_through_json() {
    let s = Series::new(vec![1, 3, 5, 7], vec![1.0, 3.0, 5.0, 7.0]).unwrap();
    let json = serde_json::to_string(&s).unwrap();
    let back: Series = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn deserialization_revalidates_invariants() {
    // Unsorted times.
    let err = serde_json::from_str::<Series>(r#"{"times":[3,1],"values":[1.0,2.0]}"#).unwrap_err();
    assert!(err.to_string().contains("not strictly increasing"));

    // Length mismatch.
    let err = serde_json::from_str::<Series>(r#"{"times":[1,2],"values":[1.0]}"#).unwrap_err();
    assert!(err.to_string().contains("length mismatch"));

    // Empty series.
    let err = serde_json::from_str::<Series>(r#"{"times":[],"values":[]}"#).unwrap_err();
    assert!(err.to_string().contains("empty series"));
}

#[test]
fn series_methods_delegate_to_the_free_functions() {
    let s = Series::new(vec![1, 3, 5, 7], vec![1.0, 3.0, 5.0, 10.0]).unwrap();
    assert_eq!(s.resample(&[2, 3, 6]).unwrap(), vec![1.0, 3.0, 5.0]);
    assert_eq!(s.resample_interp(&[2, 3, 6]).unwrap(), vec![2.0, 3.0, 7.5]);
    assert_eq!(s.max_drawdown().unwrap(), 0.0);
}

#[test]
fn construction_rejects_bad_input() {
    assert!(Series::new(vec![], vec![]).is_err());
    assert!(Series::new(vec![1, 1], vec![1.0, 2.0]).is_err());
    assert!(Series::new(vec![1, 2, 3], vec![1.0]).is_err());
}
