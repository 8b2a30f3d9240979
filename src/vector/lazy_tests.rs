pub(crate) use super::*;

static SAMPLE: [f64; 9] = [1.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0, 6.0, 7.0];

#[test]
fn test_stream_materializes_in_order() {
    let v = LazyVector::new(SAMPLE.iter().copied());
    assert_eq!(v.values(), SAMPLE.to_vec());
}

#[test]
fn test_stream_is_one_shot() {
    let v = LazyVector::new(SAMPLE.iter().copied());
    assert_eq!(v.values(), SAMPLE.to_vec());
    assert_eq!(v.values(), Vec::<f64>::new());
}

#[test]
fn test_count_keeps_stream_consumable() {
    let v = LazyVector::new(SAMPLE.iter().copied());
    assert_eq!(v.count(), 9);
    // Counting buffered the stream; iteration still sees every element.
    assert_eq!(v.values(), SAMPLE.to_vec());
}

#[test]
fn test_count_on_factory_leaves_state_alone() {
    let v = LazyVector::from_factory(|| SAMPLE.iter().copied());
    assert_eq!(v.count(), 9);
    assert_eq!(v.count(), 9);
    assert_eq!(v.values(), SAMPLE.to_vec());
}

#[test]
fn test_factory_restarts_per_consumption() {
    let v = LazyVector::from_factory(|| (0..4).map(f64::from));
    assert_eq!(v.values(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(v.values(), vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_from_values_is_one_shot() {
    let v = LazyVector::from_values(SAMPLE.to_vec()).expect("lazy creation cannot fail");
    assert_eq!(v.values(), SAMPLE.to_vec());
    assert_eq!(v.values(), Vec::<f64>::new());
}

#[test]
fn test_from_values_accepts_empty() {
    let v = LazyVector::from_values(Vec::new()).expect("lazy creation cannot fail");
    assert_eq!(v.count(), 0);
    assert_eq!(v.values(), Vec::<f64>::new());
    // The emptiness surfaces in the statistics instead.
    assert_eq!(v.mean(), Err(MatrizError::DivisionByZero));
    assert_eq!(v.deviation(), 0.0);
}

#[test]
fn test_indexed_access_unsupported() {
    let v = LazyVector::new(SAMPLE.iter().copied());
    assert!(matches!(
        v.get(0),
        Err(MatrizError::UnsupportedOperation { .. })
    ));
}

#[test]
fn test_map_is_deferred_on_factory() {
    let v = LazyVector::from_factory(|| (1..=3).map(f64::from));
    let mapped = v.map(|value, index| value * 10.0 + index as f64);
    // Factory views restart, so the mapped view does too.
    assert_eq!(mapped.values(), vec![10.0, 21.0, 32.0]);
    assert_eq!(mapped.values(), vec![10.0, 21.0, 32.0]);
    // The original factory view is untouched.
    assert_eq!(v.values(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_map_on_stream_moves_the_sequence() {
    let v = LazyVector::new(SAMPLE.iter().copied());
    let mapped = v.map(|value, _| value * 2.0);
    assert_eq!(mapped.values()[0], 2.0);
    // The one-shot stream now lives in the mapped view.
    assert_eq!(v.values(), Vec::<f64>::new());
}

#[test]
fn test_extend_and_reduce() {
    let v = LazyVector::new(SAMPLE.iter().copied());
    let extended = v.extend(2, 8.0).expect("lazy extend cannot fail");
    assert_eq!(
        extended.values(),
        vec![1.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 8.0]
    );

    let v = LazyVector::new(SAMPLE.iter().copied());
    let reduced = v.reduce(2).expect("reduce keeps seven elements");
    assert_eq!(reduced.values(), vec![1.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_reduce_whole_sequence_rejected() {
    let v = LazyVector::new(SAMPLE.iter().copied());
    assert!(matches!(v.reduce(9), Err(MatrizError::EmptyInput)));
}

#[test]
fn test_statistics_match_dense_fixtures() {
    let v = LazyVector::from_factory(|| SAMPLE.iter().copied());
    assert_eq!(v.sum(), 34.0);
    assert_eq!(v.max().expect("non-empty"), 7.0);
    assert_eq!(v.min().expect("non-empty"), 1.0);
    assert!((v.mean().expect("non-empty") - 3.78).abs() < 0.005);
    assert_eq!(v.median().expect("non-empty"), 3.0);
    assert!((v.variance().expect("non-empty") - 3.28).abs() < 0.005);
    assert!((v.deviation() - 1.81).abs() < 0.005);
}

#[test]
fn test_into_iterator_consumes() {
    let v = LazyVector::new(SAMPLE.iter().copied());
    let collected: Vec<f64> = v.into_iter().collect();
    assert_eq!(collected, SAMPLE.to_vec());
}

#[test]
fn test_serialize_as_flat_sequence() {
    let v = LazyVector::from_factory(|| (1..=3).map(f64::from));
    let json = serde_json::to_value(&v).expect("lazy vector serializes");
    assert_eq!(json, serde_json::json!([1.0, 2.0, 3.0]));
}

#[test]
fn test_debug_reports_source_kind() {
    let stream = LazyVector::new(SAMPLE.iter().copied());
    assert!(format!("{stream:?}").contains("stream"));

    let factory = LazyVector::from_factory(|| SAMPLE.iter().copied());
    assert!(format!("{factory:?}").contains("factory"));
}
