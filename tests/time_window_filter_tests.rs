use coinchart::ChartError;
use coinchart::core::{MAX_SERIES_LEN, RawPoint, TimeWindowFilter};

const MINUTE_MS: i64 = 60_000;
const BASE_MS: i64 = 1_704_067_200_000;

fn minute_series(count: i64) -> Vec<RawPoint> {
    (0..count)
        .map(|i| RawPoint::new(BASE_MS + i * MINUTE_MS, format!("{}.5", 100 + i)))
        .collect()
}

#[test]
fn three_hour_series_with_matching_span_keeps_every_point() {
    let points = TimeWindowFilter::filter(minute_series(181), 180).expect("filter");

    assert_eq!(points.len(), 181);
    assert_eq!(points[0].timestamp_millis, BASE_MS);
    assert_eq!(points[180].timestamp_millis, BASE_MS + 180 * MINUTE_MS);
    assert_eq!(points[180].price, 280.5);
}

#[test]
fn points_older_than_span_are_dropped() {
    let points = TimeWindowFilter::filter(minute_series(181), 60).expect("filter");

    assert_eq!(points.len(), 61);
    assert_eq!(points[0].timestamp_millis, BASE_MS + 120 * MINUTE_MS);
}

#[test]
fn two_points_one_millisecond_apart_both_survive() {
    let series = vec![RawPoint::new(BASE_MS, "1.0"), RawPoint::new(BASE_MS + 1, "2.0")];
    let points = TimeWindowFilter::filter(series, 1).expect("filter");

    assert_eq!(points.len(), 2);
}

#[test]
fn unsorted_input_is_returned_sorted() {
    let series = vec![
        RawPoint::new(BASE_MS + 2 * MINUTE_MS, "3"),
        RawPoint::new(BASE_MS, "1"),
        RawPoint::new(BASE_MS + MINUTE_MS, "2"),
    ];
    let points = TimeWindowFilter::filter(series, 10).expect("filter");
    let prices: Vec<f64> = points.iter().map(|point| point.price).collect();

    assert_eq!(prices, vec![1.0, 2.0, 3.0]);
}

#[test]
fn equal_timestamps_keep_input_order() {
    let series = vec![
        RawPoint::new(BASE_MS + MINUTE_MS, "9"),
        RawPoint::new(BASE_MS, "7"),
        RawPoint::new(BASE_MS + MINUTE_MS, "8"),
    ];
    let points = TimeWindowFilter::filter(series, 10).expect("filter");
    let prices: Vec<f64> = points.iter().map(|point| point.price).collect();

    assert_eq!(prices, vec![7.0, 9.0, 8.0]);
}

#[test]
fn window_boundary_is_inclusive() {
    let series = vec![
        RawPoint::new(BASE_MS - 1, "1"),
        RawPoint::new(BASE_MS, "2"),
        RawPoint::new(BASE_MS + 5 * MINUTE_MS, "3"),
    ];
    let points = TimeWindowFilter::filter(series, 5).expect("filter");

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].timestamp_millis, BASE_MS);
}

#[test]
fn single_point_series_is_an_invalid_request() {
    let err = TimeWindowFilter::filter(minute_series(1), 180).expect_err("should fail");
    assert!(matches!(err, ChartError::InvalidRequest { .. }));
}

#[test]
fn oversized_series_is_an_invalid_request() {
    let series = minute_series(MAX_SERIES_LEN as i64 + 1);
    let err = TimeWindowFilter::filter(series, 180).expect_err("should fail");
    assert!(matches!(err, ChartError::InvalidRequest { .. }));
}

#[test]
fn largest_series_is_accepted() {
    let series = minute_series(MAX_SERIES_LEN as i64);
    let points = TimeWindowFilter::filter(series, 43_200).expect("filter");
    assert_eq!(points.len(), MAX_SERIES_LEN);
}

#[test]
fn zero_span_is_an_invalid_request() {
    let err = TimeWindowFilter::filter(minute_series(3), 0).expect_err("should fail");
    assert!(matches!(err, ChartError::InvalidRequest { .. }));
}

#[test]
fn unparsable_price_in_window_is_invalid_data() {
    let series = vec![RawPoint::new(BASE_MS, "1.0"), RawPoint::new(BASE_MS + 1, "abc")];
    let err = TimeWindowFilter::filter(series, 1).expect_err("should fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn negative_price_is_invalid_data() {
    let series = vec![RawPoint::new(BASE_MS, "1.0"), RawPoint::new(BASE_MS + 1, "-2")];
    let err = TimeWindowFilter::filter(series, 1).expect_err("should fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn unparsable_price_outside_window_is_never_parsed() {
    let series = vec![
        RawPoint::new(BASE_MS, "abc"),
        RawPoint::new(BASE_MS + 60 * MINUTE_MS, "1.0"),
        RawPoint::new(BASE_MS + 61 * MINUTE_MS, "1.5"),
    ];
    let points = TimeWindowFilter::filter(series, 30).expect("filter");
    assert_eq!(points.len(), 2);
}
