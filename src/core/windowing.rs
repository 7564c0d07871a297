use tracing::{debug, trace};

use crate::core::{RawPoint, SeriesPoint};
use crate::error::{ChartError, ChartResult};

/// Fewest raw points worth plotting.
pub const MIN_SERIES_LEN: usize = 2;
/// Largest raw series accepted; one month of one-minute candles.
pub const MAX_SERIES_LEN: usize = 43_200;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Trims a raw series to the trailing window anchored at its latest timestamp.
///
/// The filter is stateless; one value can be shared between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindowFilter;

impl TimeWindowFilter {
    /// Sorts `series` by time, keeps points within `span_minutes` of the
    /// latest timestamp (inclusive), and parses the kept prices.
    ///
    /// Points outside the window are dropped before their price is parsed.
    pub fn filter(series: Vec<RawPoint>, span_minutes: u32) -> ChartResult<Vec<SeriesPoint>> {
        validate_series_len(series.len())?;
        if span_minutes == 0 {
            return Err(ChartError::invalid_request("span must be at least one minute"));
        }

        let mut series = series;
        // Stable: equal timestamps keep their input order.
        series.sort_by_key(|point| point.timestamp_millis);

        let anchor = series
            .last()
            .map(|point| point.timestamp_millis)
            .ok_or_else(|| ChartError::InvalidData("series is empty".to_owned()))?;
        let span = f64::from(span_minutes);

        let mut points = Vec::with_capacity(series.len());
        for raw in &series {
            if !within_trailing_window(anchor, raw.timestamp_millis, span) {
                trace!(timestamp_millis = raw.timestamp_millis, "dropping point outside window");
                continue;
            }
            points.push(SeriesPoint::parse(raw)?);
        }

        if points.is_empty() {
            return Err(ChartError::InvalidData(
                "time window removed every point".to_owned(),
            ));
        }

        debug!(
            input = series.len(),
            kept = points.len(),
            span_minutes,
            anchor,
            "filtered series to trailing window"
        );
        Ok(points)
    }
}

fn validate_series_len(len: usize) -> ChartResult<()> {
    if !(MIN_SERIES_LEN..=MAX_SERIES_LEN).contains(&len) {
        return Err(ChartError::invalid_request(format!(
            "series length must be between {MIN_SERIES_LEN} and {MAX_SERIES_LEN}, got {len}"
        )));
    }
    Ok(())
}

fn within_trailing_window(anchor_millis: i64, timestamp_millis: i64, span_minutes: f64) -> bool {
    let age_minutes = anchor_millis.saturating_sub(timestamp_millis) as f64 / MILLIS_PER_MINUTE;
    age_minutes <= span_minutes
}
