use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64, parse_price};
use crate::error::ChartResult;

/// One `[timestampMillis, priceString]` pair as delivered by market data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPoint {
    pub timestamp_millis: i64,
    pub price: String,
}

impl RawPoint {
    #[must_use]
    pub fn new(timestamp_millis: i64, price: impl Into<String>) -> Self {
        Self {
            timestamp_millis,
            price: price.into(),
        }
    }
}

impl From<SeriesPoint> for RawPoint {
    fn from(point: SeriesPoint) -> Self {
        Self::new(point.timestamp_millis, point.price.to_string())
    }
}

/// Parsed series sample with a finite, non-negative price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp_millis: i64,
    pub price: f64,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(timestamp_millis: i64, price: f64) -> Self {
        Self {
            timestamp_millis,
            price,
        }
    }

    pub fn parse(raw: &RawPoint) -> ChartResult<Self> {
        Ok(Self {
            timestamp_millis: raw.timestamp_millis,
            price: parse_price(&raw.price)?,
        })
    }

    pub fn from_decimal(timestamp_millis: i64, price: Decimal) -> ChartResult<Self> {
        Ok(Self {
            timestamp_millis,
            price: decimal_to_f64(price, "price")?,
        })
    }

    pub fn from_datetime(time: DateTime<Utc>, price: Decimal) -> ChartResult<Self> {
        Self::from_decimal(datetime_to_unix_millis(time), price)
    }

    /// Horizontal axis position in epoch seconds.
    #[must_use]
    pub fn time_seconds(self) -> f64 {
        self.timestamp_millis as f64 / 1000.0
    }
}

/// Time-axis tick. An empty label marks a minor gridline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position_seconds: f64,
    pub label: String,
}

impl Tick {
    #[must_use]
    pub fn minor(position_seconds: f64) -> Self {
        Self {
            position_seconds,
            label: String::new(),
        }
    }

    #[must_use]
    pub fn major(position_seconds: f64, label: impl Into<String>) -> Self {
        Self {
            position_seconds,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn is_major(&self) -> bool {
        !self.label.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::{RawPoint, SeriesPoint};

    #[test]
    fn decimal_and_datetime_inputs_map_to_series_point() {
        let time = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid datetime");
        let point = SeriesPoint::from_datetime(time, Decimal::new(98_765_425, 2)).expect("point");

        assert_eq!(point.timestamp_millis, 1_704_067_200_000);
        assert_eq!(point.price, 987_654.25);
        assert_eq!(point.time_seconds(), 1_704_067_200.0);
    }

    #[test]
    fn negative_decimal_price_is_rejected() {
        assert!(SeriesPoint::from_decimal(0, Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn series_point_round_trips_through_raw_text() {
        let point = SeriesPoint::new(1_000, 0.1 + 0.2);
        let raw = RawPoint::from(point);
        assert_eq!(SeriesPoint::parse(&raw).expect("parse"), point);
    }
}
