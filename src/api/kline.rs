use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::RawPoint;
use crate::error::{ChartError, ChartResult};

/// Pair charted when a request names none.
pub const DEFAULT_SYMBOL: &str = "BTCJPY";
/// Trailing window charted when a request names none, in minutes.
pub const DEFAULT_SPAN_MINUTES: u32 = 180;

const OPEN_TIME_COLUMN: usize = 0;
const OPEN_PRICE_COLUMN: usize = 1;

/// Candle width requested from the exchange for a given span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KlineInterval {
    OneMinute,
    FiveMinutes,
    ThirtyMinutes,
}

impl KlineInterval {
    #[must_use]
    pub fn for_span(span_minutes: u32) -> Self {
        if span_minutes >= 3_000 {
            Self::ThirtyMinutes
        } else if span_minutes >= 1_000 {
            Self::FiveMinutes
        } else {
            Self::OneMinute
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::ThirtyMinutes => "30m",
        }
    }
}

/// Decodes exchange kline rows (`[openTime, open, high, low, close, ...]`)
/// into raw `(open time, open price)` pairs.
pub fn raw_points_from_klines(rows: &[Vec<Value>]) -> ChartResult<Vec<RawPoint>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| raw_point_from_kline(index, row))
        .collect()
}

fn raw_point_from_kline(index: usize, row: &[Value]) -> ChartResult<RawPoint> {
    let (Some(open_time), Some(open_price)) =
        (row.get(OPEN_TIME_COLUMN), row.get(OPEN_PRICE_COLUMN))
    else {
        return Err(ChartError::InvalidData(format!(
            "kline row {index} has {} columns, expected at least 2",
            row.len()
        )));
    };

    let timestamp_millis = open_time
        .as_i64()
        .or_else(|| open_time.as_f64().filter(|v| v.is_finite()).map(|v| v as i64))
        .ok_or_else(|| {
            ChartError::InvalidData(format!("kline row {index} has invalid open time: {open_time}"))
        })?;

    let price = match open_price {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        other => {
            return Err(ChartError::InvalidData(format!(
                "kline row {index} has invalid open price: {other}"
            )));
        }
    };

    Ok(RawPoint::new(timestamp_millis, price))
}

#[cfg(test)]
mod tests {
    use super::KlineInterval;

    #[test]
    fn interval_widens_with_span() {
        assert_eq!(KlineInterval::for_span(180), KlineInterval::OneMinute);
        assert_eq!(KlineInterval::for_span(999), KlineInterval::OneMinute);
        assert_eq!(KlineInterval::for_span(1_000), KlineInterval::FiveMinutes);
        assert_eq!(KlineInterval::for_span(2_999), KlineInterval::FiveMinutes);
        assert_eq!(KlineInterval::for_span(3_000), KlineInterval::ThirtyMinutes);
        assert_eq!(KlineInterval::ThirtyMinutes.as_str(), "30m");
    }
}
