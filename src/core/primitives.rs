use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    let value = value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })?;
    ensure_price(value, field_name)
}

/// Parses a market-data price string into a finite, non-negative float.
pub fn parse_price(text: &str) -> ChartResult<f64> {
    let value = text
        .parse::<f64>()
        .map_err(|e| ChartError::InvalidData(format!("invalid price `{text}`: {e}")))?;
    ensure_price(value, "price")
}

fn ensure_price(value: f64, field_name: &str) -> ChartResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{field_name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(value)
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}
