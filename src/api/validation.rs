use crate::error::{ChartError, ChartResult};

use super::{ChartPipelineConfig, TimeAxisTimeZone};

const MAX_TIMEZONE_OFFSET_MINUTES: i32 = 14 * 60;

pub(super) fn validate_timezone(timezone: TimeAxisTimeZone) -> ChartResult<TimeAxisTimeZone> {
    let offset_minutes = i32::from(timezone.offset_minutes());
    if !(-MAX_TIMEZONE_OFFSET_MINUTES..=MAX_TIMEZONE_OFFSET_MINUTES).contains(&offset_minutes) {
        return Err(ChartError::InvalidData(
            "time-axis timezone offset must be between -840 and 840 minutes".to_owned(),
        ));
    }
    Ok(timezone)
}

pub(super) fn validate_pipeline_config(
    config: ChartPipelineConfig,
) -> ChartResult<ChartPipelineConfig> {
    validate_timezone(config.timezone)?;
    Ok(config)
}

/// Rejects bounds the tick walk cannot terminate on.
pub(super) fn validate_tick_range(min_seconds: f64, max_seconds: f64) -> ChartResult<(f64, f64)> {
    if !min_seconds.is_finite() || !max_seconds.is_finite() || max_seconds <= min_seconds {
        return Err(ChartError::DegenerateRange {
            min: min_seconds,
            max: max_seconds,
        });
    }
    Ok((min_seconds, max_seconds))
}
