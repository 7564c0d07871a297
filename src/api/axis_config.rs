use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Timezone used to snap ticks and format time-axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeAxisTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl TimeAxisTimeZone {
    /// UTC+9, the zone the chart bot historically rendered in.
    #[must_use]
    pub fn tokyo() -> Self {
        Self::FixedOffsetMinutes { minutes: 9 * 60 }
    }

    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    pub fn fixed_offset(self) -> ChartResult<FixedOffset> {
        let seconds = i32::from(self.offset_minutes()) * 60;
        FixedOffset::east_opt(seconds).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "time-axis timezone offset {} minutes is out of range",
                self.offset_minutes()
            ))
        })
    }
}

/// Runtime configuration for [`super::ChartPipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChartPipelineConfig {
    pub timezone: TimeAxisTimeZone,
}

impl ChartPipelineConfig {
    #[must_use]
    pub fn with_timezone(mut self, timezone: TimeAxisTimeZone) -> Self {
        self.timezone = timezone;
        self
    }
}
