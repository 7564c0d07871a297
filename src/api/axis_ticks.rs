use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Tick;
use crate::error::{ChartError, ChartResult};

use super::TimeAxisTimeZone;
use super::axis_label_format::{TimeLabelPattern, format_time_tick_label};
use super::validation::{validate_tick_range, validate_timezone};

/// Below this span (seconds) ticks snap to and step by ten minutes.
pub const TEN_MINUTE_RESOLUTION_LIMIT: f64 = 15_000.0;
/// Below this span (seconds) ticks snap to and step by one hour; at or above it,
/// by one day. Used for both snapping and stepping.
pub const HOURLY_RESOLUTION_LIMIT: f64 = 90_000.0;

const TEN_DAYS: f64 = 864_000.0;
const NINETY_DAYS: f64 = 7_776_000.0;
const HALF_YEAR: f64 = 15_552_000.0;
const EIGHTEEN_MONTHS: f64 = 47_347_200.0;

/// Calendar granularity used to snap the first tick and advance the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickResolution {
    TenMinutes,
    Hour,
    Day,
}

impl TickResolution {
    #[must_use]
    pub fn for_delta(delta_seconds: f64) -> Self {
        if delta_seconds < TEN_MINUTE_RESOLUTION_LIMIT {
            Self::TenMinutes
        } else if delta_seconds < HOURLY_RESOLUTION_LIMIT {
            Self::Hour
        } else {
            Self::Day
        }
    }

    #[must_use]
    pub fn step(self) -> Duration {
        match self {
            Self::TenMinutes => Duration::minutes(10),
            Self::Hour => Duration::hours(1),
            Self::Day => Duration::days(1),
        }
    }

    fn snap(self, local: NaiveDateTime) -> Option<NaiveDateTime> {
        let date = local.date();
        match self {
            Self::TenMinutes => {
                date.and_hms_opt(local.hour(), local.minute() - local.minute() % 10, 0)
            }
            Self::Hour => date.and_hms_opt(local.hour(), 0, 0),
            Self::Day => date.and_hms_opt(0, 0, 0),
        }
    }
}

/// Span band selecting which ticks are emitted and which carry labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickDensityBand {
    /// Under 25 hours: every step, labeled `HH:MM`.
    Intraday,
    /// Under 10 days: every step, labeled `MM/DD`.
    UpToTenDays,
    /// Under 90 days: every day, every fifth step labeled.
    UpToNinetyDays,
    /// Under 180 days: day 1 and multiples of 5, labeled on days 1 and 15.
    UpToHalfYear,
    /// Under 18 months: days 1 and 15, labeled on day 1.
    UpToEighteenMonths,
    /// Longer spans: day 1 of each month, labeled on January 1st.
    Multiyear,
}

impl TickDensityBand {
    #[must_use]
    pub fn for_delta(delta_seconds: f64) -> Self {
        density_for_delta(delta_seconds).band
    }
}

#[derive(Debug, Clone, Copy)]
enum EmitRule {
    EveryStep,
    FirstOrMultipleOfFiveDay,
    FirstOrFifteenthDay,
    FirstDay,
}

impl EmitRule {
    fn emits(self, local_dt: &DateTime<FixedOffset>) -> bool {
        let day = local_dt.day();
        match self {
            Self::EveryStep => true,
            Self::FirstOrMultipleOfFiveDay => day == 1 || day % 5 == 0,
            Self::FirstOrFifteenthDay => day == 1 || day == 15,
            Self::FirstDay => day == 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum LabelRule {
    Always,
    EveryNthStep(u64),
    FirstOrFifteenthDay,
    FirstDay,
    FirstOfJanuary,
}

impl LabelRule {
    fn labels(self, local_dt: &DateTime<FixedOffset>, iteration: u64) -> bool {
        let day = local_dt.day();
        match self {
            Self::Always => true,
            Self::EveryNthStep(n) => iteration % n == 0,
            Self::FirstOrFifteenthDay => day == 1 || day == 15,
            Self::FirstDay => day == 1,
            Self::FirstOfJanuary => day == 1 && local_dt.month() == 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TickDensity {
    below: f64,
    band: TickDensityBand,
    emit: EmitRule,
    label: LabelRule,
    pattern: TimeLabelPattern,
}

// Sorted by `below`; the last row catches every remaining span.
const TICK_DENSITY_TABLE: [TickDensity; 6] = [
    TickDensity {
        below: HOURLY_RESOLUTION_LIMIT,
        band: TickDensityBand::Intraday,
        emit: EmitRule::EveryStep,
        label: LabelRule::Always,
        pattern: TimeLabelPattern::HourMinute,
    },
    TickDensity {
        below: TEN_DAYS,
        band: TickDensityBand::UpToTenDays,
        emit: EmitRule::EveryStep,
        label: LabelRule::Always,
        pattern: TimeLabelPattern::MonthDay,
    },
    TickDensity {
        below: NINETY_DAYS,
        band: TickDensityBand::UpToNinetyDays,
        emit: EmitRule::EveryStep,
        label: LabelRule::EveryNthStep(5),
        pattern: TimeLabelPattern::MonthDay,
    },
    TickDensity {
        below: HALF_YEAR,
        band: TickDensityBand::UpToHalfYear,
        emit: EmitRule::FirstOrMultipleOfFiveDay,
        label: LabelRule::FirstOrFifteenthDay,
        pattern: TimeLabelPattern::MonthDay,
    },
    TickDensity {
        below: EIGHTEEN_MONTHS,
        band: TickDensityBand::UpToEighteenMonths,
        emit: EmitRule::FirstOrFifteenthDay,
        label: LabelRule::FirstDay,
        pattern: TimeLabelPattern::YearMonth,
    },
    TickDensity {
        below: f64::INFINITY,
        band: TickDensityBand::Multiyear,
        emit: EmitRule::FirstDay,
        label: LabelRule::FirstOfJanuary,
        pattern: TimeLabelPattern::YearMonth,
    },
];

fn density_for_delta(delta_seconds: f64) -> TickDensity {
    TICK_DENSITY_TABLE
        .iter()
        .copied()
        .find(|density| delta_seconds < density.below)
        .unwrap_or(TICK_DENSITY_TABLE[TICK_DENSITY_TABLE.len() - 1])
}

/// Time-axis tick generator that adapts density and label format to the span.
///
/// Ticks are snapped to calendar boundaries in the configured timezone, so
/// equal inputs always produce identical sequences regardless of host locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdaptiveTickGenerator {
    timezone: TimeAxisTimeZone,
}

impl AdaptiveTickGenerator {
    pub fn new(timezone: TimeAxisTimeZone) -> ChartResult<Self> {
        let timezone = validate_timezone(timezone)?;
        Ok(Self { timezone })
    }

    #[must_use]
    pub fn timezone(self) -> TimeAxisTimeZone {
        self.timezone
    }

    /// Produces ticks covering `[min_seconds, max_seconds]` (epoch seconds).
    ///
    /// The first tick is the snapped `min` and may precede it; no tick lies
    /// past the snapped `max`.
    pub fn generate(self, min_seconds: f64, max_seconds: f64) -> ChartResult<Vec<Tick>> {
        let (min_seconds, max_seconds) = validate_tick_range(min_seconds, max_seconds)?;
        let offset = self.timezone.fixed_offset()?;
        let delta = max_seconds - min_seconds;
        let resolution = TickResolution::for_delta(delta);
        let density = density_for_delta(delta);
        let step = resolution.step();

        let degenerate = || ChartError::DegenerateRange {
            min: min_seconds,
            max: max_seconds,
        };
        let mut cursor =
            snapped_local_instant(min_seconds, resolution, offset).ok_or_else(degenerate)?;
        let last = snapped_local_instant(max_seconds, resolution, offset).ok_or_else(degenerate)?;

        let mut ticks = Vec::new();
        let mut iteration: u64 = 0;
        loop {
            if density.emit.emits(&cursor) {
                let position = cursor.timestamp() as f64;
                let tick = if density.label.labels(&cursor, iteration) {
                    Tick::major(position, format_time_tick_label(&cursor, density.pattern))
                } else {
                    Tick::minor(position)
                };
                ticks.push(tick);
            }

            iteration += 1;
            cursor = cursor.checked_add_signed(step).ok_or_else(degenerate)?;
            if cursor > last {
                break;
            }
        }

        debug!(
            delta,
            ?resolution,
            band = ?density.band,
            steps = iteration,
            ticks = ticks.len(),
            "generated time-axis ticks"
        );
        Ok(ticks)
    }
}

fn snapped_local_instant(
    seconds: f64,
    resolution: TickResolution,
    offset: FixedOffset,
) -> Option<DateTime<FixedOffset>> {
    // Saturating cast; out-of-range values fail the calendar conversion below.
    let utc = DateTime::<Utc>::from_timestamp(seconds.trunc() as i64, 0)?;
    let local = utc.with_timezone(&offset);
    resolution
        .snap(local.naive_local())?
        .and_local_timezone(offset)
        .single()
}
