use chrono::{DateTime, FixedOffset};

/// Label layout chosen by the tick density band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeLabelPattern {
    /// `HH:MM`, for intraday spans.
    HourMinute,
    /// `MM/DD`, for spans of days to months.
    MonthDay,
    /// `YYYY/MM`, for spans beyond half a year.
    YearMonth,
}

impl TimeLabelPattern {
    #[must_use]
    pub fn strftime(self) -> &'static str {
        match self {
            Self::HourMinute => "%H:%M",
            Self::MonthDay => "%m/%d",
            Self::YearMonth => "%Y/%m",
        }
    }
}

pub(super) fn format_time_tick_label(
    local_dt: &DateTime<FixedOffset>,
    pattern: TimeLabelPattern,
) -> String {
    local_dt.format(pattern.strftime()).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::{TimeLabelPattern, format_time_tick_label};

    #[test]
    fn patterns_are_zero_padded() {
        let offset = FixedOffset::east_opt(0).expect("utc offset");
        let dt = offset
            .with_ymd_and_hms(2024, 3, 5, 7, 4, 0)
            .single()
            .expect("valid datetime");

        assert_eq!(format_time_tick_label(&dt, TimeLabelPattern::HourMinute), "07:04");
        assert_eq!(format_time_tick_label(&dt, TimeLabelPattern::MonthDay), "03/05");
        assert_eq!(format_time_tick_label(&dt, TimeLabelPattern::YearMonth), "2024/03");
    }
}
