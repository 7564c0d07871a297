use crate::api::PreparedChart;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

/// No-op renderer used by tests and headless pipeline usage.
///
/// It still checks the prepared chart so tests catch inconsistent output
/// before a real plotting backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_point_count: usize,
    pub last_tick_count: usize,
    pub last_title: String,
}

impl Renderer for NullRenderer {
    fn render(&mut self, chart: &PreparedChart) -> ChartResult<()> {
        if chart.points.is_empty() {
            return Err(ChartError::InvalidData("chart has no points".to_owned()));
        }
        if chart
            .ticks
            .windows(2)
            .any(|pair| pair[1].position_seconds < pair[0].position_seconds)
        {
            return Err(ChartError::InvalidData(
                "tick positions must be non-decreasing".to_owned(),
            ));
        }

        self.last_point_count = chart.points.len();
        self.last_tick_count = chart.ticks.len();
        self.last_title.clone_from(&chart.title);
        Ok(())
    }
}
