mod axis_config;
mod axis_label_format;
mod axis_ticks;
mod kline;
mod price_format;
mod validation;

pub use axis_config::{ChartPipelineConfig, TimeAxisTimeZone};
pub use axis_label_format::TimeLabelPattern;
pub use axis_ticks::{
    AdaptiveTickGenerator, HOURLY_RESOLUTION_LIMIT, TEN_MINUTE_RESOLUTION_LIMIT, TickDensityBand,
    TickResolution,
};
pub use kline::{DEFAULT_SPAN_MINUTES, DEFAULT_SYMBOL, KlineInterval, raw_points_from_klines};
pub use price_format::{DecimalPattern, PriceFormat};

use serde::Serialize;
use tracing::debug;

use crate::core::{RawPoint, SeriesPoint, Tick, TimeWindowFilter};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

/// Everything an external renderer needs to draw one price chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedChart {
    pub symbol: String,
    pub title: String,
    pub span_minutes: u32,
    pub points: Vec<SeriesPoint>,
    pub time_range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub price_format: PriceFormat,
}

impl PreparedChart {
    #[must_use]
    pub fn last_point(&self) -> Option<SeriesPoint> {
        self.points.last().copied()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart: {e}")))
    }
}

/// Windowing, tick generation and price formatting for one chart request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartPipeline {
    config: ChartPipelineConfig,
    ticks: AdaptiveTickGenerator,
}

impl ChartPipeline {
    pub fn new(config: ChartPipelineConfig) -> ChartResult<Self> {
        let config = validation::validate_pipeline_config(config)?;
        let ticks = AdaptiveTickGenerator::new(config.timezone)?;
        Ok(Self { config, ticks })
    }

    #[must_use]
    pub fn config(&self) -> ChartPipelineConfig {
        self.config
    }

    pub fn prepare(
        &self,
        symbol: &str,
        series: Vec<RawPoint>,
        span_minutes: u32,
    ) -> ChartResult<PreparedChart> {
        let points = TimeWindowFilter::filter(series, span_minutes)?;
        let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) else {
            return Err(ChartError::InvalidData(
                "time window removed every point".to_owned(),
            ));
        };

        let time_range = (first.time_seconds(), last.time_seconds());
        let ticks = self.ticks.generate(time_range.0, time_range.1)?;
        let price_format = PriceFormat::select(symbol, last.price);
        let title = format!("{symbol} {}", price_format.format(last.price));

        debug!(
            symbol,
            span_minutes,
            points = points.len(),
            ticks = ticks.len(),
            "prepared chart"
        );
        Ok(PreparedChart {
            symbol: symbol.to_owned(),
            title,
            span_minutes,
            points,
            time_range,
            ticks,
            price_format,
        })
    }

    /// Prepares the chart and hands it to `renderer`.
    pub fn render_with<R: Renderer>(
        &self,
        renderer: &mut R,
        symbol: &str,
        series: Vec<RawPoint>,
        span_minutes: u32,
    ) -> ChartResult<PreparedChart> {
        let chart = self.prepare(symbol, series, span_minutes)?;
        renderer.render(&chart)?;
        Ok(chart)
    }
}
