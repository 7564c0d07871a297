//! coinchart: chart-data preparation for a price chart bot.
//!
//! The crate windows a candle series to a trailing span, builds adaptive
//! time-axis ticks, and picks a price display format. Rasterization, network
//! transport and message signing stay with the host application.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartPipeline, ChartPipelineConfig, PreparedChart};
pub use error::{ChartError, ChartResult};
