mod null_renderer;

pub use null_renderer::NullRenderer;

use crate::api::PreparedChart;
use crate::error::ChartResult;

/// Contract implemented by any chart rasterizer.
///
/// Backends receive a fully prepared, deterministic `PreparedChart` so
/// plotting code stays isolated from windowing and tick rules.
pub trait Renderer {
    fn render(&mut self, chart: &PreparedChart) -> ChartResult<()>;
}
