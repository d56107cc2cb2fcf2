mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{DrawCommand, FrameCounts, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, ImagePrimitive, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_backend::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
