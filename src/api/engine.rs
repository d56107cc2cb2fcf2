use tracing::debug;

use crate::core::Chart;
use crate::diagnostics::Diagnostic;
use crate::error::ChartResult;
use crate::render::{FrameCounts, Renderer};

use super::{ChartRenderConfig, ChartScene, build_render_frame};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Outcome of one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub counts: FrameCounts,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds the frame for `chart` and hands it to `renderer`.
///
/// Each call recomputes layout from scratch; nothing is cached between calls.
pub fn render<R: Renderer + ?Sized>(
    chart: &Chart,
    config: &ChartRenderConfig,
    renderer: &mut R,
) -> ChartResult<RenderReport> {
    let ChartScene { frame, diagnostics } = build_render_frame(chart, config)?;
    renderer.render(&frame)?;
    let counts = frame.counts();
    debug!(
        rects = counts.rects,
        texts = counts.texts,
        lines = counts.lines,
        images = counts.images,
        diagnostics = diagnostics.len(),
        "chart rendered"
    );
    Ok(RenderReport {
        counts,
        diagnostics,
    })
}

/// Pairs a rendering backend with a render configuration.
///
/// Host applications that draw several charts with the same look keep one
/// engine around instead of threading the config through every call.
#[derive(Debug)]
pub struct TimelineEngine<R: Renderer> {
    renderer: R,
    config: ChartRenderConfig,
}

impl<R: Renderer> TimelineEngine<R> {
    pub fn new(renderer: R, config: ChartRenderConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &ChartRenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartRenderConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn build_render_frame(&self, chart: &Chart) -> ChartResult<ChartScene> {
        build_render_frame(chart, &self.config)
    }

    pub fn render(&mut self, chart: &Chart) -> ChartResult<RenderReport> {
        render(chart, &self.config, &mut self.renderer)
    }

    /// Renders the chart into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        chart: &Chart,
        context: &cairo::Context,
    ) -> ChartResult<RenderReport>
    where
        R: CairoContextRenderer,
    {
        let ChartScene { frame, diagnostics } = build_render_frame(chart, &self.config)?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        Ok(RenderReport {
            counts: frame.counts(),
            diagnostics,
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
