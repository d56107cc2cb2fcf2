use tracing::{debug, trace, warn};

use crate::core::{
    Bar, BarLayout, Chart, IntervalTicks, TimeScale, compute_canvas_size, compute_interval_ticks,
    correct_event_wrapping, layout_groups,
};
use crate::diagnostics::Diagnostic;
use crate::error::ChartResult;
use crate::render::{
    ImagePrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ChartRenderConfig;
use super::label_format::format_time_label;

/// Gap between a tick label's baseline and the top edge of its bar.
const TICK_LABEL_GAP_PX: f64 = 2.0;
const TICK_STROKE_WIDTH_PX: f64 = 1.0;
const EVENT_STROKE_WIDTH_PX: f64 = 1.0;

/// Materialized draw commands for one chart plus the warnings raised while
/// building them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub frame: RenderFrame,
    pub diagnostics: Vec<Diagnostic>,
}

/// Projects `chart` into an ordered frame of draw commands.
///
/// Emission order: title, then for every bar of every group its outline,
/// name label, interval ticks (when enabled), events in list order, and icon.
pub fn build_render_frame(chart: &Chart, config: &ChartRenderConfig) -> ChartResult<ChartScene> {
    config.validate()?;

    let metrics = config.layout_metrics();
    let canvas = compute_canvas_size(chart, &metrics);
    let scale = TimeScale::new(chart.max_time(), config.bar_left_offset, config.bar_length)?;
    debug!(
        chart = %chart.name(),
        width = canvas.width,
        height = canvas.height,
        scale_factor = scale.scale_factor(),
        "building chart frame"
    );

    let mut diagnostics = Vec::new();
    let ticks = if config.should_draw_intervals {
        let ticks = compute_interval_ticks(
            chart.max_time(),
            chart.interval_time(),
            config.bar_left_offset,
            config.bar_length,
        );
        diagnostics.extend(ticks.diagnostics(chart.max_time(), chart.interval_time()));
        Some(ticks)
    } else {
        None
    };

    let mut frame = RenderFrame::new(canvas);
    frame.push_text(TextPrimitive::new(
        chart.name(),
        0.0,
        config.title_font_size,
        config.title_font_size,
        config.outline_color,
        TextHAlign::Left,
    ));

    for group_layout in layout_groups(chart, &metrics) {
        let group = &chart.groups()[group_layout.group_index];
        trace!(
            group = group_layout.group_index,
            y_offset = group_layout.y_offset,
            "laying out group"
        );
        for bar_layout in &group_layout.bars {
            let bar = &group.bars()[bar_layout.bar_index];
            let mut context = BarContext {
                frame: &mut frame,
                diagnostics: &mut diagnostics,
                config,
                scale,
                group_index: group_layout.group_index,
            };
            context.push_bar(bar, bar_layout, ticks.as_ref());
        }
    }

    Ok(ChartScene { frame, diagnostics })
}

struct BarContext<'a> {
    frame: &'a mut RenderFrame,
    diagnostics: &'a mut Vec<Diagnostic>,
    config: &'a ChartRenderConfig,
    scale: TimeScale,
    group_index: usize,
}

impl BarContext<'_> {
    fn push_bar(&mut self, bar: &Bar, layout: &BarLayout, ticks: Option<&IntervalTicks>) {
        let config = self.config;
        let y = layout.y;
        let bar_id = format!("group{}bar{}", self.group_index, layout.bar_index);

        self.frame.push_rect(
            RectPrimitive::outline(
                config.bar_left_offset,
                y,
                config.bar_length,
                config.bar_height,
                config.outline_color,
            )
            .with_id(format!("{bar_id}outline")),
        );
        self.frame.push_text(TextPrimitive::new(
            bar.name(),
            0.0,
            y + config.bar_height / 2.0 + config.bar_font_size / 2.0,
            config.bar_font_size,
            config.outline_color,
            TextHAlign::Left,
        ));

        if let Some(ticks) = ticks {
            self.push_ticks(ticks, y);
        }

        self.push_events(bar, layout, &bar_id);

        if let Some(icon_link) = bar.icon_link().filter(|link| !link.is_empty()) {
            let side = config.bar_height;
            self.frame.push_image(ImagePrimitive::new(
                icon_link,
                config.bar_left_offset - config.icon_distance_from_bar - side,
                y,
                side,
                side,
            ));
        }
    }

    fn push_ticks(&mut self, ticks: &IntervalTicks, y: f64) {
        let config = self.config;
        for tick in ticks.iter() {
            self.frame.push_line(LinePrimitive::new(
                tick.x,
                y,
                tick.x,
                y + config.bar_height,
                TICK_STROKE_WIDTH_PX,
                config.interval_tick_color,
            ));
            if config.should_label_intervals {
                self.frame.push_text(TextPrimitive::new(
                    format_time_label(tick.time),
                    tick.x,
                    y - TICK_LABEL_GAP_PX,
                    config.interval_label_font_size,
                    config.interval_tick_color,
                    TextHAlign::Center,
                ));
            }
        }
    }

    fn push_events(&mut self, bar: &Bar, layout: &BarLayout, bar_id: &str) {
        let max_time = self.scale.max_time();
        for (event_index, event) in bar.events().iter().enumerate() {
            if event.starts_past(max_time) {
                let diagnostic = Diagnostic::EventStartsPastPeriod {
                    group: self.group_index,
                    bar: layout.bar_index,
                    event: event_index,
                    start_time: event.start_time(),
                    max_time,
                };
                warn!(%diagnostic, "event start folded into chart period");
                self.diagnostics.push(diagnostic);
            }
            if event.duration() > max_time {
                let diagnostic = Diagnostic::EventExceedsPeriod {
                    group: self.group_index,
                    bar: layout.bar_index,
                    event: event_index,
                    duration: event.duration(),
                    max_time,
                };
                warn!(%diagnostic, "event longer than chart period is clipped");
                self.diagnostics.push(diagnostic);
            }
        }

        // No overlap checks: later events paint over earlier ones.
        let corrected = correct_event_wrapping(bar.events(), max_time);
        for (index, event) in corrected.iter().enumerate() {
            let mut geometry = self
                .scale
                .event_geometry(event, layout.y, self.config.bar_height);
            if event.end_time() > max_time || geometry.width < 0.0 {
                geometry = geometry.clipped_to(self.scale.bar_right_x());
            }
            trace!(
                bar = %bar_id,
                event = index,
                x = geometry.x,
                width = geometry.width,
                "event rect"
            );
            self.frame.push_rect(
                RectPrimitive::new(
                    geometry.x,
                    geometry.y,
                    geometry.width,
                    geometry.height,
                    event.color(),
                )
                .with_border(EVENT_STROKE_WIDTH_PX, self.config.outline_color)
                .with_id(format!("{bar_id}event{index}")),
            );
        }
    }
}
