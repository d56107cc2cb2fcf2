use serde::{Deserialize, Serialize};

use crate::core::{
    CanvasSize, Chart, GroupLayout, LayoutMetrics, compute_canvas_size, layout_groups,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual constants for one render call.
///
/// Every field has a default, so partial JSON documents deserialize cleanly.
/// The engine only reads this value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRenderConfig {
    #[serde(default = "default_bar_length")]
    pub bar_length: f64,
    #[serde(default = "default_bar_height")]
    pub bar_height: f64,
    #[serde(default = "default_bar_vertical_space")]
    pub bar_vertical_space: f64,
    #[serde(default = "default_bar_left_offset")]
    pub bar_left_offset: f64,
    #[serde(default = "default_chart_right_pad")]
    pub chart_right_pad: f64,
    #[serde(default = "default_group_vertical_space")]
    pub group_vertical_space: f64,
    #[serde(default = "default_title_y_space")]
    pub title_y_space: f64,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f64,
    #[serde(default = "default_bar_font_size")]
    pub bar_font_size: f64,
    #[serde(default = "default_outline_color")]
    pub outline_color: Color,
    #[serde(default)]
    pub should_draw_intervals: bool,
    #[serde(default = "default_should_label_intervals")]
    pub should_label_intervals: bool,
    #[serde(default = "default_interval_label_font_size")]
    pub interval_label_font_size: f64,
    #[serde(default = "default_interval_tick_color")]
    pub interval_tick_color: Color,
    #[serde(default = "default_icon_distance_from_bar")]
    pub icon_distance_from_bar: f64,
}

impl Default for ChartRenderConfig {
    fn default() -> Self {
        Self {
            bar_length: default_bar_length(),
            bar_height: default_bar_height(),
            bar_vertical_space: default_bar_vertical_space(),
            bar_left_offset: default_bar_left_offset(),
            chart_right_pad: default_chart_right_pad(),
            group_vertical_space: default_group_vertical_space(),
            title_y_space: default_title_y_space(),
            title_font_size: default_title_font_size(),
            bar_font_size: default_bar_font_size(),
            outline_color: default_outline_color(),
            should_draw_intervals: false,
            should_label_intervals: default_should_label_intervals(),
            interval_label_font_size: default_interval_label_font_size(),
            interval_tick_color: default_interval_tick_color(),
            icon_distance_from_bar: default_icon_distance_from_bar(),
        }
    }
}

impl ChartRenderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets bar length in pixels; this is the width that `max_time` maps to.
    #[must_use]
    pub fn with_bar_length(mut self, bar_length: f64) -> Self {
        self.bar_length = bar_length;
        self
    }

    #[must_use]
    pub fn with_bar_height(mut self, bar_height: f64) -> Self {
        self.bar_height = bar_height;
        self
    }

    #[must_use]
    pub fn with_bar_vertical_space(mut self, bar_vertical_space: f64) -> Self {
        self.bar_vertical_space = bar_vertical_space;
        self
    }

    /// Sets the horizontal room left of the bars (names and icons).
    #[must_use]
    pub fn with_bar_left_offset(mut self, bar_left_offset: f64) -> Self {
        self.bar_left_offset = bar_left_offset;
        self
    }

    #[must_use]
    pub fn with_chart_right_pad(mut self, chart_right_pad: f64) -> Self {
        self.chart_right_pad = chart_right_pad;
        self
    }

    #[must_use]
    pub fn with_group_vertical_space(mut self, group_vertical_space: f64) -> Self {
        self.group_vertical_space = group_vertical_space;
        self
    }

    #[must_use]
    pub fn with_title_y_space(mut self, title_y_space: f64) -> Self {
        self.title_y_space = title_y_space;
        self
    }

    #[must_use]
    pub fn with_font_sizes(mut self, title_font_size: f64, bar_font_size: f64) -> Self {
        self.title_font_size = title_font_size;
        self.bar_font_size = bar_font_size;
        self
    }

    #[must_use]
    pub fn with_outline_color(mut self, outline_color: Color) -> Self {
        self.outline_color = outline_color;
        self
    }

    /// Enables or disables interval ticks and their labels.
    #[must_use]
    pub fn with_intervals(mut self, draw: bool, label: bool) -> Self {
        self.should_draw_intervals = draw;
        self.should_label_intervals = label;
        self
    }

    #[must_use]
    pub fn with_interval_style(mut self, tick_color: Color, label_font_size: f64) -> Self {
        self.interval_tick_color = tick_color;
        self.interval_label_font_size = label_font_size;
        self
    }

    #[must_use]
    pub fn with_icon_distance_from_bar(mut self, icon_distance_from_bar: f64) -> Self {
        self.icon_distance_from_bar = icon_distance_from_bar;
        self
    }

    #[must_use]
    pub fn layout_metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            bar_length: self.bar_length,
            bar_height: self.bar_height,
            bar_vertical_space: self.bar_vertical_space,
            bar_left_offset: self.bar_left_offset,
            chart_right_pad: self.chart_right_pad,
            group_vertical_space: self.group_vertical_space,
            title_y_space: self.title_y_space,
        }
    }

    /// Canvas size `chart` needs under this configuration.
    #[must_use]
    pub fn canvas_size(&self, chart: &Chart) -> CanvasSize {
        compute_canvas_size(chart, &self.layout_metrics())
    }

    #[must_use]
    pub fn layout_groups(&self, chart: &Chart) -> Vec<GroupLayout> {
        layout_groups(chart, &self.layout_metrics())
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("bar_length", self.bar_length),
            ("bar_height", self.bar_height),
            ("title_font_size", self.title_font_size),
            ("bar_font_size", self.bar_font_size),
            ("interval_label_font_size", self.interval_label_font_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("bar_vertical_space", self.bar_vertical_space),
            ("bar_left_offset", self.bar_left_offset),
            ("chart_right_pad", self.chart_right_pad),
            ("group_vertical_space", self.group_vertical_space),
            ("title_y_space", self.title_y_space),
            ("icon_distance_from_bar", self.icon_distance_from_bar),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }

        for (name, color) in [
            ("outline_color", self.outline_color),
            ("interval_tick_color", self.interval_tick_color),
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("`{name}`: {err}")))?;
        }

        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse render config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize render config: {e}"))
        })
    }
}

fn default_bar_length() -> f64 {
    1000.0
}

fn default_bar_height() -> f64 {
    30.0
}

fn default_bar_vertical_space() -> f64 {
    10.0
}

fn default_bar_left_offset() -> f64 {
    100.0
}

fn default_chart_right_pad() -> f64 {
    10.0
}

fn default_group_vertical_space() -> f64 {
    20.0
}

fn default_title_y_space() -> f64 {
    30.0
}

fn default_title_font_size() -> f64 {
    24.0
}

fn default_bar_font_size() -> f64 {
    18.0
}

fn default_outline_color() -> Color {
    Color::BLACK
}

fn default_should_label_intervals() -> bool {
    true
}

fn default_interval_label_font_size() -> f64 {
    10.0
}

fn default_interval_tick_color() -> Color {
    Color::from_rgb8(128, 128, 128)
}

fn default_icon_distance_from_bar() -> f64 {
    5.0
}
