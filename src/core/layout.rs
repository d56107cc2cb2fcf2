use serde::{Deserialize, Serialize};

use crate::core::Chart;

/// Pixel size of the whole chart canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Spacing constants that drive vertical stacking and canvas width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub bar_length: f64,
    pub bar_height: f64,
    pub bar_vertical_space: f64,
    pub bar_left_offset: f64,
    pub chart_right_pad: f64,
    pub group_vertical_space: f64,
    pub title_y_space: f64,
}

impl LayoutMetrics {
    /// Vertical space one bar consumes, independent of its events.
    #[must_use]
    pub fn bar_pitch(&self) -> f64 {
        self.bar_height + self.bar_vertical_space
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub bar_index: usize,
    /// Offset from the top of the owning group.
    pub y_in_group: f64,
    /// Offset from the top of the canvas.
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupLayout {
    pub group_index: usize,
    pub y_offset: f64,
    pub bars: Vec<BarLayout>,
    /// Space consumed by the group including its trailing group gap.
    pub consumed_height: f64,
}

#[must_use]
pub fn compute_canvas_size(chart: &Chart, metrics: &LayoutMetrics) -> CanvasSize {
    let bars_height: f64 = chart
        .groups()
        .iter()
        .map(|group| group.bars().len() as f64 * metrics.bar_pitch())
        .sum();
    let height = metrics.title_y_space
        + bars_height
        + chart.groups().len() as f64 * metrics.group_vertical_space;
    let width = metrics.bar_left_offset + metrics.bar_length + metrics.chart_right_pad;
    CanvasSize::new(width, height)
}

/// Stacks groups top to bottom below the title, and bars top to bottom
/// within each group.
#[must_use]
pub fn layout_groups(chart: &Chart, metrics: &LayoutMetrics) -> Vec<GroupLayout> {
    let mut layouts = Vec::with_capacity(chart.groups().len());
    let mut consumed = metrics.title_y_space;

    for (group_index, group) in chart.groups().iter().enumerate() {
        let mut y_in_group = 0.0;
        let mut bars = Vec::with_capacity(group.bars().len());
        for bar_index in 0..group.bars().len() {
            bars.push(BarLayout {
                bar_index,
                y_in_group,
                y: consumed + y_in_group,
            });
            y_in_group += metrics.bar_pitch();
        }

        let consumed_height = y_in_group + metrics.group_vertical_space;
        layouts.push(GroupLayout {
            group_index,
            y_offset: consumed,
            bars,
            consumed_height,
        });
        consumed += consumed_height;
    }

    layouts
}
