use crate::core::Event;
use crate::error::{ChartError, ChartResult};

/// Linear mapping from chart time units to horizontal pixels along a bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    max_time: f64,
    bar_left_offset: f64,
    bar_length: f64,
}

impl TimeScale {
    pub fn new(max_time: f64, bar_left_offset: f64, bar_length: f64) -> ChartResult<Self> {
        if !max_time.is_finite() || max_time <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale max time must be finite and > 0".to_owned(),
            ));
        }
        if !bar_left_offset.is_finite() || !bar_length.is_finite() || bar_length < 0.0 {
            return Err(ChartError::InvalidData(
                "time scale pixel range must be finite with non-negative length".to_owned(),
            ));
        }

        Ok(Self {
            max_time,
            bar_left_offset,
            bar_length,
        })
    }

    /// Pixels per time unit.
    #[must_use]
    pub fn scale_factor(self) -> f64 {
        self.bar_length / self.max_time
    }

    #[must_use]
    pub fn max_time(self) -> f64 {
        self.max_time
    }

    #[must_use]
    pub fn time_to_x(self, time: f64) -> f64 {
        self.bar_left_offset + time * self.scale_factor()
    }

    #[must_use]
    pub fn span_to_width(self, duration: f64) -> f64 {
        duration * self.scale_factor()
    }

    #[must_use]
    pub fn bar_right_x(self) -> f64 {
        self.bar_left_offset + self.bar_length
    }

    /// Rectangle of `event` on a bar whose top edge is at `bar_y`.
    #[must_use]
    pub fn event_geometry(self, event: &Event, bar_y: f64, bar_height: f64) -> EventGeometry {
        EventGeometry {
            x: self.time_to_x(event.start_time()),
            y: bar_y,
            width: self.span_to_width(event.duration()),
            height: bar_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl EventGeometry {
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    /// Shrinks the rect so it does not extend past `max_x`. Negative widths
    /// from degenerate wrap pieces collapse to zero.
    #[must_use]
    pub fn clipped_to(self, max_x: f64) -> Self {
        let width = self.width.max(0.0);
        Self {
            width: (max_x - self.x).clamp(0.0, width),
            ..self
        }
    }
}
