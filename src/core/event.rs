use smallvec::{SmallVec, smallvec};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One colored interval on a bar's timeline.
///
/// Events are immutable; wrapping produces new events instead of editing the
/// original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    start_time: f64,
    duration: f64,
    color: Color,
}

impl Event {
    pub fn new(start_time: f64, duration: f64, color: Color) -> ChartResult<Self> {
        if !start_time.is_finite() || start_time < 0.0 {
            return Err(ChartError::InvalidData(
                "event start time must be finite and >= 0".to_owned(),
            ));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ChartError::InvalidData(
                "event duration must be finite and > 0".to_owned(),
            ));
        }
        color.validate()?;

        Ok(Self {
            start_time,
            duration,
            color,
        })
    }

    /// Piece of a split event. Skips validation so degenerate zero-length
    /// pieces survive.
    pub(crate) const fn fragment(start_time: f64, duration: f64, color: Color) -> Self {
        Self {
            start_time,
            duration,
            color,
        }
    }

    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Amount by which this event runs past `max_time`, or `None` if it fits.
    #[must_use]
    pub fn overshoot(&self, max_time: f64) -> Option<f64> {
        let end = self.end_time();
        (end > max_time).then(|| end - max_time)
    }

    /// Splits an event that crosses `max_time` into a tail piece and a piece
    /// wrapped to the start of the period. Fitting events come back unchanged.
    ///
    /// An event starting at or after `max_time` is first moved to its start
    /// modulo `max_time`.
    #[must_use]
    pub fn split_at_period(self, max_time: f64) -> SmallVec<[Event; 2]> {
        let event = if self.starts_past(max_time) {
            Event::fragment(self.start_time % max_time, self.duration, self.color)
        } else {
            self
        };
        match event.overshoot(max_time) {
            Some(overshoot) => smallvec![
                Event::fragment(event.start_time, event.duration - overshoot, event.color),
                Event::fragment(0.0, overshoot, event.color),
            ],
            None => smallvec![event],
        }
    }

    /// Whether the event starts at or after the end of a period of `max_time`.
    #[must_use]
    pub fn starts_past(&self, max_time: f64) -> bool {
        max_time > 0.0 && self.start_time >= max_time
    }
}
