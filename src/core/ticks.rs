use tracing::warn;

use crate::diagnostics::Diagnostic;

/// Relative slack used when deciding whether an interval divides the period.
const DIVISOR_TOLERANCE: f64 = 1e-9;

/// Minimum horizontal distance between two regular ticks.
const MIN_TICK_SPACING_PX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub x: f64,
    pub time: f64,
}

/// Evenly spaced interval markers across one bar plus the closing tick at
/// `max_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTicks {
    pub regular: Vec<Tick>,
    pub closing: Tick,
    pub evenly_divided: bool,
    /// Regular tick count the interval asked for, when it had to be reduced
    /// to keep ticks at least one pixel apart.
    pub capped_from: Option<f64>,
}

impl IntervalTicks {
    /// Regular ticks followed by the closing tick.
    pub fn iter(&self) -> impl Iterator<Item = &Tick> {
        self.regular.iter().chain(std::iter::once(&self.closing))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regular.len() + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Warnings to surface for this tick set: a non-dividing interval and a
    /// reduced tick count.
    #[must_use]
    pub fn diagnostics(&self, max_time: f64, interval_time: f64) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if !self.evenly_divided {
            diagnostics.push(Diagnostic::IntervalNotDivisor {
                max_time,
                interval_time,
            });
        }
        if let Some(requested) = self.capped_from {
            diagnostics.push(Diagnostic::TickCountCapped {
                requested,
                drawn: self.regular.len(),
            });
        }
        diagnostics
    }
}

/// Computes tick positions for a bar spanning `bar_length` pixels.
///
/// The regular count is `floor(max_time / interval_time)`. A non-dividing
/// interval is tolerated: the count is truncated, spacing is stretched to
/// fill the bar, and the closing tick is still placed at the right edge.
/// The regular count never exceeds one tick per pixel of `bar_length`.
#[must_use]
pub fn compute_interval_ticks(
    max_time: f64,
    interval_time: f64,
    bar_left_offset: f64,
    bar_length: f64,
) -> IntervalTicks {
    let ratio = max_time / interval_time;
    let (requested, evenly_divided) = if ratio.is_finite() && ratio > 0.0 {
        let nearest = ratio.round();
        if nearest >= 1.0 && (ratio - nearest).abs() <= DIVISOR_TOLERANCE * ratio.max(1.0) {
            (nearest, true)
        } else {
            (ratio.floor(), false)
        }
    } else {
        (0.0, false)
    };

    let max_ticks = if bar_length.is_finite() {
        (bar_length / MIN_TICK_SPACING_PX).floor().max(1.0)
    } else {
        1.0
    };
    let capped_from = (requested > max_ticks).then_some(requested);
    let num_ticks = requested.min(max_ticks) as usize;

    let regular: Vec<Tick> = if num_ticks > 0 {
        let spacing_px = bar_length / num_ticks as f64;
        let spacing_time = max_time / num_ticks as f64;
        (0..num_ticks)
            .map(|k| Tick {
                x: bar_left_offset + k as f64 * spacing_px,
                time: k as f64 * spacing_time,
            })
            .collect()
    } else {
        Vec::new()
    };

    if !evenly_divided {
        warn!(
            max_time,
            interval_time,
            regular_ticks = num_ticks,
            "interval time does not evenly divide max time"
        );
    }
    if let Some(requested) = capped_from {
        warn!(
            max_time,
            interval_time,
            requested,
            drawn = num_ticks,
            "interval ticks capped at one per pixel"
        );
    }

    IntervalTicks {
        regular,
        closing: Tick {
            x: bar_left_offset + bar_length,
            time: max_time,
        },
        evenly_divided,
        capped_from,
    }
}
