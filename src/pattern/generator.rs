use tracing::{debug, warn};

use crate::core::{Bar, Chart, Event, Group, correct_event_wrapping};
use crate::diagnostics::Diagnostic;
use crate::error::{ChartError, ChartResult};

use super::ball_color;

pub const DEFAULT_PATTERN_TITLE: &str = "Shannon's Juggling Theorem";

/// Relative tolerance for the theorem identity check.
const IDENTITY_TOLERANCE: f64 = 1e-9;

/// Timing quintuple of a cyclic juggling pattern.
///
/// Times share one unit (usually milliseconds). `balls` and `hands` are
/// counts of tracks in the generated chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShannonPattern {
    pub flight: f64,
    pub dwell: f64,
    pub vacant: f64,
    pub balls: usize,
    pub hands: usize,
}

impl ShannonPattern {
    #[must_use]
    pub fn new(flight: f64, dwell: f64, vacant: f64, balls: usize, hands: usize) -> Self {
        Self {
            flight,
            dwell,
            vacant,
            balls,
            hands,
        }
    }

    /// Length of one full cycle: `(dwell + flight) * hands`.
    #[must_use]
    pub fn period(&self) -> f64 {
        (self.dwell + self.flight) * self.hands as f64
    }

    /// Both sides of `(dwell + flight) * hands == (dwell + vacant) * balls`.
    #[must_use]
    pub fn identity_sides(&self) -> (f64, f64) {
        (
            self.period(),
            (self.dwell + self.vacant) * self.balls as f64,
        )
    }

    #[must_use]
    pub fn satisfies_theorem(&self) -> bool {
        let (lhs, rhs) = self.identity_sides();
        (lhs - rhs).abs() <= IDENTITY_TOLERANCE * lhs.abs().max(rhs.abs()).max(1.0)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("flight", self.flight),
            ("dwell", self.dwell),
            ("vacant", self.vacant),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "pattern `{name}` must be finite and > 0"
                )));
            }
        }
        if self.balls == 0 || self.hands == 0 {
            return Err(ChartError::InvalidData(
                "pattern needs at least one ball and one hand".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Generated chart plus the warnings raised while generating it.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternChart {
    pub chart: Chart,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds a chart in which every ball cycles through every hand.
///
/// The chart has a "Balls" group (one bar per ball, one dwell per hand visit)
/// and a "Hands" group (one bar per hand, one dwell per ball caught). A
/// quintuple that breaks the theorem is reported, not rejected. Even ball
/// counts do not produce realistic patterns.
pub fn generate_shannon_chart(
    pattern: ShannonPattern,
    title: Option<&str>,
) -> ChartResult<PatternChart> {
    pattern.validate()?;

    let mut diagnostics = Vec::new();
    if !pattern.satisfies_theorem() {
        let (lhs, rhs) = pattern.identity_sides();
        let diagnostic = Diagnostic::InconsistentPattern { lhs, rhs };
        warn!(
            %diagnostic,
            flight = pattern.flight,
            dwell = pattern.dwell,
            vacant = pattern.vacant,
            balls = pattern.balls,
            hands = pattern.hands,
            "invalid juggling quintuple"
        );
        diagnostics.push(diagnostic);
    }

    let max_time = pattern.period();
    let mut chart = Chart::new(title.unwrap_or(DEFAULT_PATTERN_TITLE), max_time)?;

    let mut ball_group = Group::new("Balls");
    for ball in 0..pattern.balls {
        let ball_offset = ball as f64 * (pattern.dwell + pattern.vacant);
        let events = (0..pattern.hands)
            .map(|hand| {
                let start = (ball_offset + hand as f64 * (pattern.flight + pattern.dwell))
                    % max_time;
                Event::new(start, pattern.dwell, ball_color(ball))
            })
            .collect::<ChartResult<Vec<_>>>()?;
        ball_group.add_bar(wrapped_bar(format!("Ball {ball}"), &events, max_time));
    }
    chart.add_group(ball_group);

    let mut hand_group = Group::new("Hands");
    for hand in 0..pattern.hands {
        let hand_offset = hand as f64 * (pattern.dwell + pattern.flight);
        let events = (0..pattern.balls)
            .map(|ball| {
                let start = (hand_offset + ball as f64 * (pattern.vacant + pattern.dwell))
                    % max_time;
                Event::new(start, pattern.dwell, ball_color(ball))
            })
            .collect::<ChartResult<Vec<_>>>()?;
        hand_group.add_bar(wrapped_bar(format!("Hand {hand}"), &events, max_time));
    }
    chart.add_group(hand_group);

    debug!(
        max_time,
        balls = pattern.balls,
        hands = pattern.hands,
        "generated shannon chart"
    );
    Ok(PatternChart { chart, diagnostics })
}

fn wrapped_bar(name: String, events: &[Event], max_time: f64) -> Bar {
    let mut bar = Bar::new(name);
    bar.set_events(correct_event_wrapping(events, max_time));
    bar
}
