//! Non-fatal findings reported alongside a primary result.
//!
//! Every diagnostic is also emitted as a `tracing` warning at the point where
//! it is raised, so hosts can either inspect the returned list or rely on
//! their subscriber.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Quantity solved from Shannon's juggling theorem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolvedQuantity {
    Hands,
    Balls,
}

impl fmt::Display for SolvedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hands => f.write_str("hands"),
            Self::Balls => f.write_str("balls"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// `(dwell + flight) * hands != (dwell + vacant) * balls`.
    InconsistentPattern { lhs: f64, rhs: f64 },
    /// A solved hand or ball count is not a whole number.
    NonIntegralSolution { quantity: SolvedQuantity, value: f64 },
    /// `interval_time` does not evenly divide `max_time`; ticks were truncated.
    IntervalNotDivisor { max_time: f64, interval_time: f64 },
    /// More regular ticks were requested than the bar has pixels.
    TickCountCapped { requested: f64, drawn: usize },
    /// An event still spans past the bar end after a single wrap.
    EventExceedsPeriod {
        group: usize,
        bar: usize,
        event: usize,
        duration: f64,
        max_time: f64,
    },
    /// An event starts at or after `max_time`; it is drawn at its start
    /// modulo `max_time`.
    EventStartsPastPeriod {
        group: usize,
        bar: usize,
        event: usize,
        start_time: f64,
        max_time: f64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentPattern { lhs, rhs } => write!(
                f,
                "inconsistent pattern: (dwell + flight) * hands = {lhs} but (dwell + vacant) * balls = {rhs}"
            ),
            Self::NonIntegralSolution { quantity, value } => {
                write!(f, "{quantity} solution {value} is not an integer")
            }
            Self::IntervalNotDivisor {
                max_time,
                interval_time,
            } => write!(
                f,
                "interval time {interval_time} does not evenly divide max time {max_time}"
            ),
            Self::TickCountCapped { requested, drawn } => write!(
                f,
                "interval asks for {requested} ticks; drew {drawn}, one per pixel"
            ),
            Self::EventExceedsPeriod {
                group,
                bar,
                event,
                duration,
                max_time,
            } => write!(
                f,
                "event {event} of bar {bar} in group {group} has duration {duration} longer than max time {max_time}"
            ),
            Self::EventStartsPastPeriod {
                group,
                bar,
                event,
                start_time,
                max_time,
            } => write!(
                f,
                "event {event} of bar {bar} in group {group} starts at {start_time}, past max time {max_time}"
            ),
        }
    }
}
