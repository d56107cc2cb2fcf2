//! Closed-form solutions of Shannon's juggling theorem,
//! `(flight + dwell) * hands = (vacant + dwell) * balls`.

use tracing::warn;

use crate::diagnostics::{Diagnostic, SolvedQuantity};
use crate::error::{ChartError, ChartResult};

/// Tolerance used for "is this a whole number" checks on solved counts.
const INTEGRAL_TOLERANCE: f64 = 1e-9;

/// A solved count together with any warnings raised while solving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub value: f64,
    pub diagnostics: Vec<Diagnostic>,
}

impl Solution {
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub fn solve_hands(flight: f64, dwell: f64, vacant: f64, balls: f64) -> ChartResult<Solution> {
    ensure_finite(&[flight, dwell, vacant, balls])?;
    let value = (vacant + dwell) * balls / non_zero(flight + dwell, "flight + dwell")?;
    Ok(integral_solution(SolvedQuantity::Hands, value))
}

pub fn solve_balls(flight: f64, dwell: f64, vacant: f64, hands: f64) -> ChartResult<Solution> {
    ensure_finite(&[flight, dwell, vacant, hands])?;
    let value = (flight + dwell) * hands / non_zero(vacant + dwell, "vacant + dwell")?;
    Ok(integral_solution(SolvedQuantity::Balls, value))
}

pub fn solve_flight(dwell: f64, vacant: f64, balls: f64, hands: f64) -> ChartResult<f64> {
    ensure_finite(&[dwell, vacant, balls, hands])?;
    Ok(((vacant + dwell) * balls - dwell * hands) / non_zero(hands, "hands")?)
}

pub fn solve_vacant(flight: f64, dwell: f64, balls: f64, hands: f64) -> ChartResult<f64> {
    ensure_finite(&[flight, dwell, balls, hands])?;
    Ok(((flight + dwell) * hands - dwell * balls) / non_zero(balls, "balls")?)
}

/// Dwell is undetermined when `hands == balls`; that case is an error.
pub fn solve_dwell(flight: f64, vacant: f64, balls: f64, hands: f64) -> ChartResult<f64> {
    ensure_finite(&[flight, vacant, balls, hands])?;
    Ok((vacant * balls - flight * hands) / non_zero(hands - balls, "hands - balls")?)
}

fn integral_solution(quantity: SolvedQuantity, value: f64) -> Solution {
    let mut diagnostics = Vec::new();
    if (value - value.round()).abs() > INTEGRAL_TOLERANCE * value.abs().max(1.0) {
        let diagnostic = Diagnostic::NonIntegralSolution { quantity, value };
        warn!(%diagnostic, "non-integral theorem solution");
        diagnostics.push(diagnostic);
    }
    Solution { value, diagnostics }
}

fn ensure_finite(values: &[f64]) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(
            "juggling parameters must be finite".to_owned(),
        ))
    }
}

fn non_zero(value: f64, what: &str) -> ChartResult<f64> {
    if value == 0.0 {
        return Err(ChartError::InvalidData(format!(
            "`{what}` must be non-zero to solve the juggling theorem"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{solve_balls, solve_dwell, solve_flight, solve_hands, solve_vacant};
    use crate::diagnostics::{Diagnostic, SolvedQuantity};

    #[test]
    fn every_solver_recovers_the_recorded_cascade() {
        let (flight, dwell, vacant, balls, hands) = (385.0, 305.0, 155.0, 3.0, 2.0);

        let solved_hands = solve_hands(flight, dwell, vacant, balls).expect("hands");
        assert_eq!(solved_hands.value, hands);
        assert!(solved_hands.is_integral());

        let solved_balls = solve_balls(flight, dwell, vacant, hands).expect("balls");
        assert_eq!(solved_balls.value, balls);

        let solved_flight = solve_flight(dwell, vacant, balls, hands).expect("flight");
        assert!((solved_flight - flight).abs() < 1e-9);
        let solved_vacant = solve_vacant(flight, dwell, balls, hands).expect("vacant");
        assert!((solved_vacant - vacant).abs() < 1e-9);
        let solved_dwell = solve_dwell(flight, vacant, balls, hands).expect("dwell");
        assert!((solved_dwell - dwell).abs() < 1e-9);
    }

    #[test]
    fn fractional_ball_count_is_reported_but_returned() {
        let solved = solve_balls(400.0, 100.0, 100.0, 2.0).expect("balls");
        assert_eq!(solved.value, 5.0);

        let solved = solve_balls(400.0, 100.0, 300.0, 2.0).expect("balls");
        assert_eq!(solved.value, 2.5);
        assert_eq!(
            solved.diagnostics,
            vec![Diagnostic::NonIntegralSolution {
                quantity: SolvedQuantity::Balls,
                value: 2.5,
            }]
        );
    }

    #[test]
    fn dwell_is_undetermined_when_hands_equal_balls() {
        assert!(solve_dwell(300.0, 200.0, 2.0, 2.0).is_err());
    }
}
