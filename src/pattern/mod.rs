//! Juggling-pattern front end: derives chart data from a timing quintuple.

mod generator;
mod palette;
pub mod solver;

pub use generator::{DEFAULT_PATTERN_TITLE, PatternChart, ShannonPattern, generate_shannon_chart};
pub use palette::{ball_color, ball_palette_len};
pub use solver::{Solution, solve_balls, solve_dwell, solve_flight, solve_hands, solve_vacant};
