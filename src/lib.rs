//! dwell-chart: timeline charts of cyclic dwell events.
//!
//! Charts are built from groups of bars carrying colored events over one
//! cyclic period. The `api` layer lays them out and projects them into a
//! backend-agnostic `RenderFrame`; `render` backends turn that frame into
//! pixels or SVG. The `pattern` module generates charts from juggling
//! timing parameters.

pub mod api;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod pattern;
pub mod render;
pub mod telemetry;

pub use api::{ChartRenderConfig, RenderReport, TimelineEngine, render};
pub use diagnostics::Diagnostic;
pub use error::{ChartError, ChartResult};
