mod engine;
mod label_format;
mod render_config;
mod render_frame_builder;

pub use engine::{RenderReport, TimelineEngine, render};
pub use render_config::ChartRenderConfig;
pub use render_frame_builder::{ChartScene, build_render_frame};
