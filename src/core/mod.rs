pub mod bar;
pub mod chart;
pub mod event;
pub mod group;
pub mod layout;
pub mod node;
pub mod scale;
pub mod ticks;
pub mod wrapping;

pub use bar::Bar;
pub use chart::Chart;
pub use event::Event;
pub use group::Group;
pub use layout::{
    BarLayout, CanvasSize, GroupLayout, LayoutMetrics, compute_canvas_size, layout_groups,
};
pub use node::ChartNode;
pub use scale::{EventGeometry, TimeScale};
pub use ticks::{IntervalTicks, Tick, compute_interval_ticks};
pub use wrapping::correct_event_wrapping;
