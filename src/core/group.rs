use tracing::{trace, warn};

use crate::core::{Bar, ChartNode};
use crate::error::{ChartError, ChartResult};

/// Named block of bars rendered contiguously.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    name: String,
    bars: Vec<Bar>,
}

impl Group {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bars: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Mutable access for renaming bars or attaching icons after generation.
    #[must_use]
    pub fn bar_mut(&mut self, index: usize) -> Option<&mut Bar> {
        self.bars.get_mut(index)
    }

    pub fn add_bar(&mut self, bar: Bar) {
        trace!(group = %self.name, bar = %bar.name(), "append bar");
        self.bars.push(bar);
    }

    pub fn append_node(&mut self, node: ChartNode) -> ChartResult<()> {
        match node {
            ChartNode::Bar(bar) => {
                self.add_bar(bar);
                Ok(())
            }
            other => {
                warn!(group = %self.name, found = other.kind_name(), "rejected invalid bar");
                Err(ChartError::InvalidAppend {
                    target: "group",
                    found: other.kind_name(),
                })
            }
        }
    }
}
