use tracing::{trace, warn};

use crate::core::{ChartNode, Event};
use crate::error::{ChartError, ChartResult};

/// One horizontal track, e.g. one ball or one hand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bar {
    name: String,
    icon_link: Option<String>,
    events: Vec<Event>,
}

impl Bar {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_link: None,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_icon_link(mut self, icon_link: impl Into<String>) -> Self {
        self.icon_link = Some(icon_link.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn icon_link(&self) -> Option<&str> {
        self.icon_link.as_deref()
    }

    pub fn set_icon_link(&mut self, icon_link: Option<String>) {
        self.icon_link = icon_link;
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
        trace!(bar = %self.name, count = self.events.len(), "append event");
    }

    /// Appends a node of unknown kind. Anything other than an event is
    /// rejected and the bar is left unchanged.
    pub fn append_node(&mut self, node: ChartNode) -> ChartResult<()> {
        match node {
            ChartNode::Event(event) => {
                self.add_event(event);
                Ok(())
            }
            other => {
                warn!(bar = %self.name, found = other.kind_name(), "rejected invalid event");
                Err(ChartError::InvalidAppend {
                    target: "bar",
                    found: other.kind_name(),
                })
            }
        }
    }

    /// Replaces the event list wholesale, typically with a wrap-corrected copy.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }
}
