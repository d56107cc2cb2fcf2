use crate::core::{Bar, Event, Group};

/// Any chart element that can be appended to a parent collection.
///
/// Used at dynamic boundaries where the element kind is only known at
/// runtime; each parent accepts exactly one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartNode {
    Event(Event),
    Bar(Bar),
    Group(Group),
}

impl ChartNode {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Event(_) => "event",
            Self::Bar(_) => "bar",
            Self::Group(_) => "group",
        }
    }
}

impl From<Event> for ChartNode {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

impl From<Bar> for ChartNode {
    fn from(bar: Bar) -> Self {
        Self::Bar(bar)
    }
}

impl From<Group> for ChartNode {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}
