use tracing::{trace, warn};

use crate::core::{ChartNode, Group};
use crate::error::{ChartError, ChartResult};

/// Top-level timeline spanning one cyclic period of `max_time` units.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    name: String,
    max_time: f64,
    interval_time: f64,
    groups: Vec<Group>,
}

impl Chart {
    /// Creates an empty chart. `interval_time` starts equal to `max_time`.
    pub fn new(name: impl Into<String>, max_time: f64) -> ChartResult<Self> {
        validate_positive_time("chart max time", max_time)?;
        Ok(Self {
            name: name.into(),
            max_time,
            interval_time: max_time,
            groups: Vec::new(),
        })
    }

    /// Sets the spacing of interval ticks.
    pub fn with_interval_time(mut self, interval_time: f64) -> ChartResult<Self> {
        self.set_interval_time(interval_time)?;
        Ok(self)
    }

    pub fn set_interval_time(&mut self, interval_time: f64) -> ChartResult<()> {
        validate_positive_time("chart interval time", interval_time)?;
        self.interval_time = interval_time;
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    #[must_use]
    pub fn interval_time(&self) -> f64 {
        self.interval_time
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn group_mut(&mut self, index: usize) -> Option<&mut Group> {
        self.groups.get_mut(index)
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.groups.iter().map(|group| group.bars().len()).sum()
    }

    pub fn add_group(&mut self, group: Group) {
        trace!(chart = %self.name, group = %group.name(), "append group");
        self.groups.push(group);
    }

    pub fn append_node(&mut self, node: ChartNode) -> ChartResult<()> {
        match node {
            ChartNode::Group(group) => {
                self.add_group(group);
                Ok(())
            }
            other => {
                warn!(chart = %self.name, found = other.kind_name(), "rejected invalid group");
                Err(ChartError::InvalidAppend {
                    target: "chart",
                    found: other.kind_name(),
                })
            }
        }
    }
}

fn validate_positive_time(what: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Chart;
    use crate::core::{Bar, Group};

    #[test]
    fn interval_defaults_to_max_time() {
        let chart = Chart::new("defaults", 600.0).expect("valid chart");
        assert_eq!(chart.interval_time(), 600.0);
    }

    #[test]
    fn non_positive_times_are_rejected() {
        assert!(Chart::new("zero", 0.0).is_err());
        assert!(Chart::new("inf", f64::INFINITY).is_err());
        let chart = Chart::new("ok", 100.0).expect("valid chart");
        assert!(chart.with_interval_time(-5.0).is_err());
    }

    #[test]
    fn bar_count_sums_all_groups() {
        let mut chart = Chart::new("count", 100.0).expect("valid chart");
        let mut balls = Group::new("Balls");
        balls.add_bar(Bar::new("Ball 0"));
        balls.add_bar(Bar::new("Ball 1"));
        let mut hands = Group::new("Hands");
        hands.add_bar(Bar::new("Hand 0"));
        chart.add_group(balls);
        chart.add_group(hands);
        assert_eq!(chart.bar_count(), 3);
    }
}
