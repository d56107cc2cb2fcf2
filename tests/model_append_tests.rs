use dwell_chart::ChartError;
use dwell_chart::core::{Bar, Chart, ChartNode, Event, Group};
use dwell_chart::render::Color;

fn red() -> Color {
    Color::named("red").expect("red")
}

#[test]
fn typed_appends_preserve_insertion_order() {
    let mut bar = Bar::new("Red Ball");
    bar.add_event(Event::new(0.0, 100.0, red()).expect("event"));
    bar.add_event(Event::new(200.0, 100.0, red()).expect("event"));

    let mut group = Group::new("Balls");
    group.add_bar(bar);
    group.add_bar(Bar::new("Green Ball"));

    let mut chart = Chart::new("Hypothetical '31' Pattern Timeline", 600.0).expect("chart");
    chart.add_group(group);

    let balls = &chart.groups()[0];
    assert_eq!(balls.name(), "Balls");
    assert_eq!(balls.bars()[0].name(), "Red Ball");
    assert_eq!(balls.bars()[1].name(), "Green Ball");
    let starts: Vec<f64> = balls.bars()[0]
        .events()
        .iter()
        .map(Event::start_time)
        .collect();
    assert_eq!(starts, vec![0.0, 200.0]);
}

#[test]
fn bar_rejects_non_event_node() {
    let mut bar = Bar::new("Bar1");
    bar.append_node(ChartNode::from(Event::new(0.0, 100.0, red()).expect("event")))
        .expect("event is accepted");

    let err = bar
        .append_node(ChartNode::from(Bar::new("nested")))
        .expect_err("bar inside bar must fail");
    assert!(matches!(
        err,
        ChartError::InvalidAppend {
            target: "bar",
            found: "bar"
        }
    ));
    assert_eq!(bar.events().len(), 1);
}

#[test]
fn group_rejects_non_bar_node() {
    let mut group = Group::new("TestGroup1");
    let err = group
        .append_node(ChartNode::from(Event::new(0.0, 1.0, red()).expect("event")))
        .expect_err("event inside group must fail");
    assert!(matches!(err, ChartError::InvalidAppend { target: "group", .. }));
    assert!(group.bars().is_empty());

    group
        .append_node(ChartNode::Bar(Bar::new("Bar1")))
        .expect("bar is accepted");
    assert_eq!(group.bars().len(), 1);
}

#[test]
fn chart_rejects_non_group_node() {
    let mut chart = Chart::new("TestChart", 1000.0).expect("chart");
    let err = chart
        .append_node(ChartNode::Bar(Bar::new("loose bar")))
        .expect_err("bar directly in chart must fail");
    assert!(matches!(
        err,
        ChartError::InvalidAppend {
            target: "chart",
            found: "bar"
        }
    ));
    assert!(chart.groups().is_empty());

    chart
        .append_node(ChartNode::Group(Group::new("TestGroup1")))
        .expect("group is accepted");
    assert_eq!(chart.groups().len(), 1);
}

#[test]
fn names_and_icons_can_be_overwritten_after_construction() {
    let mut chart = Chart::new("Shannon's Juggling Theorem", 1380.0).expect("chart");
    let mut group = Group::new("Balls");
    group.add_bar(Bar::new("Ball 0"));
    chart.add_group(group);

    chart.set_name("3 Ball Cascade");
    let bar = chart
        .group_mut(0)
        .and_then(|group| group.bar_mut(0))
        .expect("bar exists");
    bar.set_name("Red Ball");
    bar.set_icon_link(Some("icons/redBall.svg".to_owned()));

    assert_eq!(chart.name(), "3 Ball Cascade");
    let bar = &chart.groups()[0].bars()[0];
    assert_eq!(bar.name(), "Red Ball");
    assert_eq!(bar.icon_link(), Some("icons/redBall.svg"));
}

#[test]
fn invalid_events_are_rejected_at_construction() {
    let err = Event::new(10.0, -5.0, red()).expect_err("negative duration");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
