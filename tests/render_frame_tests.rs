use dwell_chart::api::{ChartRenderConfig, TimelineEngine, build_render_frame};
use dwell_chart::core::{Bar, Chart, Event, Group};
use dwell_chart::diagnostics::Diagnostic;
use dwell_chart::render::{Color, DrawCommand, NullRenderer, TextHAlign};
use dwell_chart::{ChartError, render};

fn color(name: &str) -> Color {
    Color::named(name).expect("color")
}

fn two_bar_chart() -> Chart {
    let mut bar1 = Bar::new("Bar1");
    bar1.add_event(Event::new(0.0, 100.0, color("red")).expect("event"));
    let mut bar2 = Bar::new("Bar2");
    bar2.add_event(Event::new(100.0, 200.0, color("blue")).expect("event"));

    let mut group = Group::new("TestGroup1");
    group.add_bar(bar1);
    group.add_bar(bar2);
    let mut chart = Chart::new("TestChart", 1000.0).expect("chart");
    chart.add_group(group);
    chart
}

#[test]
fn two_bar_chart_matches_expected_geometry() {
    let config = ChartRenderConfig::default();
    let scene = build_render_frame(&two_bar_chart(), &config).expect("frame");
    scene.frame.validate().expect("valid frame");
    assert!(scene.diagnostics.is_empty());

    let expected_height = config.title_y_space
        + 2.0 * (config.bar_height + config.bar_vertical_space)
        + config.group_vertical_space;
    assert_eq!(scene.frame.canvas.height, expected_height);
    assert_eq!(scene.frame.canvas.width, 1110.0);

    let rects: Vec<_> = scene.frame.rects().collect();
    assert_eq!(rects.len(), 4);

    let first_event = rects[1];
    assert_eq!(first_event.id.as_deref(), Some("group0bar0event0"));
    assert_eq!(first_event.x, config.bar_left_offset);
    assert_eq!(first_event.width, 100.0 * (config.bar_length / 1000.0));
    assert_eq!(first_event.y, config.title_y_space);
    assert_eq!(first_event.fill_color, Some(color("red")));

    let second_event = rects[3];
    assert_eq!(second_event.x, config.bar_left_offset + 100.0);
    assert_eq!(second_event.width, 200.0);
    assert_eq!(
        second_event.y,
        config.title_y_space + config.bar_height + config.bar_vertical_space
    );
}

#[test]
fn commands_follow_title_outline_label_ticks_events_icon_order() {
    let mut bar = Bar::new("Red Ball").with_icon_link("icons/redBall.svg");
    bar.add_event(Event::new(0.0, 100.0, color("red")).expect("event"));
    let mut group = Group::new("Balls");
    group.add_bar(bar);
    let mut chart = Chart::new("Ordered", 200.0)
        .expect("chart")
        .with_interval_time(100.0)
        .expect("interval");
    chart.add_group(group);

    let config = ChartRenderConfig::default().with_intervals(true, true);
    let scene = build_render_frame(&chart, &config).expect("frame");

    let kinds: Vec<&str> = scene
        .frame
        .commands
        .iter()
        .map(|command| match command {
            DrawCommand::Rect(rect) if rect.fill_color.is_none() => "outline",
            DrawCommand::Rect(_) => "event",
            DrawCommand::Text(_) => "text",
            DrawCommand::Line(_) => "tick",
            DrawCommand::Image(_) => "icon",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "text", "outline", "text", "tick", "text", "tick", "text", "tick", "text", "event",
            "icon"
        ]
    );

    let title = scene.frame.texts().next().expect("title");
    assert_eq!(title.text, "Ordered");
    assert_eq!(title.y, config.title_font_size);
    assert_eq!(title.h_align, TextHAlign::Left);

    let icon = scene.frame.images().next().expect("icon");
    assert_eq!(icon.href, "icons/redBall.svg");
    assert_eq!(
        icon.x,
        config.bar_left_offset - config.icon_distance_from_bar - config.bar_height
    );
    assert_eq!(icon.width, config.bar_height);
}

#[test]
fn tick_scenario_emits_ten_regular_ticks_and_closing_label() {
    let mut group = Group::new("g");
    group.add_bar(Bar::new("only"));
    let mut chart = Chart::new("ticks", 1000.0)
        .expect("chart")
        .with_interval_time(100.0)
        .expect("interval");
    chart.add_group(group);

    let config = ChartRenderConfig::default().with_intervals(true, true);
    let scene = build_render_frame(&chart, &config).expect("frame");
    assert!(scene.diagnostics.is_empty());

    let xs: Vec<f64> = scene.frame.lines().map(|line| line.x1).collect();
    assert_eq!(xs.len(), 11);
    for (k, x) in xs.iter().take(10).enumerate() {
        let expected = config.bar_left_offset + k as f64 * (config.bar_length / 10.0);
        assert!((x - expected).abs() < 1e-9);
    }
    assert_eq!(xs[10], config.bar_left_offset + config.bar_length);

    let labels: Vec<&str> = scene
        .frame
        .texts()
        .filter(|text| text.h_align == TextHAlign::Center)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels.first(), Some(&"0"));
    assert_eq!(labels.last(), Some(&"1000"));
    assert_eq!(labels.len(), 11);
}

#[test]
fn unlabeled_ticks_emit_lines_only() {
    let mut chart = two_bar_chart();
    chart.set_interval_time(250.0).expect("interval");
    let config = ChartRenderConfig::default().with_intervals(true, false);
    let scene = build_render_frame(&chart, &config).expect("frame");

    assert_eq!(scene.frame.lines().count(), 2 * 5);
    // Title plus two bar names.
    assert_eq!(scene.frame.texts().count(), 3);
}

#[test]
fn ticks_are_skipped_unless_enabled() {
    let scene = build_render_frame(&two_bar_chart(), &ChartRenderConfig::default()).expect("frame");
    assert_eq!(scene.frame.lines().count(), 0);
}

#[test]
fn non_dividing_interval_is_reported_once_and_still_drawn() {
    let mut chart = two_bar_chart();
    chart.set_interval_time(300.0).expect("interval");
    let config = ChartRenderConfig::default().with_intervals(true, true);
    let scene = build_render_frame(&chart, &config).expect("frame");

    assert_eq!(
        scene.diagnostics,
        vec![Diagnostic::IntervalNotDivisor {
            max_time: 1000.0,
            interval_time: 300.0,
        }]
    );
    // Three truncated regular ticks plus the closing tick, on each bar.
    assert_eq!(scene.frame.lines().count(), 2 * 4);
}

#[test]
fn overlapping_events_keep_list_order() {
    let mut bar = Bar::new("overlap");
    bar.add_event(Event::new(100.0, 300.0, color("red")).expect("event"));
    bar.add_event(Event::new(200.0, 100.0, color("blue")).expect("event"));
    let mut group = Group::new("g");
    group.add_bar(bar);
    let mut chart = Chart::new("z-order", 1000.0).expect("chart");
    chart.add_group(group);

    let scene = build_render_frame(&chart, &ChartRenderConfig::default()).expect("frame");
    let fills: Vec<_> = scene
        .frame
        .rects()
        .filter_map(|rect| rect.fill_color)
        .collect();
    assert_eq!(fills, vec![color("red"), color("blue")]);
}

#[test]
fn wrapped_events_are_drawn_as_two_rects() {
    let mut bar = Bar::new("wrap");
    bar.add_event(Event::new(900.0, 200.0, color("gold")).expect("event"));
    let mut group = Group::new("g");
    group.add_bar(bar);
    let mut chart = Chart::new("wrap", 1000.0).expect("chart");
    chart.add_group(group);

    let scene = build_render_frame(&chart, &ChartRenderConfig::default()).expect("frame");
    let spans: Vec<(f64, f64)> = scene
        .frame
        .rects()
        .filter(|rect| rect.fill_color.is_some())
        .map(|rect| (rect.x, rect.width))
        .collect();
    assert_eq!(spans, vec![(1000.0, 100.0), (100.0, 100.0)]);
}

#[test]
fn event_longer_than_period_is_clipped_and_reported() {
    let mut bar = Bar::new("long");
    bar.add_event(Event::new(500.0, 2500.0, color("navy")).expect("event"));
    let mut group = Group::new("g");
    group.add_bar(bar);
    let mut chart = Chart::new("long", 1000.0).expect("chart");
    chart.add_group(group);

    let config = ChartRenderConfig::default();
    let scene = build_render_frame(&chart, &config).expect("frame");
    assert!(matches!(
        scene.diagnostics.as_slice(),
        [Diagnostic::EventExceedsPeriod {
            group: 0,
            bar: 0,
            event: 0,
            ..
        }]
    ));
    let bar_right = config.bar_left_offset + config.bar_length;
    for rect in scene.frame.rects() {
        assert!(rect.x + rect.width <= bar_right);
    }
}

#[test]
fn dense_interval_on_long_period_renders_capped_ticks() {
    let mut group = Group::new("g");
    group.add_bar(Bar::new("only"));
    let mut chart = Chart::new("dense", 1e12)
        .expect("chart")
        .with_interval_time(1e-7)
        .expect("interval");
    chart.add_group(group);

    let config = ChartRenderConfig::default().with_intervals(true, false);
    let scene = build_render_frame(&chart, &config).expect("frame");

    assert_eq!(scene.frame.lines().count(), 1000 + 1);
    assert!(matches!(
        scene.diagnostics.as_slice(),
        [Diagnostic::TickCountCapped { drawn: 1000, .. }]
    ));
}

#[test]
fn event_starting_past_period_is_folded_and_reported() {
    let mut bar = Bar::new("late");
    bar.add_event(Event::new(1500.0, 100.0, color("red")).expect("event"));
    bar.add_event(Event::new(1950.0, 100.0, color("blue")).expect("event"));
    let mut group = Group::new("g");
    group.add_bar(bar);
    let mut chart = Chart::new("late", 1000.0).expect("chart");
    chart.add_group(group);

    let config = ChartRenderConfig::default();
    let scene = build_render_frame(&chart, &config).expect("frame");
    let spans: Vec<(f64, f64)> = scene
        .frame
        .rects()
        .filter(|rect| rect.fill_color.is_some())
        .map(|rect| (rect.x, rect.width))
        .collect();
    assert_eq!(spans, vec![(600.0, 100.0), (1050.0, 50.0), (100.0, 50.0)]);

    assert_eq!(
        scene.diagnostics,
        vec![
            Diagnostic::EventStartsPastPeriod {
                group: 0,
                bar: 0,
                event: 0,
                start_time: 1500.0,
                max_time: 1000.0,
            },
            Diagnostic::EventStartsPastPeriod {
                group: 0,
                bar: 0,
                event: 1,
                start_time: 1950.0,
                max_time: 1000.0,
            },
        ]
    );
}

#[test]
fn rect_ids_are_scoped_by_group_and_bar() {
    let mut chart = two_bar_chart();
    let mut wrapping = Bar::new("Bar3");
    wrapping.add_event(Event::new(950.0, 100.0, color("green")).expect("event"));
    let mut second = Group::new("TestGroup2");
    second.add_bar(wrapping);
    chart.add_group(second);

    let scene = build_render_frame(&chart, &ChartRenderConfig::default()).expect("frame");
    let ids: Vec<&str> = scene
        .frame
        .rects()
        .filter_map(|rect| rect.id.as_deref())
        .collect();
    assert_eq!(
        ids,
        vec![
            "group0bar0outline",
            "group0bar0event0",
            "group0bar1outline",
            "group0bar1event0",
            "group1bar0outline",
            "group1bar0event0",
            "group1bar0event1",
        ]
    );
}

#[test]
fn invalid_config_is_rejected_before_drawing() {
    let config = ChartRenderConfig::default().with_bar_length(0.0);
    let err = build_render_frame(&two_bar_chart(), &config).expect_err("zero bar length");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn render_hands_frame_to_renderer() {
    let mut renderer = NullRenderer::default();
    let report = render(&two_bar_chart(), &ChartRenderConfig::default(), &mut renderer)
        .expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_counts, report.counts);
    assert_eq!(report.counts.rects, 4);
    assert_eq!(report.counts.texts, 3);
    assert_eq!(report.counts.images, 0);
}

#[test]
fn engine_recomputes_every_render() {
    let mut engine =
        TimelineEngine::new(NullRenderer::default(), ChartRenderConfig::default()).expect("engine");
    let mut chart = two_bar_chart();
    engine.render(&chart).expect("first render");

    let mut extra = Group::new("TestGroup2");
    let mut bar3 = Bar::new("Bar3");
    bar3.add_event(Event::new(50.0, 150.0, color("green")).expect("event"));
    extra.add_bar(bar3);
    chart.add_group(extra);
    let report = engine.render(&chart).expect("second render");

    assert_eq!(report.counts.rects, 6);
    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_counts.rects, 6);
}

#[test]
fn engine_rejects_invalid_config_updates() {
    let mut engine =
        TimelineEngine::new(NullRenderer::default(), ChartRenderConfig::default()).expect("engine");
    let bad = ChartRenderConfig::default().with_bar_height(f64::NAN);
    assert!(engine.set_config(bad).is_err());
    assert_eq!(engine.config().bar_height, 30.0);
    assert!(TimelineEngine::new(NullRenderer::default(), bad).is_err());
}
