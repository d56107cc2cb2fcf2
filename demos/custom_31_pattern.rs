use dwell_chart::api::{ChartRenderConfig, TimelineEngine};
use dwell_chart::core::{Bar, Chart, Event, Group};
use dwell_chart::render::{Color, SvgRenderer};

fn bar(
    name: &str,
    icon: &str,
    events: &[(f64, f64, &str)],
) -> Result<Bar, Box<dyn std::error::Error>> {
    let mut bar = Bar::new(name).with_icon_link(icon);
    for &(start, duration, color) in events {
        bar.add_event(Event::new(start, duration, Color::named(color)?)?);
    }
    Ok(bar)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dwell_chart::telemetry::init_default_tracing();

    let mut chart = Chart::new("Hypothetical '31' Pattern Timeline", 600.0)?;

    let mut balls = Group::new("Balls");
    balls.add_bar(bar(
        "Red Ball",
        "icons/redBall.svg",
        &[(0.0, 100.0, "red"), (200.0, 100.0, "red")],
    )?);
    balls.add_bar(bar(
        "Green Ball",
        "icons/greenBall.svg",
        &[(100.0, 100.0, "lime"), (500.0, 100.0, "lime")],
    )?);
    chart.add_group(balls);

    let mut hands = Group::new("Hands");
    hands.add_bar(bar(
        "Left Hand",
        "icons/leftHand.svg",
        &[(0.0, 100.0, "red"), (500.0, 100.0, "lime")],
    )?);
    hands.add_bar(bar(
        "Right Hand",
        "icons/rightHand.svg",
        &[(100.0, 100.0, "lime"), (200.0, 100.0, "red")],
    )?);
    chart.add_group(hands);

    let config = ChartRenderConfig::default()
        .with_bar_length(600.0)
        .with_bar_height(25.0)
        .with_bar_left_offset(120.0);
    let mut engine = TimelineEngine::new(SvgRenderer::new(), config)?;
    engine.render(&chart)?;

    println!("{}", engine.into_renderer().into_svg());
    Ok(())
}
