use dwell_chart::ChartRenderConfig;
use dwell_chart::pattern::{ShannonPattern, generate_shannon_chart};
use dwell_chart::render::SvgRenderer;

const BALLS: [(&str, &str); 3] = [
    ("Red Ball", "icons/redBall.svg"),
    ("Green Ball", "icons/greenBall.svg"),
    ("Blue Ball", "icons/blueBall.svg"),
];
const HANDS: [(&str, &str); 2] = [
    ("Left Hand", "icons/leftHand.svg"),
    ("Right Hand", "icons/rightHand.svg"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dwell_chart::telemetry::init_default_tracing();

    // Times measured from a recorded cascade, in milliseconds.
    let generated = generate_shannon_chart(
        ShannonPattern::new(385.0, 305.0, 155.0, 3, 2),
        Some("3 Ball Cascade"),
    )?;
    for diagnostic in &generated.diagnostics {
        eprintln!("warning: {diagnostic}");
    }

    let mut chart = generated.chart;
    chart.set_interval_time(100.0)?;
    for (group_index, labels) in [&BALLS[..], &HANDS[..]].into_iter().enumerate() {
        let Some(group) = chart.group_mut(group_index) else {
            continue;
        };
        for (bar_index, (name, icon)) in labels.iter().enumerate() {
            if let Some(bar) = group.bar_mut(bar_index) {
                bar.set_name(*name);
                bar.set_icon_link(Some((*icon).to_owned()));
            }
        }
    }

    let config = ChartRenderConfig::default()
        .with_bar_left_offset(120.0)
        .with_intervals(true, true);
    let mut renderer = SvgRenderer::new();
    let report = dwell_chart::render(&chart, &config, &mut renderer)?;

    eprintln!(
        "frame primitives: rects={} texts={} lines={} images={}",
        report.counts.rects, report.counts.texts, report.counts.lines, report.counts.images
    );
    println!("{}", renderer.into_svg());
    Ok(())
}
