/// Formats a tick time for display: whole numbers without a fraction, other
/// values with up to two decimals and trailing zeros trimmed.
pub(super) fn format_time_label(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        return format!("{rounded:.0}");
    }
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}
