use crate::core::Event;

/// Splits every event that runs past `max_time` into two adjacent pieces:
/// the part up to `max_time` and the overshoot wrapped to time zero.
///
/// Order is preserved. Events starting at or after `max_time` are moved to
/// their start modulo `max_time` first. Each event is split at most once, so
/// an event longer than the whole period still leaves an over-long wrapped
/// piece.
#[must_use]
pub fn correct_event_wrapping(events: &[Event], max_time: f64) -> Vec<Event> {
    let mut corrected = Vec::with_capacity(events.len());
    for event in events {
        corrected.extend(event.split_at_period(max_time));
    }
    corrected
}
