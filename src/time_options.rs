/// Number of selectable time labels: hours 1-12 crossed with twelve
/// five-minute steps.
pub const NUMBER_OF_TIME_OPTIONS: usize = 144;

/// Produces the selectable time labels, in order: `"1:00 AM"`, `"1:05 AM"`,
/// ... `"12:55 PM"`.
///
/// The AM/PM suffix is chosen by `minute < 30`, not by time of day. Existing
/// stored blobs reference these exact labels, so the quirk must be
/// reproduced bit-exactly.
pub fn generate_time_options() -> Vec<String> {
    let mut times = Vec::with_capacity(NUMBER_OF_TIME_OPTIONS);
    for hour in 1..=12 {
        for minute in (0..60).step_by(5) {
            let suffix = if minute < 30 { "AM" } else { "PM" };
            times.push(format!("{hour}:{minute:02} {suffix}"));
        }
    }
    times
}

/// Whether `start` comes before `end` under plain string ordering of the
/// labels. This is not chronological comparison; switching to parsed clock
/// time would change which ranges are accepted, so the check lives here as
/// the single place to fix.
pub fn start_precedes_end(start: &str, end: &str) -> bool {
    start < end
}
