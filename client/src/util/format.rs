//! Display formatting for record timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render the calendar date of an RFC 3339 timestamp as `M/D/YYYY`.
///
/// Only the leading `YYYY-MM-DD` is read, so the date is the one recorded by
/// the backend, not shifted into the viewer's timezone. Input that does not
/// start with a valid date is returned unchanged.
#[must_use]
pub fn format_scan_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_owned(), |(y, m, d)| format!("{m}/{d}/{y}"))
}

fn parse_date(raw: &str) -> Option<(u32, u32, u32)> {
    let date = raw.get(..10)?;
    let mut parts = date.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return None;
    }
    let year = y.parse::<u32>().ok()?;
    let month = m.parse::<u32>().ok()?;
    let day = d.parse::<u32>().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}
