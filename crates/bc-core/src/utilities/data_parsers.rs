//! Data parsing helpers.
//!
//! These functions only recognise shapes and ranges of digits; turning the
//! pieces into a validated `Date` or `TimeOfDay` is the job of the types in
//! `bc-time`.  Every parser trims surrounding whitespace first.

/// Parse exactly `n` ASCII digits.
fn digits(s: &str, n: usize) -> Option<u32> {
    if s.len() != n || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse a date string in strict ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.  Only the shape and the month
/// range are checked here; day-of-month validity depends on the year.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let year = digits(parts.next()?, 4)?;
    let month = digits(parts.next()?, 2)?;
    let day = digits(parts.next()?, 2)?;
    if parts.next().is_some() || !(1..=12).contains(&month) || day == 0 {
        return None;
    }
    Some((year as u16, month as u8, day as u8))
}

/// Parse a strict 24-hour clock time `HH:MM` (hour 00–23, minute 00–59).
///
/// Returns `(hour, minute)` on success.
pub fn parse_hhmm(s: &str) -> Option<(u8, u8)> {
    let (h, m) = s.trim().split_once(':')?;
    let hour = digits(h, 2)?;
    let minute = digits(m, 2)?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour as u8, minute as u8))
}

/// Parse a clock time written more loosely than [`parse_hhmm`].
///
/// Accepted forms (case-insensitive):
/// * `H:MM` / `HH:MM`: 24-hour;
/// * `H`, `H:MM`, `HH:MM` followed by `am` / `pm` / `a.m.` / `p.m.`, with or
///   without a space: 12-hour, hour 1–12.
///
/// Returns `(hour, minute)` in 24-hour form, or `None` when the input cannot
/// be read unambiguously.
pub fn parse_clock_lenient(s: &str) -> Option<(u8, u8)> {
    let lower = s.trim().to_ascii_lowercase();
    let (body, meridiem) = split_meridiem(&lower);
    let body = body.trim_end();

    let (h, m) = match body.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (body, None),
    };
    if h.is_empty() || h.len() > 2 {
        return None;
    }
    let hour = digits(h, h.len())?;
    let minute = match m {
        Some(m) => digits(m, 2)?,
        // A bare hour only makes sense with an am/pm marker.
        None if meridiem.is_some() => 0,
        None => return None,
    };
    if minute > 59 {
        return None;
    }

    let hour = match meridiem {
        None if hour <= 23 => hour,
        None => return None,
        Some(_) if !(1..=12).contains(&hour) => return None,
        Some(Meridiem::Am) => hour % 12,
        Some(Meridiem::Pm) => hour % 12 + 12,
    };
    Some((hour as u8, minute as u8))
}

#[derive(Clone, Copy)]
enum Meridiem {
    Am,
    Pm,
}

fn split_meridiem(s: &str) -> (&str, Option<Meridiem>) {
    for (suffix, meridiem) in [
        ("a.m.", Meridiem::Am),
        ("p.m.", Meridiem::Pm),
        ("am", Meridiem::Am),
        ("pm", Meridiem::Pm),
    ] {
        if let Some(body) = s.strip_suffix(suffix) {
            return (body, Some(meridiem));
        }
    }
    (s, None)
}
