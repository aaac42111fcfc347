//! Duration rendering and parsing for track times.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,
    #[error("unrecognized duration: {0}")]
    Unrecognized(String),
    #[error("duration out of range: {0}")]
    OutOfRange(String),
}

/// Formats a millisecond count as a duration string.
///
/// Long form concatenates unit-suffixed components ("1h30min30s"), dropping
/// zero-valued units. Seconds are also dropped when `show_seconds` is false,
/// unless they are the only nonzero component. Compact form is colon
/// separated ("1:30:30", "2:05"). Negative input always renders compact,
/// with a leading sign.
pub fn format_duration(millis: i64, long_form: bool, show_seconds: bool) -> String {
    let negative = millis < 0;
    let mut remaining = millis.unsigned_abs() / 1000;
    let sec = remaining % 60;
    remaining /= 60;
    let min = remaining % 60;
    remaining /= 60;
    let hours = remaining;

    if !long_form || negative {
        let sign = if negative { "-" } else { "" };
        return if hours > 0 {
            format!("{sign}{hours}:{min:02}:{sec:02}")
        } else {
            format!("{sign}{min}:{sec:02}")
        };
    }

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if min > 0 {
        out.push_str(&format!("{min}min"));
    }
    if sec > 0 && (show_seconds || out.is_empty()) {
        out.push_str(&format!("{sec}s"));
    }
    out
}

/// Formats a millisecond count to a zero-padded mm:ss or hh:mm:ss string.
pub fn format_clock(millis: i64) -> String {
    let sign = if millis < 0 { "-" } else { "" };
    let total_seconds = millis.unsigned_abs() / 1000;
    if total_seconds >= 3600 {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{sign}{minutes:02}:{seconds:02}")
    }
}

static LONG_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-)?(?:(\d+)h)?(?:(\d+)min)?(?:(\d+)s)?$").unwrap());
static COLON_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-)?(?:(\d+):)?(\d+):(\d{2})$").unwrap());

/// Parses either duration rendering ("1h30min30s", "-32:40", "1:01:05")
/// back to milliseconds.
pub fn parse_duration(text: &str) -> Result<i64, DurationParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DurationParseError::Empty);
    }
    let caps = COLON_FORM
        .captures(text)
        .or_else(|| LONG_FORM.captures(text))
        .ok_or_else(|| DurationParseError::Unrecognized(text.to_string()))?;
    // The long-form regex also matches a bare sign with no units.
    if caps.get(2).is_none() && caps.get(3).is_none() && caps.get(4).is_none() {
        return Err(DurationParseError::Unrecognized(text.to_string()));
    }

    let hours = component(&caps, 2, text)?;
    let minutes = component(&caps, 3, text)?;
    let seconds = component(&caps, 4, text)?;
    let millis = hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes.checked_mul(60)?))
        .and_then(|hm| hm.checked_add(seconds))
        .and_then(|total| total.checked_mul(1000))
        .ok_or_else(|| DurationParseError::OutOfRange(text.to_string()))?;
    Ok(if caps.get(1).is_some() { -millis } else { millis })
}

fn component(
    caps: &regex::Captures,
    index: usize,
    text: &str,
) -> Result<i64, DurationParseError> {
    match caps.get(index) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| DurationParseError::OutOfRange(text.to_string())),
        None => Ok(0),
    }
}
