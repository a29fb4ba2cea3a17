//! crates/logger/src/render.rs
//! Record rendering: percent-escape templates and timestamp formatting.

use std::fmt::Write as _;

use config::HandlerDescription;
use spec::Severity;

/// Renders one record line using the handler's resolved templates.
///
/// Message escapes: `%t` timestamp (expanded through the date format), `%l`
/// severity name left-justified to eight characters, `%n` logger name, `%m`
/// message text. `%%` produces a literal `%`; unknown escapes pass through
/// verbatim.
pub(crate) fn render_record(
    handler: &HandlerDescription,
    epoch_secs: u64,
    severity: Severity,
    target: &str,
    message: &str,
) -> String {
    let timestamp = format_timestamp(epoch_secs, handler.date_format());

    let format = handler.message_format();
    let mut rendered = String::with_capacity(format.len() + message.len() + timestamp.len());
    let mut chars = format.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            rendered.push(ch);
            continue;
        }

        match chars.next() {
            Some('t') => rendered.push_str(&timestamp),
            Some('l') => {
                let _ = write!(rendered, "{:<8}", severity.as_str());
            }
            Some('n') => rendered.push_str(target),
            Some('m') => rendered.push_str(message),
            Some('%') => rendered.push('%'),
            Some(other) => {
                // Unknown escape: pass through verbatim
                rendered.push('%');
                rendered.push(other);
            }
            None => rendered.push('%'),
        }
    }

    rendered
}

/// Formats a Unix epoch timestamp through a strftime-style subset.
///
/// Supported escapes: `%Y` `%m` `%d` `%H` `%M` `%S` and `%%`; anything else
/// passes through verbatim. The civil date is derived in UTC from the epoch
/// seconds, avoiding an external time dependency.
pub(crate) fn format_timestamp(epoch_secs: u64, date_format: &str) -> String {
    let (year, month, day) = civil_from_days((epoch_secs / 86400) as i64);
    let day_seconds = epoch_secs % 86400;
    let hours = day_seconds / 3600;
    let minutes = (day_seconds % 3600) / 60;
    let seconds = day_seconds % 60;

    let mut rendered = String::with_capacity(date_format.len() + 8);
    let mut chars = date_format.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            rendered.push(ch);
            continue;
        }

        match chars.next() {
            Some('Y') => {
                let _ = write!(rendered, "{year:04}");
            }
            Some('m') => {
                let _ = write!(rendered, "{month:02}");
            }
            Some('d') => {
                let _ = write!(rendered, "{day:02}");
            }
            Some('H') => {
                let _ = write!(rendered, "{hours:02}");
            }
            Some('M') => {
                let _ = write!(rendered, "{minutes:02}");
            }
            Some('S') => {
                let _ = write!(rendered, "{seconds:02}");
            }
            Some('%') => rendered.push('%'),
            Some(other) => {
                rendered.push('%');
                rendered.push(other);
            }
            None => rendered.push('%'),
        }
    }

    rendered
}

/// Converts a day count (days since 1970-01-01) to a civil date.
///
/// Algorithm from Howard Hinnant's date library (public domain).
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y as i32, m, d)
}
