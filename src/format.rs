//! Status block formatting.
//!
//! This module renders a `FieldBag` into the canonical fenced status block.
//! Every line falls back to an angle-bracket placeholder when its field is
//! empty, so the preview always shows the full shape of the update.

use crate::fields::{Role, StatusKind, CUSTOM_STOP_STATUS};
use crate::status::FieldBag;

/// Render a status block for the given kind, fields and role.
///
/// The result is wrapped in 3-backtick fence lines. A captured time, when
/// supplied, is appended to the header as `KIND - time`; callers pass `None`
/// when the show-time option is off.
pub fn format_status(
    kind: StatusKind,
    fields: &FieldBag,
    role: Role,
    captured_time: Option<&str>,
) -> String {
    let mut out = String::from("```\n");
    match captured_time {
        Some(time) => out.push_str(&format!("{} - {}\n", kind.label(), time)),
        None => out.push_str(&format!("{}\n", kind.label())),
    }
    out.push_str(&format!(
        "Project: {}\n",
        or_placeholder(&fields.project, "<brand name>")
    ));
    out.push_str(&format!(
        "Task: {}\n",
        or_placeholder(&fields.task, "<short description>")
    ));

    match kind {
        StatusKind::Start => {
            out.push_str(&format!(
                "Estimated Time: {}\n",
                decimal_hours(&fields.estimated_hours, &fields.estimated_minutes, "~", "<e.g. 2h>")
            ));
            out.push_str(&format!(
                "Reference: {}\n",
                or_placeholder(&fields.reference, "nil")
            ));
        }
        StatusKind::Pause => {
            out.push_str(&format!("Status: {}\n", fields.pause_status));
            out.push_str(&format!(
                "Reason: {}\n",
                or_placeholder(&fields.pause_reason, "<short reason>")
            ));
            out.push_str(&format!(
                "Progress: {}\n",
                or_placeholder(&fields.progress, "<what is done so far>")
            ));
        }
        StatusKind::Stop => {
            out.push_str(&format!("Status: {}\n", resolve_stop_status(fields)));
            out.push_str(&format!(
                "Time Taken: {}\n",
                decimal_hours(
                    &fields.time_taken_hours,
                    &fields.time_taken_minutes,
                    "~",
                    "<approx time spent>"
                )
            ));
            out.push_str(&format!(
                "Notes: {}\n",
                or_placeholder(&fields.notes, "<build number>")
            ));
        }
    }

    out.push_str(&format!(
        "{}: {}\n",
        role.label(),
        or_placeholder(&fields.actor_name, "<your name>")
    ));
    out.push_str("```");
    out
}

/// Render an hours/minutes pair as a decimal-hours duration.
///
/// Both strings are parsed as non-negative integers; anything unparsable
/// counts as zero. A zero total returns `fallback` verbatim with no prefix.
/// Otherwise the total is rounded to the nearest tenth of an hour and
/// rendered as `{prefix}{value}h`, dropping the decimal point when the
/// rounded value is a whole number of hours (`~1h`, `~2.5h`, `~0.1h`).
pub fn decimal_hours(hours: &str, minutes: &str, prefix: &str, fallback: &str) -> String {
    let h = parse_count(hours);
    let m = parse_count(minutes);
    if h == 0 && m == 0 {
        return fallback.to_string();
    }
    // Work in tenths of an hour so rendering never hits float formatting.
    let tenths = ((h as f64 + m as f64 / 60.0) * 10.0).round() as u64;
    if tenths % 10 == 0 {
        format!("{}{}h", prefix, tenths / 10)
    } else {
        format!("{}{}.{}h", prefix, tenths / 10, tenths % 10)
    }
}

/// Resolve the STOP status line, substituting the custom text (or its
/// placeholder) when the `Custom` sentinel is selected.
pub fn resolve_stop_status(fields: &FieldBag) -> String {
    if fields.stop_status == CUSTOM_STOP_STATUS {
        if fields.custom_stop_status.is_empty() {
            "<custom status>".to_string()
        } else {
            fields.custom_stop_status.clone()
        }
    } else {
        fields.stop_status.clone()
    }
}

/// Remove the fence markers from a formatted block and trim the remainder.
/// This is the visible text both clipboard payloads carry.
pub fn strip_fences(block: &str) -> String {
    block.replace("```", "").trim().to_string()
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn parse_count(s: &str) -> u64 {
    s.trim().parse::<u64>().unwrap_or(0)
}
