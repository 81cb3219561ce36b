//! String composition for colored spans, without any I/O

use crate::color::{ColorTable, RESET_CODE};
use crate::error::{Error, Result};
use std::fmt::Write;

/// Marker splitting multi-colored text into segments
pub const SEGMENT_MARKER: &str = "%h";

/// Split off a single trailing `\n` so it can be written after the reset
#[must_use]
pub fn split_trailing_newline(text: &str) -> (&str, &str) {
    match text.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (text, ""),
    }
}

/// Split on [`SEGMENT_MARKER`], dropping empty segments but keeping order
#[must_use]
pub fn split_segments(text: &str) -> Vec<&str> {
    text.split(SEGMENT_MARKER).filter(|s| !s.is_empty()).collect()
}

/// `escape(code) + text + reset`, with a trailing newline moved past the reset
#[must_use]
pub fn colored(table: &ColorTable, text: &str, code: i32) -> String {
    let (body, newline) = split_trailing_newline(text);
    format!("{}{body}{}{newline}", table.escape(code), table.reset())
}

/// `escape(code) + text + reset + "\n"`; an existing trailing newline stays inside the span
#[must_use]
pub fn colored_line(table: &ColorTable, text: &str, code: i32) -> String {
    format!("{}{text}{}\n", table.escape(code), table.reset())
}

/// Pair each segment with the next unused code.
///
/// A segment is emitted only when its code exists in the table; an unknown
/// code is not consumed, so nothing after it is emitted. Segments left over
/// once the codes run out are dropped. One extra reset always closes the
/// output.
#[must_use]
pub fn multi_colored(table: &ColorTable, text: &str, codes: &[i32]) -> String {
    let (body, newline) = split_trailing_newline(text);
    let mut out = paired_segments(table, body, codes);
    out.push_str(newline);
    out
}

/// Same pairing as [`multi_colored`], always followed by `"\n"`
#[must_use]
pub fn multi_colored_line(table: &ColorTable, text: &str, codes: &[i32]) -> String {
    let mut out = paired_segments(table, text, codes);
    out.push('\n');
    out
}

fn paired_segments(table: &ColorTable, text: &str, codes: &[i32]) -> String {
    let reset = table.reset();
    let mut out = String::with_capacity(text.len() + codes.len() * 16);

    let spans = split_segments(text)
        .into_iter()
        .zip(codes)
        .map_while(|(segment, &code)| table.get(code).map(|seq| (seq, segment)));
    for (seq, segment) in spans {
        out.push_str(seq);
        out.push_str(segment);
        out.push_str(reset);
    }

    out.push_str(reset);
    out
}

/// Foreground + background span. Requires `foreground > 0` and `background < -1`.
///
/// # Errors
///
/// Returns [`Error::InvalidColorCombination`] when either code is on the wrong side.
pub fn fg_bg(table: &ColorTable, text: &str, foreground: i32, background: i32) -> Result<String> {
    let (body, newline) = split_trailing_newline(text);
    let span = fg_bg_span(table, body, foreground, background)?;
    Ok(span + newline)
}

/// [`fg_bg`] followed by `"\n"`. A deferred trailing newline is kept, so
/// `"x\n"` ends in two newlines.
///
/// # Errors
///
/// Returns [`Error::InvalidColorCombination`] when either code is on the wrong side.
pub fn fg_bg_line(
    table: &ColorTable,
    text: &str,
    foreground: i32,
    background: i32,
) -> Result<String> {
    let mut out = fg_bg(table, text, foreground, background)?;
    out.push('\n');
    Ok(out)
}

fn fg_bg_span(table: &ColorTable, text: &str, foreground: i32, background: i32) -> Result<String> {
    if foreground <= 0 || background >= RESET_CODE {
        tracing::debug!(foreground, background, "rejected color combination");
        return Err(Error::InvalidColorCombination {
            foreground,
            background,
        });
    }

    Ok(format!(
        "{}{}{text}{}",
        table.escape(foreground),
        table.escape(background),
        table.reset()
    ))
}

/// Remove every color sequence except the reset sequence.
///
/// Embedded resets survive, so `strip_color(&apply_color(s, c))` still ends
/// with `"\x1b[0m"`.
#[must_use]
pub fn strip_color(table: &ColorTable, text: &str) -> String {
    let mut out = text.to_string();
    for &code in table.keys() {
        if code == RESET_CODE {
            continue;
        }
        if let Some(seq) = table.get(code) {
            if out.contains(seq) {
                out = out.replace(seq, "");
            }
        }
    }
    out
}

/// Strip existing colors, then wrap in `code`. An unknown code returns the
/// stripped text unwrapped.
#[must_use]
pub fn apply_color(table: &ColorTable, text: &str, code: i32) -> String {
    let cleaned = strip_color(table, text);
    match table.get(code) {
        Some(seq) => format!("{seq}{cleaned}{}", table.reset()),
        None => cleaned,
    }
}

/// Every code rendered in its own color, space-separated from -1 upwards
#[must_use]
pub fn available_colors(table: &ColorTable) -> String {
    let reset = table.reset();
    let mut out = String::new();
    for &code in table.keys() {
        // Writing to a String cannot fail
        let _ = write!(out, "{}{code}{reset}", table.escape(code));
        if code >= RESET_CODE {
            out.push(' ');
        }
    }
    out.push('\n');
    out
}
