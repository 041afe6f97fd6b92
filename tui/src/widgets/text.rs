//! Text helpers
//!
//! Everything here measures in terminal columns, not chars, so emoji and
//! wide glyphs line up.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns `s` occupies
pub fn width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Wrap `text` to `max_width` columns
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(text, max_width.max(1))
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Cut `s` so it fits in `max_width` columns
pub fn truncate(s: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Keep the end of `s` that fits in `max_width` columns
pub fn tail(s: &str, max_width: usize) -> String {
    let mut kept: Vec<char> = Vec::new();
    let mut used = 0;
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        kept.push(c);
    }
    kept.into_iter().rev().collect()
}

/// Pad `spans` with trailing spaces up to `total` columns
pub fn pad_spans(mut spans: Vec<Span<'static>>, total: usize, style: Style) -> Vec<Span<'static>> {
    let used: usize = spans.iter().map(|s| s.width()).sum();
    if used < total {
        spans.push(Span::styled(" ".repeat(total - used), style));
    }
    spans
}

/// Wrap `body` lines in a rounded border `outer` columns wide.
///
/// Each body row is padded to the inner width; rows that are too wide are
/// left as they are.
pub fn card(body: Vec<Vec<Span<'static>>>, outer: usize, border: Style, fill: Style) -> Vec<Line<'static>> {
    let inner = outer.saturating_sub(4);
    let rule = "─".repeat(outer.saturating_sub(2));

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::from(Span::styled(format!("╭{rule}╮"), border)));
    for row in body {
        let mut spans = vec![Span::styled("│", border), Span::styled(" ", fill)];
        spans.extend(pad_spans(row, inner, fill));
        spans.push(Span::styled(" ", fill));
        spans.push(Span::styled("│", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(format!("╰{rule}╯"), border)));
    lines
}

/// Lay out `chips` left to right, starting a new row when one would
/// overflow `max_width`
pub fn chip_rows(chips: &[String], max_width: usize, gap: usize) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut used = 0;

    for chip in chips {
        let w = width(chip);
        let needed = if current.is_empty() { w } else { used + gap + w };
        if !current.is_empty() && needed > max_width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        used = if current.is_empty() { w } else { used + gap + w };
        current.push(chip.clone());
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
