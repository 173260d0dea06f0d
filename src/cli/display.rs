// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the tickerdex CLI: boxed sections and a few colored
//! labels. Uses the terminal's own 16-color palette, so light and dark themes
//! both read fine. Plain text when `NO_COLOR` is set or stdout isn't a TTY.

use tickerdex::MatchType;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const UNDERLINE: &str = "\x1b[4m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Magenta,
    Cyan,
    Gray,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::Gray => "\x1b[90m",
        }
    }
}

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

pub fn paint(color: Color, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", color.code(), text, RESET)
    } else {
        text.to_string()
    }
}

pub fn bold(color: Color, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", BOLD, color.code(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI escapes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = paint(Color::Gray, "│");
    println!("{}{}{}", border, pad_right(content, BOX_WIDTH), border);
}

/// ┌─ LABEL ───┐ for the first section, ├─ LABEL ───┤ after that.
pub fn section(label: &str, first: bool) {
    let (left, right) = if first { ("┌", "┐") } else { ("├", "┤") };
    let label = format!("─ {} ", bold(Color::Cyan, label));
    let rule = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label)));
    println!(
        "{}{}{}",
        paint(Color::Gray, left),
        label,
        paint(Color::Gray, &format!("{rule}{right}"))
    );
}

pub fn close_box() {
    println!("{}", paint(Color::Gray, &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// LABELS
// ═══════════════════════════════════════════════════════════════════════════

pub fn match_type_label(match_type: MatchType) -> String {
    let color = match match_type {
        MatchType::Exact | MatchType::Prefix => Color::Green,
        MatchType::Suffix | MatchType::WordPrefix => Color::Cyan,
        MatchType::Contains => Color::Magenta,
        MatchType::Fuzzy => Color::Yellow,
    };
    if match_type == MatchType::Exact {
        bold(color, match_type.as_str())
    } else {
        paint(color, match_type.as_str())
    }
}

/// Score colored by how close it is to an exact match.
pub fn score_value(score: f64, exact: f64) -> String {
    let text = format!("{:>8.1}", score);
    let ratio = if exact > 0.0 { score / exact } else { 0.0 };
    let color = if ratio >= 0.3 {
        Color::Green
    } else if ratio >= 0.1 {
        Color::Yellow
    } else {
        Color::Gray
    };
    paint(color, &text)
}

pub fn timing_us(value: f64) -> String {
    let color = if value < 1000.0 { Color::Green } else { Color::Red };
    paint(color, &format!("{:.1}µs", value))
}

/// Underline the first occurrence of the normalized `query` in `value`.
/// Values whose lowercase form shifts byte offsets are returned unstyled.
pub fn highlight(value: &str, query: &str) -> String {
    if query.is_empty() || !use_colors() {
        return value.to_string();
    }
    let lower = value.to_lowercase();
    match lower.find(query) {
        Some(start) if lower.len() == value.len() && value.is_char_boundary(start) => {
            let end = start + query.len();
            if !value.is_char_boundary(end) {
                return value.to_string();
            }
            format!(
                "{}{}{}{}{}",
                &value[..start],
                UNDERLINE,
                &value[start..end],
                RESET,
                &value[end..]
            )
        }
        _ => value.to_string(),
    }
}
