// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the catalog-search CLI.
//!
//! OneDark for dark terminals, One Light for light ones. `CATALOG_SEARCH_THEME`
//! ("dark" or "light") picks explicitly, then `COLORFGBG` is consulted, then
//! dark. Colors are off under `NO_COLOR` and when stdout isn't a TTY, so piping
//! results into a file gives plain text.

use std::sync::OnceLock;

/// Width between the box borders.
pub const BOX_WIDTH: usize = 88;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("CATALOG_SEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background colors 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// What a piece of output means. Each theme maps a tone to one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Exact hits, strong scores.
    Strong,
    /// SKU hits, decent scores, fast timings.
    Good,
    /// Prefix hits and counts.
    Info,
    /// Section labels, tag hits.
    Accent,
    /// Synonyms and suggestions.
    Related,
    /// Borders, snippets, rule names.
    Muted,
    Warn,
    Error,
}

impl Tone {
    /// OneDark and One Light values.
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Tone::Strong) => (166, 226, 46),
            (Theme::Dark, Tone::Good) => (152, 195, 121),
            (Theme::Dark, Tone::Info) => (97, 175, 239),
            (Theme::Dark, Tone::Accent) => (86, 182, 194),
            (Theme::Dark, Tone::Related) => (198, 120, 221),
            (Theme::Dark, Tone::Muted) => (92, 99, 112),
            (Theme::Dark, Tone::Warn) => (229, 192, 123),
            (Theme::Dark, Tone::Error) => (224, 108, 117),
            (Theme::Light, Tone::Strong) => (68, 140, 39),
            (Theme::Light, Tone::Good) => (80, 161, 79),
            (Theme::Light, Tone::Info) => (64, 120, 242),
            (Theme::Light, Tone::Accent) => (1, 132, 188),
            (Theme::Light, Tone::Related) => (166, 38, 164),
            (Theme::Light, Tone::Muted) => (160, 161, 167),
            (Theme::Light, Tone::Warn) => (193, 132, 1),
            (Theme::Light, Tone::Error) => (228, 86, 73),
        }
    }

    pub fn escape(self) -> String {
        let (r, g, b) = self.rgb(theme());
        rgb(r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors on? Off for `NO_COLOR` and non-TTY stdout.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus modifiers, or plain text when colors are off.
pub fn themed(tone: Tone, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), tone.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length without ANSI escape sequences.
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
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Cut plain text to `max` characters, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        Tone::Muted.escape()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(Tone::Accent, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(Tone::Accent, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Match type, colored by how precise the rule is.
pub fn match_type_label(match_type: &str) -> String {
    let tone = match match_type {
        "exact" => Tone::Strong,
        "sku" => Tone::Good,
        "partial" => Tone::Info,
        "tag" => Tone::Accent,
        "synonym" => Tone::Related,
        "description" => Tone::Muted,
        _ => return match_type.to_string(),
    };
    themed(tone, &[], match_type)
}

/// Relevance score with two decimals, green for strong matches.
pub fn score_value(score: f64) -> String {
    let text = format!("{:.2}", score);
    let tone = if score >= 0.8 {
        Tone::Strong
    } else if score >= 0.5 {
        Tone::Good
    } else if score >= 0.3 {
        Tone::Warn
    } else {
        Tone::Muted
    };
    themed(tone, &[], &text)
}

/// Execution time in ms: green under 5, yellow under 20, red beyond.
pub fn timing_ms(value: f64) -> String {
    let text = format!("{:.2} ms", value);
    let tone = if value < 5.0 {
        Tone::Good
    } else if value < 20.0 {
        Tone::Warn
    } else {
        Tone::Error
    };
    themed(tone, &[], &text)
}

pub fn price(value: f64) -> String {
    format!("{:.2}", value)
}
