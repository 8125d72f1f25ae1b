//! Colored rendering of cheat sheets for the terminal.

use super::classifier::classify;
use super::color::{Color, color_for};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

const RESET: &str = "\x1b[0m";

/// Whether output is colorized.
///
/// `On` and `Off` are distinct modes; `Auto` defers to whether the output is
/// an interactive terminal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorMode {
    #[default]
    Auto,
    On,
    Off,
}

impl ColorMode {
    /// Mode forced by the `--color` / `--nocolor` flags, if any.
    pub fn from_flags(color: bool, nocolor: bool) -> Option<Self> {
        match (color, nocolor) {
            (true, _) => Some(ColorMode::On),
            (false, true) => Some(ColorMode::Off),
            (false, false) => None,
        }
    }

    /// Resolve the mode. `is_interactive` is only consulted for `Auto`.
    pub fn should_colorize(self, is_interactive: impl FnOnce() -> bool) -> bool {
        match self {
            ColorMode::On => true,
            ColorMode::Off => false,
            ColorMode::Auto => is_interactive(),
        }
    }
}

/// Render `text` for display.
///
/// When coloring is not active the text is returned unchanged.
pub fn render(text: &str, mode: ColorMode, is_interactive: impl FnOnce() -> bool) -> String {
    let colorize_output = mode.should_colorize(is_interactive);
    tracing::trace!(%mode, colorize_output, bytes = text.len(), "rendering document");

    if colorize_output {
        colorize(text)
    } else {
        text.to_string()
    }
}

/// Wrap every line of `text` in the escape sequence for its state.
///
/// Lines are colored independently; lines in the normal color are left bare.
pub fn colorize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);

    for (i, line) in classify(text.split('\n')).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        paint(&mut out, line.text, color_for(line.state));
    }

    out
}

fn paint(out: &mut String, text: &str, color: Color) {
    match color.sgr_code() {
        Some(code) => {
            out.push_str("\x1b[");
            out.push_str(&code.to_string());
            out.push('m');
            out.push_str(text);
            out.push_str(RESET);
        }
        None => out.push_str(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const SAMPLE: &str = "# git\n\n* status\n\n> quote\n\n    git log\n---";

    #[test]
    fn test_on_and_off_are_distinct() {
        assert_ne!(ColorMode::On, ColorMode::Off);
        assert_ne!(ColorMode::Auto, ColorMode::On);
        assert_ne!(ColorMode::Auto, ColorMode::Off);
    }

    #[test]
    fn test_off_is_identity() {
        for text in ["", SAMPLE, "\n\n", "plain\r\nwindows\r\n"] {
            assert_eq!(render(text, ColorMode::Off, || true), text);
            assert_eq!(render(text, ColorMode::Off, || false), text);
        }
    }

    #[test]
    fn test_on_ignores_terminal_detection() {
        let asked = Cell::new(false);
        let out = render("# Hi", ColorMode::On, || {
            asked.set(true);
            false
        });
        assert_eq!(out, "\x1b[34m# Hi\x1b[0m");
        assert!(!asked.get());
    }

    #[test]
    fn test_auto_follows_terminal_detection() {
        assert_eq!(render("# Hi", ColorMode::Auto, || true), "\x1b[34m# Hi\x1b[0m");
        assert_eq!(render("# Hi", ColorMode::Auto, || false), "# Hi");
    }

    #[test]
    fn test_title_then_plain_lines() {
        let out = render("# Hi\n\nparagraph text", ColorMode::On, || true);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines, vec!["\x1b[34m# Hi\x1b[0m", "", "paragraph text"]);
    }

    #[test]
    fn test_each_line_wrapped_independently() {
        let out = colorize(SAMPLE);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "\x1b[34m# git\x1b[0m",
                "",
                "\x1b[33m* status\x1b[0m",
                "\x1b[33m\x1b[0m",
                "\x1b[35m> quote\x1b[0m",
                "",
                "\x1b[36m    git log\x1b[0m",
                "\x1b[31m---\x1b[0m",
            ]
        );
    }

    #[test]
    fn test_trailing_newline_preserved() {
        assert_eq!(colorize("# Hi\n"), "\x1b[34m# Hi\x1b[0m\n");
        assert_eq!(colorize(""), "");
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(ColorMode::from_flags(true, false), Some(ColorMode::On));
        assert_eq!(ColorMode::from_flags(false, true), Some(ColorMode::Off));
        assert_eq!(ColorMode::from_flags(false, false), None);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
        assert_eq!("ON".parse::<ColorMode>(), Ok(ColorMode::On));
        assert_eq!(ColorMode::Off.to_string(), "off");
    }
}
