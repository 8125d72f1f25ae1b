//! Mapping from line states to terminal colors.

use super::classifier::LineState;
use strum::{Display, EnumIter, EnumString};

/// Foreground color used for a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    #[default]
    Normal,
    Blue,
    Green,
    Yellow,
    Purple,
    Cyan,
    Red,
}

impl Color {
    /// ANSI SGR foreground code, or `None` for the terminal's own color.
    pub const fn sgr_code(self) -> Option<u8> {
        match self {
            Color::Normal => None,
            Color::Red => Some(31),
            Color::Green => Some(32),
            Color::Yellow => Some(33),
            Color::Blue => Some(34),
            Color::Purple => Some(35),
            Color::Cyan => Some(36),
        }
    }
}

/// Color for a line state.
pub const fn color_for(state: LineState) -> Color {
    match state {
        LineState::Paragraph => Color::Normal,
        LineState::Title => Color::Blue,
        LineState::Numbered => Color::Green,
        LineState::Bulleted => Color::Yellow,
        LineState::Blockquote => Color::Purple,
        LineState::Codeblock => Color::Cyan,
        LineState::Separator => Color::Red,
    }
}

impl From<LineState> for Color {
    fn from(state: LineState) -> Self {
        color_for(state)
    }
}

/// Absence of a state renders in the normal color.
impl From<Option<LineState>> for Color {
    fn from(state: Option<LineState>) -> Self {
        state.map(color_for).unwrap_or_default()
    }
}
