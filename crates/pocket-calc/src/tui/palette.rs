//! Terminal colors for each theme variant

use ratatui::style::Color;

use crate::theme::Theme;

/// Semantic colors used by the calculator UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Panel background
    pub background: Color,
    /// Primary text (display, digit buttons)
    pub foreground: Color,
    /// Borders and the running-total label
    pub accent: Color,
    /// Operator buttons
    pub operator: Color,
    /// Equals button
    pub equals: Color,
    /// Clear buttons
    pub danger: Color,
    /// Memory buttons and the memory indicator
    pub memory: Color,
    /// Secondary text such as help descriptions
    pub muted: Color,
    /// Background of a pressed button
    pub highlight: Color,
}

impl Palette {
    /// Palette for dark terminals
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            accent: Color::Cyan,
            operator: Color::Yellow,
            equals: Color::Green,
            danger: Color::Red,
            memory: Color::Magenta,
            muted: Color::Gray,
            highlight: Color::Yellow,
        }
    }

    /// Palette for light terminals
    #[must_use]
    pub const fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            accent: Color::Blue,
            operator: Color::Rgb(0xb3, 0x5c, 0x00),
            equals: Color::Rgb(0x1e, 0x7b, 0x34),
            danger: Color::Rgb(0xb0, 0x1e, 0x1e),
            memory: Color::Rgb(0x7a, 0x1f, 0xa2),
            muted: Color::DarkGray,
            highlight: Color::LightBlue,
        }
    }
}

impl Theme {
    /// Returns the palette for this theme
    #[must_use]
    pub const fn palette(self) -> Palette {
        if self.is_dark() {
            Palette::dark()
        } else {
            Palette::light()
        }
    }
}
