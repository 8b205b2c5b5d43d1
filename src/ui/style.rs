//! Colors and glyphs for the editor.

use ratatui::style::{Color, Modifier, Style};

use crate::canvas::Rgb;

/// Glyph for transparent cells. Repeated across cells it tiles into a
/// two-tone checkerboard anchored to the screen, not to the cell.
pub const CHECKER_SYMBOL: &str = "\u{259a}";
pub const CHECKER_LIGHT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const CHECKER_DARK: Color = Color::Rgb(0x00, 0x00, 0x00);

/// Appearance of pen 0, which has no palette color.
pub const CLEAR_PEN_BG: Color = Color::White;

pub const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

pub fn checker_style() -> Style {
    Style::default().fg(CHECKER_LIGHT).bg(CHECKER_DARK)
}

/// Flat fill with readable text on top.
pub fn swatch_style(rgb: Rgb) -> Style {
    let fg = if rgb.is_light() {
        Color::Black
    } else {
        Color::White
    };
    Style::default().bg(to_color(rgb)).fg(fg)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

pub fn selected_pen_border() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn text_cursor_style() -> Style {
    Style::default().bg(Color::White).fg(Color::Black)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_text_contrasts() {
        assert_eq!(swatch_style(Rgb::new(255, 255, 0)).fg, Some(Color::Black));
        assert_eq!(swatch_style(Rgb::new(0, 0, 128)).fg, Some(Color::White));
        assert_eq!(
            swatch_style(Rgb::new(1, 2, 3)).bg,
            Some(Color::Rgb(1, 2, 3))
        );
    }
}
