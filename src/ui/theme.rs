//! Colour palettes for dark and light mode

use crate::state::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Debug)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub frame: Color,
    pub selected: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
    pub status_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(24, 24, 26),
            fg: Color::White,
            accent: Color::Cyan,
            frame: Color::Rgb(90, 90, 100),
            selected: Color::Rgb(64, 160, 255),
            success: Color::Green,
            error: Color::Red,
            muted: Color::DarkGray,
            status_bg: Color::Rgb(50, 50, 56),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(245, 245, 247),
            fg: Color::Rgb(20, 20, 22),
            accent: Color::Rgb(0, 120, 160),
            frame: Color::Rgb(200, 200, 210),
            selected: Color::Rgb(40, 120, 220),
            success: Color::Rgb(0, 150, 0),
            error: Color::Rgb(200, 0, 0),
            muted: Color::Rgb(120, 120, 130),
            status_bg: Color::Rgb(220, 220, 228),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

// Style helpers that use the theme
impl Theme {
    pub fn base_style(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    pub fn border(&self, active: bool) -> Style {
        let color = if active { self.accent } else { self.frame };
        Style::default().fg(color)
    }

    pub fn text_active_bold(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn text_error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn text_success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn list_cursor_style(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.selected)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().bg(self.status_bg).fg(self.muted)
    }
}
