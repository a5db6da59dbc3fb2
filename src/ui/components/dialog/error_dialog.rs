//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::ui::theme::Theme;
use ratatui::{text::Span, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, theme: &Theme, error_message: &str) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", theme.text_active_bold()),
        Span::raw(" or "),
        Span::styled("Esc", theme.text_active_bold()),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            title_color: theme.error,
            border_color: theme.error,
            background: theme.bg,
            message: error_message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
