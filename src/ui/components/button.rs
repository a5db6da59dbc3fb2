//! Button component for TUI

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    content: &str,
    is_selected: bool,
) {
    let text_style = if is_selected {
        theme.text_active_bold()
    } else {
        Style::default().fg(theme.fg)
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(is_selected));

    frame.render_widget(paragraph.block(block), area);
}
