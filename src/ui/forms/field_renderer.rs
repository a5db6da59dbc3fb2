//! Field rendering utilities for forms

use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything needed to draw one boxed field
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Shown muted when the value is empty
    pub placeholder: &'a str,
    pub is_active: bool,
    pub is_select: bool,
    /// Disabled fields are muted and never show a cursor
    pub is_enabled: bool,
    pub error: Option<&'a str>,
}

/// Draw a form field with its inline error under the box
pub fn draw_field(frame: &mut Frame, area: Rect, theme: &Theme, field: &FieldView) {
    let is_active = field.is_active && field.is_enabled;

    let border_style = if field.error.is_some() {
        theme.text_error()
    } else {
        theme.border(is_active)
    };

    let mut spans = if field.value.is_empty() {
        vec![Span::styled(field.placeholder, theme.text_muted())]
    } else if field.is_enabled {
        vec![Span::styled(field.value, Style::default().fg(theme.fg))]
    } else {
        vec![Span::styled(field.value, theme.text_muted())]
    };

    if is_active && !field.is_select {
        spans.push(Span::styled("▌", Style::default().fg(theme.accent)));
    }
    if field.is_select && field.is_enabled {
        spans.push(Span::styled(" ▾", theme.text_muted()));
    }

    let title_style = if is_active {
        theme.text_active_bold()
    } else {
        theme.text_muted()
    };

    let mut block = Block::default()
        .title(Span::styled(format!(" {} ", field.label), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(error) = field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            theme.text_error(),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
