//! Confirmation dialog component for destructive actions

use super::base::centered_rect;
use crate::state::PendingClearAction;
use crate::ui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a confirmation dialog for clearing every member
pub fn render_confirm_dialog(
    frame: &mut Frame,
    theme: &Theme,
    action: &PendingClearAction,
    member_count: usize,
) {
    let dialog_area = centered_rect(frame.area(), 50, 10);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let noun = if member_count == 1 { "member" } else { "members" };
    let mut content = vec![
        Line::from(Span::styled(
            "Confirm Clear",
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Remove all "),
            Span::styled(format!("{member_count}"), theme.text_active_bold()),
            Span::raw(format!(" loyal {noun}?")),
        ]),
        Line::from(""),
    ];

    // Add options with selection highlighting
    let options = [(false, "Cancel", theme.fg), (true, "Clear", theme.error)];

    for (is_clear, label, base_color) in options {
        let is_selected = action.selected_option == is_clear;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(base_color).add_modifier(Modifier::BOLD)
        } else {
            theme.text_muted()
        };

        content.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("←→", Style::default().fg(theme.accent)),
        Span::styled(" select  ", theme.text_muted()),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::styled(" confirm  ", theme.text_muted()),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::styled(" cancel", theme.text_muted()),
    ]));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.bg)),
        )
        .style(theme.base_style());

    frame.render_widget(dialog, dialog_area);
}
