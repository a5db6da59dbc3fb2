//! Option picker for select fields, with type-to-filter

use super::base::centered_rect;
use crate::state::{PickerState, SelectOption};
use crate::ui::theme::Theme;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows of options shown at once
const VISIBLE_OPTIONS: usize = 12;

/// Render the picker for the field being edited
pub fn render_picker_dialog(
    frame: &mut Frame,
    theme: &Theme,
    picker: &PickerState,
    options: &[SelectOption],
) {
    // title + blank + search + blank + options + blank + hints + borders
    let dialog_height = (VISIBLE_OPTIONS + 8) as u16;
    let dialog_area = centered_rect(frame.area(), 50, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            format!("Select {}", picker.field.label()),
            theme.text_active_bold(),
        )),
        Line::from(""),
        // Search field
        Line::from(vec![
            Span::styled("Search: ", theme.text_muted()),
            Span::styled(
                if picker.filter.is_empty() {
                    "type to filter...".to_string()
                } else {
                    picker.filter.clone()
                },
                Style::default().fg(theme.selected),
            ),
        ]),
        Line::from(""),
    ];

    let filtered = picker.filtered(options);
    if filtered.is_empty() {
        content.push(Line::from(Span::styled(
            "  No matching options",
            theme.text_muted(),
        )));
    } else {
        // Scroll so the cursor stays visible
        let offset = picker
            .selected_index
            .saturating_sub(VISIBLE_OPTIONS.saturating_sub(1));
        for (idx, option) in filtered
            .iter()
            .enumerate()
            .skip(offset)
            .take(VISIBLE_OPTIONS)
        {
            let is_selected = idx == picker.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                theme.list_cursor_style()
            } else {
                Style::default().fg(theme.fg)
            };
            content.push(Line::from(Span::styled(
                format!("{prefix}{}", option.label),
                style,
            )));
        }
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(theme.accent)),
        Span::styled(" move  ", theme.text_muted()),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::styled(" select  ", theme.text_muted()),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::styled(" cancel", theme.text_muted()),
    ]));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(true))
                .style(Style::default().bg(theme.bg)),
        )
        .style(theme.base_style());

    frame.render_widget(dialog, dialog_area);
}
