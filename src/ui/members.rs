//! Loyal members table

use crate::app::App;
use crate::store::Submission;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const HEADERS: [&str; 5] = ["ID", "Name", "Membership", "Country", "Phone"];

/// Draw the registered members of this session
pub fn draw_members(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let members = &app.state.members;

    let block = Block::default()
        .title(format!(" Loyal Members ({}) ", members.len()))
        .borders(Borders::ALL)
        .border_style(theme.border(true));

    if members.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled("No loyal members found", theme.text_muted()),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = members.iter().map(member_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Fill(2),
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(block)
    .style(Style::default().fg(theme.fg))
    .row_highlight_style(theme.list_cursor_style())
    .highlight_symbol("▸ ");

    let mut table_state = TableState::default().with_selected(Some(app.state.selected_index));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn member_row(member: &Submission) -> Row<'static> {
    let values = &member.values;
    Row::new(vec![
        member.id.clone(),
        values.full_name(),
        values.membership_type.clone(),
        values.country.clone(),
        format!("{} {}", values.phone_code, values.phone),
    ])
}
