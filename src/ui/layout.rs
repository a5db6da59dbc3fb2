//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, MEMBERS_SHORTCUT, SUBMIT_SHORTCUT, THEME_SHORTCUT};
use crate::state::View;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title line
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let title = Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(theme.accent)),
        Span::styled(app.state.current_view.title(), theme.text_active_bold()),
    ]);
    frame.render_widget(Paragraph::new(title).style(theme.base_style()), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];

    // View-specific hints
    spans.push(Span::raw(get_view_hints(app.state.current_view)));

    // Feedback from the last action
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(theme.selected)));
    }

    let status = Paragraph::new(Line::from(spans)).style(theme.status_bar_style());
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(quit_hint).style(theme.status_bar_style()),
        quit_area,
    );
}

fn get_view_hints(view: View) -> String {
    match view {
        View::LoyaltyForm => format!(
            "Tab:next  Enter:choose  {SUBMIT_SHORTCUT}:submit  {CLEAR_SHORTCUT}:clear  \
             {MEMBERS_SHORTCUT}:members  {THEME_SHORTCUT}:theme"
        ),
        View::Members => format!(
            "↑↓:select  y:copy id  x:clear all  n:new member  {THEME_SHORTCUT}:theme  q:quit"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_header_and_status_lines() {
        let (header, content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 1);
        assert_eq!(content.height, 22);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_form_hints_list_shortcuts() {
        let hints = get_view_hints(View::LoyaltyForm);
        assert!(hints.contains(SUBMIT_SHORTCUT));
        assert!(hints.contains(MEMBERS_SHORTCUT));
    }
}
