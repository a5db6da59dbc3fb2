//! Success toast with a countdown bar

use crate::state::Notification;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, LineGauge, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 5;

/// Draw the notification in the top-right corner of `area`
pub fn draw_notification(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    notification: &Notification,
    now: Instant,
) {
    let width = TOAST_WIDTH.min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height: TOAST_HEIGHT.min(area.height),
    };

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_success())
        .title(Span::styled(" Success ", theme.text_success()))
        .title_bottom(Line::from(Span::styled(" Esc to close ", theme.text_muted())))
        .style(theme.base_style());
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(notification.message.as_str())
        .style(Style::default().fg(theme.fg))
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let ratio = f64::from(notification.remaining_ratio_at(now)).clamp(0.0, 1.0);
    let gauge = LineGauge::default()
        .filled_style(theme.text_success())
        .unfilled_style(theme.text_muted())
        .line_set(symbols::line::THICK)
        .label("")
        .ratio(ratio);
    frame.render_widget(gauge, chunks[1]);
}
