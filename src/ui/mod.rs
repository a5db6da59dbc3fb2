//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod members;
mod notification;
mod theme;

use crate::app::App;
use crate::state::View;
use ratatui::{widgets::Block, Frame};
use std::time::Instant;
use theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::from_mode(app.state.theme_mode);
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base_style()), area);

    let (header_area, main_area, status_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app, &theme);

    // Draw main content based on current view
    match app.state.current_view {
        View::LoyaltyForm => forms::draw_loyalty_form(frame, main_area, app, &theme),
        View::Members => members::draw_members(frame, main_area, app, &theme),
    }

    if let Some(notification) = &app.state.notification {
        notification::draw_notification(frame, main_area, &theme, notification, Instant::now());
    }

    // Draw status bar
    layout::draw_status_bar(frame, status_area, app, &theme);

    // Modals on top, in the order keys are routed to them
    if let Some(picker) = &app.state.picker {
        let options = app.state.form.options_for(&app.reference, picker.field);
        components::render_picker_dialog(frame, &theme, picker, &options);
    }
    if let Some(action) = &app.state.pending_clear {
        components::render_confirm_dialog(frame, &theme, action, app.state.members.len());
    }
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, &theme, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::reference::fixtures;
    use crate::state::{Field, Notification, PendingClearAction, PickerState};
    use crate::store::MemoryStorage;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn app() -> App {
        App::new(
            TuiConfig::default(),
            None,
            fixtures::sample(),
            Box::new(MemoryStorage::new()),
        )
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_form_shows_fields_and_buttons() {
        let screen = render(&app());
        assert!(screen.contains("Create Loyalty"));
        assert!(screen.contains("First Name"));
        assert!(screen.contains("Postal Code"));
        assert!(screen.contains("Loyal Members"));
        assert!(screen.contains("Select a country first"));
    }

    #[test]
    fn test_field_error_is_rendered() {
        let mut app = app();
        app.state
            .form
            .on_field_change(&app.reference, Field::FirstName, "J4ne");
        let screen = render(&app);
        assert!(screen.contains("Only alphabets allowed"));
    }

    #[test]
    fn test_locked_postal_code_is_marked() {
        let mut app = app();
        app.state
            .form
            .on_field_change(&app.reference, Field::City, "Paris");
        let screen = render(&app);
        assert!(screen.contains("Postal Code (auto)"));
        assert!(screen.contains("75000"));
    }

    #[test]
    fn test_empty_members_view() {
        let mut app = app();
        app.state.current_view = View::Members;
        let screen = render(&app);
        assert!(screen.contains("No loyal members found"));
    }

    #[test]
    fn test_notification_is_drawn() {
        let mut app = app();
        app.state.notification = Some(Notification::new(
            "Saved",
            Instant::now(),
            Duration::from_secs(60),
        ));
        let screen = render(&app);
        assert!(screen.contains("Success"));
        assert!(screen.contains("Saved"));
    }

    #[test]
    fn test_modals_are_drawn() {
        let mut app = app();
        app.state.picker = Some(PickerState::new(Field::MembershipType));
        let screen = render(&app);
        assert!(screen.contains("Select Membership"));
        assert!(screen.contains("Platinum"));

        app.state.picker = None;
        app.state.pending_clear = Some(PendingClearAction::default());
        assert!(render(&app).contains("Confirm Clear"));

        app.state.push_error("Failed to save membership".to_string());
        assert!(render(&app).contains("Failed to save membership"));
    }
}
