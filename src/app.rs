//! Application state and core logic

use crate::config::TuiConfig;
use crate::reference::StaticReferenceData;
use crate::state::{
    AppState, Field, Form, Notification, PendingClearAction, PickerState, SubmitOutcome,
    ThemeMode, View,
};
use crate::store::{SessionStorage, SubmissionStore};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Country and region tables
    pub reference: StaticReferenceData,
    store: SubmissionStore,
    config: TuiConfig,
    /// Where theme changes are written, `None` keeps them in memory
    config_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: TuiConfig,
        config_path: Option<PathBuf>,
        reference: StaticReferenceData,
        storage: Box<dyn SessionStorage>,
    ) -> Self {
        Self {
            state: AppState::new(config.theme_mode()),
            reference,
            store: SubmissionStore::new(storage),
            config,
            config_path,
            quit: false,
        }
    }

    /// Periodic housekeeping from the event loop
    pub fn tick(&mut self, now: Instant) {
        self.state.expire_notification(now);
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if self.state.pending_clear.is_some() {
            self.handle_clear_dialog_key(key);
            return Ok(());
        }

        if self.state.picker.is_some() {
            self.handle_picker_key(key);
            return Ok(());
        }

        if key.code == KeyCode::F(2) {
            self.toggle_theme();
            return Ok(());
        }

        if key.code == KeyCode::Esc && self.state.notification.is_some() {
            self.state.notification = None;
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::LoyaltyForm => self.handle_form_key(key),
            View::Members => self.handle_members_key(key),
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_action_panel = self.state.form.is_buttons_row_active();
        let shortcut = key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER);
        // Ctrl chords never type, even where the shortcut modifier is Cmd
        let chord = shortcut || key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form();
            }
            KeyCode::Char('r') if shortcut => self.clear_form(),
            KeyCode::Char('l') if shortcut => self.open_members(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if on_action_panel => self.state.form.prev_button(),
            KeyCode::Right if on_action_panel => self.state.form.next_button(),
            // Button order: 0=Submit, 1=Clear, 2=Loyal Members
            KeyCode::Enter if on_action_panel => match self.state.form.selected_button {
                0 => self.submit_form(),
                1 => self.clear_form(),
                2 => self.open_members(),
                _ => {}
            },
            KeyCode::Enter => match self.state.form.active() {
                Some(field) if field.is_select() => self.open_picker(field),
                _ => self.state.form.next_field(),
            },
            KeyCode::Char(c) if !on_action_panel && !chord => match self.state.form.active() {
                // Typing on a select starts filtering its options
                Some(field) if field.is_select() => {
                    self.open_picker(field);
                    if let Some(picker) = self.state.picker.as_mut() {
                        picker.push_filter_char(c);
                    }
                }
                _ => self.state.form.input_char(&self.reference, c),
            },
            KeyCode::Backspace if !on_action_panel => self.state.form.backspace(&self.reference),
            _ => {}
        }
    }

    fn handle_members_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.state.members.len();
                self.state.move_selection_down(count);
            }
            KeyCode::Char('y') => self.copy_selected_id(),
            KeyCode::Char('x') => {
                if self.state.members.is_empty() {
                    self.state.status_message = Some("No members to clear".to_string());
                } else {
                    self.state.pending_clear = Some(PendingClearAction::default());
                }
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                self.state.form.clear();
                self.state.current_view = View::LoyaltyForm;
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_clear_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.pending_clear = None,
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                if let Some(action) = self.state.pending_clear.as_mut() {
                    action.selected_option = !action.selected_option;
                }
            }
            KeyCode::Enter => {
                let confirmed = self
                    .state
                    .pending_clear
                    .take()
                    .is_some_and(|a| a.selected_option);
                if confirmed {
                    self.clear_members();
                }
            }
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(field) = self.state.picker.as_ref().map(|p| p.field) else {
            return;
        };
        let options = self.state.form.options_for(&self.reference, field);

        match key.code {
            KeyCode::Esc => self.state.picker = None,
            KeyCode::Up => {
                if let Some(picker) = self.state.picker.as_mut() {
                    picker.move_up();
                }
            }
            KeyCode::Down => {
                if let Some(picker) = self.state.picker.as_mut() {
                    let visible = picker.filtered(&options).len();
                    picker.move_down(visible);
                }
            }
            KeyCode::Enter => {
                let chosen = self
                    .state
                    .picker
                    .take()
                    .and_then(|p| p.selected(&options).cloned());
                if let Some(option) = chosen {
                    self.state
                        .form
                        .select_option(&self.reference, field, &option);
                }
            }
            KeyCode::Char(c) => {
                if let Some(picker) = self.state.picker.as_mut() {
                    picker.push_filter_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(picker) = self.state.picker.as_mut() {
                    picker.pop_filter_char();
                }
            }
            _ => {}
        }
    }

    fn open_picker(&mut self, field: Field) {
        let options = self.state.form.options_for(&self.reference, field);
        if options.is_empty() {
            let message = if field == Field::Region && self.state.form.values().country.is_empty()
            {
                "Select a country first"
            } else {
                "No options available"
            };
            self.state.status_message = Some(message.to_string());
            return;
        }
        let picker =
            PickerState::with_current(field, &options, self.state.form.values().get(field));
        self.state.picker = Some(picker);
    }

    fn submit_form(&mut self) {
        match self.state.form.submit(&mut self.store) {
            Ok(SubmitOutcome::Submitted(submission)) => {
                self.state.notification = Some(Notification::membership_created(
                    &submission.id,
                    Instant::now(),
                    self.config.notification_duration(),
                ));
            }
            Ok(SubmitOutcome::Invalid(errors)) => {
                self.state.status_message =
                    Some(format!("Please correct {} highlighted fields", errors.len()));
                if let Some(first) = errors.keys().next() {
                    self.state.form.set_active_field(first.index());
                }
            }
            Err(e) => self.push_error(format!("Failed to save membership: {e}")),
        }
    }

    fn clear_form(&mut self) {
        self.state.form.clear();
        self.state.status_message = Some("Form cleared".to_string());
    }

    fn open_members(&mut self) {
        self.state.members = self.store.list_all();
        self.state.reset_selection();
        self.state.current_view = View::Members;
    }

    fn clear_members(&mut self) {
        match self.store.clear_all() {
            Ok(()) => {
                self.state.members.clear();
                self.state.reset_selection();
                self.state.status_message = Some("All members cleared".to_string());
            }
            Err(e) => self.push_error(format!("Failed to clear members: {e}")),
        }
    }

    fn copy_selected_id(&mut self) {
        let Some(id) = self.state.selected_member().map(|m| m.id.clone()) else {
            return;
        };
        match self.copy_to_clipboard(&id) {
            Ok(()) => self.state.status_message = Some(format!("Copied {id}")),
            Err(e) => self.push_error(format!("Failed to copy to clipboard: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    fn toggle_theme(&mut self) {
        self.state.toggle_theme();
        self.config.dark_mode = Some(self.state.theme_mode == ThemeMode::Dark);
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                tracing::warn!("Failed to save theme preference: {e}");
                self.state.status_message = Some("Could not save theme preference".to_string());
            }
        }
    }
}
