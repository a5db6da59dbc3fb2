//! Application state definitions

use super::forms::{Field, FormSession, SelectOption};
use super::notification::Notification;
use crate::store::Submission;
use std::collections::VecDeque;
use std::time::Instant;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Create Loyalty form
    #[default]
    LoyaltyForm,
    /// Read-only list of registered members
    Members,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::LoyaltyForm => "Create Loyalty",
            Self::Members => "Loyal Members",
        }
    }
}

/// Colour scheme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn from_dark(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Open option picker for a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub field: Field,
    /// Case-insensitive substring filter typed by the user
    pub filter: String,
    /// Index into the filtered options
    pub selected_index: usize,
}

impl PickerState {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            filter: String::new(),
            selected_index: 0,
        }
    }

    /// Open with the cursor on the field's current value, if listed
    pub fn with_current(field: Field, options: &[SelectOption], current: &str) -> Self {
        let mut picker = Self::new(field);
        picker.selected_index = options
            .iter()
            .position(|o| o.value == current)
            .unwrap_or(0);
        picker
    }

    /// Options matching the filter, in list order
    pub fn filtered<'a>(&self, options: &'a [SelectOption]) -> Vec<&'a SelectOption> {
        let needle = self.filter.to_lowercase();
        options
            .iter()
            .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.selected_index = 0;
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.selected_index = 0;
    }

    pub fn move_down(&mut self, visible: usize) {
        if visible > 0 && self.selected_index < visible - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// The highlighted option, if the filter leaves any
    pub fn selected<'a>(&self, options: &'a [SelectOption]) -> Option<&'a SelectOption> {
        self.filtered(options).get(self.selected_index).copied()
    }
}

/// Pending "clear all members" confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingClearAction {
    /// true = Clear, false = Cancel
    pub selected_option: bool,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: FormSession,

    /// Snapshot of the store, refreshed when the members view opens
    pub members: Vec<Submission>,
    pub selected_index: usize,

    pub picker: Option<PickerState>,
    pub pending_clear: Option<PendingClearAction>,
    pub notification: Option<Notification>,
    pub theme_mode: ThemeMode,

    /// Short feedback line in the status bar
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(theme_mode: ThemeMode) -> Self {
        Self {
            theme_mode,
            ..Default::default()
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    pub fn selected_member(&self) -> Option<&Submission> {
        self.members.get(self.selected_index)
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
    }

    /// Drop the notification once its display time is over
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.notification = None;
        }
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn options(labels: &[&str]) -> Vec<SelectOption> {
        labels
            .iter()
            .map(|l| SelectOption {
                label: l.to_string(),
                value: l.to_string(),
            })
            .collect()
    }

    mod view {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_view_is_form() {
            assert_eq!(View::default(), View::LoyaltyForm);
        }

        #[test]
        fn test_titles() {
            assert_eq!(View::LoyaltyForm.title(), "Create Loyalty");
            assert_eq!(View::Members.title(), "Loyal Members");
        }
    }

    mod theme {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_round_trips() {
            let mut state = AppState::new(ThemeMode::Dark);
            state.toggle_theme();
            assert_eq!(state.theme_mode, ThemeMode::Light);
            state.toggle_theme();
            assert_eq!(state.theme_mode, ThemeMode::Dark);
        }

        #[test]
        fn test_from_dark() {
            assert_eq!(ThemeMode::from_dark(true), ThemeMode::Dark);
            assert_eq!(ThemeMode::from_dark(false), ThemeMode::Light);
        }
    }

    mod picker {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_filter_is_case_insensitive_substring() {
            let opts = options(&["United States", "United Kingdom", "Japan"]);
            let mut picker = PickerState::new(Field::Country);
            for c in "UNITED".chars() {
                picker.push_filter_char(c);
            }
            let labels: Vec<_> = picker
                .filtered(&opts)
                .into_iter()
                .map(|o| o.label.as_str())
                .collect();
            assert_eq!(labels, vec!["United States", "United Kingdom"]);
        }

        #[test]
        fn test_filter_edit_resets_cursor() {
            let opts = options(&["Basic", "Silver", "Gold"]);
            let mut picker = PickerState::new(Field::MembershipType);
            picker.move_down(opts.len());
            picker.move_down(opts.len());
            assert_eq!(picker.selected(&opts).unwrap().label, "Gold");
            picker.push_filter_char('s');
            assert_eq!(picker.selected_index, 0);
            picker.pop_filter_char();
            assert_eq!(picker.selected(&opts).unwrap().label, "Basic");
        }

        #[test]
        fn test_cursor_stays_in_bounds() {
            let opts = options(&["Male", "Female"]);
            let mut picker = PickerState::new(Field::Gender);
            picker.move_up();
            assert_eq!(picker.selected_index, 0);
            for _ in 0..5 {
                picker.move_down(opts.len());
            }
            assert_eq!(picker.selected_index, 1);
        }

        #[test]
        fn test_no_match_selects_nothing() {
            let opts = options(&["Male", "Female"]);
            let mut picker = PickerState::new(Field::Gender);
            picker.push_filter_char('x');
            assert!(picker.selected(&opts).is_none());
        }

        #[test]
        fn test_with_current_starts_on_value() {
            let opts = options(&["Basic", "Silver", "Gold"]);
            let picker = PickerState::with_current(Field::MembershipType, &opts, "Silver");
            assert_eq!(picker.selected_index, 1);
            let picker = PickerState::with_current(Field::MembershipType, &opts, "");
            assert_eq!(picker.selected_index, 0);
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_error_queue_is_fifo() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }

    mod notification {
        use super::*;

        #[test]
        fn test_expire_notification() {
            let start = Instant::now();
            let mut state = AppState::default();
            state.notification = Some(Notification::new("done", start, Duration::from_secs(1)));
            state.expire_notification(start + Duration::from_millis(500));
            assert!(state.notification.is_some());
            state.expire_notification(start + Duration::from_secs(1));
            assert!(state.notification.is_none());
        }
    }

    mod selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_selection_bounds() {
            let mut state = AppState::default();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
            state.move_selection_down(2);
            state.move_selection_down(2);
            assert_eq!(state.selected_index, 1);
            state.move_selection_down(0);
            assert_eq!(state.selected_index, 1);
            state.reset_selection();
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_selected_member_empty() {
            let state = AppState::default();
            assert!(state.selected_member().is_none());
        }
    }
}
