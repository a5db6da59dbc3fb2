//! Loyalty form session: values, cascading fields and validation

use super::field::{Field, FormValues};
use super::resolver::{is_postal_code_locked, on_city_change, on_country_change};
use super::validation::{validate_all, ValidationErrors};
use crate::reference::{ReferenceData, Region};
use crate::store::{StoreError, Submission, SubmissionStore};
use std::collections::BTreeSet;

/// Gender choices
pub const GENDER_TYPES: &[&str] = &["Male", "Female"];

/// Membership tiers
pub const MEMBERSHIP_TYPES: &[&str] = &["Basic", "Silver", "Gold", "Platinum"];

/// Buttons on the form's action row
pub const FORM_BUTTONS: &[&str] = &["Submit", "Clear", "Loyal Members"];

/// Index of the action row, after the last field
pub const BUTTONS_ROW: usize = Field::ALL.len();

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// One entry of a select field's option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    fn same(text: &str) -> Self {
        Self {
            label: text.to_string(),
            value: text.to_string(),
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing stored; the errors are now all visible
    Invalid(ValidationErrors),
    /// Stored under a fresh id; the form was reset
    Submitted(Submission),
}

/// State of the active loyalty form
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    values: FormValues,
    region_options: Vec<Region>,
    touched: BTreeSet<Field>,
    submit_attempted: bool,
    pub active_field_index: usize,
    /// Which button is selected on the action row (0=Submit, 1=Clear, 2=Loyal Members)
    pub selected_button: usize,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Regions offered for the selected country
    #[cfg(test)]
    pub fn region_options(&self) -> &[Region] {
        &self.region_options
    }

    /// Region must be chosen when the selected country has regions
    pub fn is_region_required(&self) -> bool {
        !self.region_options.is_empty()
    }

    /// Postal code was filled from the city table and cannot be edited
    pub fn is_postal_code_locked(&self) -> bool {
        is_postal_code_locked(&self.values.city)
    }

    /// Errors to show: touched fields only, every field after a submit attempt
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = validate_all(&self.values, self.is_region_required());
        if !self.submit_attempted {
            errors.retain(|field, _| self.touched.contains(field));
        }
        errors
    }

    #[cfg(test)]
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors().get(&field).copied()
    }

    /// Apply a new value to one field and resolve the fields depending on it
    pub fn on_field_change(&mut self, reference: &dyn ReferenceData, field: Field, value: &str) {
        if field == Field::PostalCode && self.is_postal_code_locked() {
            return;
        }

        tracing::trace!(field = field.name(), "Field changed");
        self.values.set(field, value);
        self.touched.insert(field);

        match field {
            Field::Country => {
                let change = on_country_change(reference, value);
                self.region_options = change.region_options;
                self.values.region = change.region;
            }
            Field::City => {
                if let Some(matched) = on_city_change(value) {
                    self.values.city = matched.city;
                    self.values.postal_code = matched.postal_code;
                    self.touched.insert(Field::PostalCode);
                }
            }
            _ => {}
        }
    }

    /// The field under the cursor, `None` on the action row
    pub fn active(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// Type a character into the active text field
    pub fn input_char(&mut self, reference: &dyn ReferenceData, c: char) {
        if let Some(field) = self.active().filter(|f| !f.is_select()) {
            let mut value = self.values.get(field).to_string();
            value.push(c);
            self.on_field_change(reference, field, &value);
        }
    }

    /// Delete the last character of the active text field
    pub fn backspace(&mut self, reference: &dyn ReferenceData) {
        if let Some(field) = self.active().filter(|f| !f.is_select()) {
            let mut value = self.values.get(field).to_string();
            if value.pop().is_some() {
                self.on_field_change(reference, field, &value);
            }
        }
    }

    /// Pick an option for a select field and move past it
    pub fn select_option(
        &mut self,
        reference: &dyn ReferenceData,
        field: Field,
        option: &SelectOption,
    ) {
        self.on_field_change(reference, field, &option.value);
        self.set_active_field(field.index());
        self.next_field();
    }

    /// Options a select field currently offers
    pub fn options_for(&self, reference: &dyn ReferenceData, field: Field) -> Vec<SelectOption> {
        match field {
            Field::PhoneCode => reference
                .all_countries()
                .iter()
                .map(|c| SelectOption {
                    label: c.phone_code_label(),
                    value: c.phone_prefix.clone(),
                })
                .collect(),
            Field::Gender => GENDER_TYPES.iter().map(|g| SelectOption::same(g)).collect(),
            Field::Country => reference
                .all_countries()
                .iter()
                .map(|c| SelectOption::same(&c.name))
                .collect(),
            Field::Region => self
                .region_options
                .iter()
                .map(|r| SelectOption::same(&r.name))
                .collect(),
            Field::MembershipType => MEMBERSHIP_TYPES
                .iter()
                .map(|m| SelectOption::same(m))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Validate everything and store the record when valid
    pub fn submit(&mut self, store: &mut SubmissionStore) -> Result<SubmitOutcome, StoreError> {
        self.submit_attempted = true;
        let errors = validate_all(&self.values, self.is_region_required());
        if !errors.is_empty() {
            tracing::debug!("Submit rejected with {} invalid fields", errors.len());
            return Ok(SubmitOutcome::Invalid(errors));
        }

        let submission = store.append(self.values.clone())?;
        self.clear();
        Ok(SubmitOutcome::Submitted(submission))
    }

    /// Reset to blank defaults
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FORM_BUTTONS.len();
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FORM_BUTTONS.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }
}

impl Form for FormSession {
    fn field_count(&self) -> usize {
        BUTTONS_ROW + 1 // fields + buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
}
