//! Create Loyalty form

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::state::{Field, FormSession, FORM_BUTTONS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Fields per row, left to right in tab order
const FORM_ROWS: &[&[Field]] = &[
    &[Field::FirstName, Field::LastName],
    &[Field::PhoneCode, Field::Phone, Field::Gender],
    &[Field::Country, Field::Region],
    &[Field::Address],
    &[Field::City, Field::PostalCode, Field::MembershipType],
];

/// Draw the form and its action row
pub fn draw_loyalty_form(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let form = &app.state.form;

    let mut constraints: Vec<Constraint> = FORM_ROWS
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Buttons
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let errors = form.errors();
    for (row_area, fields) in rows.iter().zip(FORM_ROWS) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints(fields))
            .split(*row_area);

        for (cell, &field) in cells.iter().zip(fields.iter()) {
            let label = field_label(form, field);
            let view = FieldView {
                label: &label,
                value: form.values().get(field),
                placeholder: placeholder(form, field),
                is_active: form.active() == Some(field),
                is_select: field.is_select(),
                is_enabled: is_enabled(form, field),
                error: errors.get(&field).copied(),
            };
            draw_field(frame, *cell, theme, &view);
        }
    }

    draw_buttons(frame, rows[FORM_ROWS.len()], form, theme);
}

fn column_constraints(fields: &[Field]) -> Vec<Constraint> {
    fields
        .iter()
        .map(|field| match field {
            Field::PhoneCode => Constraint::Length(16),
            _ => Constraint::Ratio(1, fields.len() as u32),
        })
        .collect()
}

fn field_label(form: &FormSession, field: Field) -> String {
    match field {
        Field::PostalCode if form.is_postal_code_locked() => {
            format!("{} (auto)", field.label())
        }
        Field::Region if !form.is_region_required() && !form.values().country.is_empty() => {
            format!("{} (optional)", field.label())
        }
        _ => field.label().to_string(),
    }
}

fn placeholder(form: &FormSession, field: Field) -> &'static str {
    match field {
        Field::Region if form.values().country.is_empty() => "Select a country first",
        Field::Region if !form.is_region_required() => "No regions",
        _ if field.is_select() => "Select...",
        _ => "",
    }
}

fn is_enabled(form: &FormSession, field: Field) -> bool {
    match field {
        Field::Region => form.is_region_required(),
        Field::PostalCode => !form.is_postal_code_locked(),
        _ => true,
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &FormSession, theme: &Theme) {
    let constraints: Vec<Constraint> = FORM_BUTTONS
        .iter()
        .map(|label| Constraint::Length(label.len() as u16 + 6))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, label) in FORM_BUTTONS.iter().enumerate() {
        let is_selected = form.is_buttons_row_active() && form.selected_button == idx;
        render_button(frame, cells[idx], theme, label, is_selected);
    }
}
