//! Form rendering module
//!
//! - `field_renderer`: boxed field with inline error
//! - `loyalty_form`: the Create Loyalty form

mod field_renderer;
mod loyalty_form;

pub use loyalty_form::draw_loyalty_form;
