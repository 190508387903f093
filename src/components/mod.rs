//! UI components for the Employee Database GUI
//!
//! These modules extend the `App` struct with rendering methods.
//! They are imported for their side effects (impl blocks).

mod details_dialog;
mod employee_row;
mod form_dialog;
mod header;
mod modal;
