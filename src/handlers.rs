//! Event handling for the Employee Database GUI
//!
//! Every handler forwards to `Roster`, then re-seeds the inputs where the
//! form changed and ends with `cx.notify()`.

use gpui::{ClickEvent, Context, Window};

use crate::app::App;
use crate::error::{join_fields, FormError};
use crate::form::CommitOutcome;
use crate::models::{date_of_birth_hint, FormField};

impl App {
    /// "ADD" button: open an empty form
    pub fn handle_add_click(&mut self, _event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        self.roster.open_for_add();
        self.sync_inputs(window, cx);
        log::debug!("Opened form ({:?})", self.roster.form().mode());
        cx.notify();
    }

    /// Row edit action: open the form pre-filled from the row's record
    pub fn edit_employee(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        if self.roster.open_for_edit(index).is_none() {
            return;
        }
        self.sync_inputs(window, cx);
        log::debug!("Opened form ({:?})", self.roster.form().mode());
        cx.notify();
    }

    /// Row delete action: drop every record sharing the row's id
    pub fn delete_employee(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Some((id, removed)) = self.roster.delete_at(index) {
            log::info!("Deleted {} employee record(s) with id {}", removed, id);
            cx.notify();
        }
    }

    pub fn handle_field_change(&mut self, field: FormField, value: String, cx: &mut Context<Self>) {
        if self.roster.set_field(field, value) {
            cx.notify();
        }
    }

    /// "SAVE" / "UPDATE" button
    pub fn handle_commit_click(&mut self, _event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let mode = self.roster.form().mode();
        match self.roster.commit() {
            Ok(CommitOutcome::Added(employee)) => {
                log::info!("Added employee {} ({})", employee.id, employee.name);
            }
            Ok(CommitOutcome::Updated { id, replaced }) => {
                log::info!("Updated {} employee record(s) with id {}", replaced, id);
            }
            Err(FormError::Incomplete { missing }) => {
                // Dialog stays open; feedback only when highlighting is enabled
                log::debug!(
                    "Refused incomplete form ({:?}), missing: {}",
                    mode,
                    join_fields(&missing)
                );
                cx.notify();
                return;
            }
            Err(FormError::NotOpen) => return,
        }

        self.sync_inputs(window, cx);
        cx.notify();
    }

    /// "CANCEL" button and backdrop click
    pub fn handle_cancel_click(&mut self, _event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let mode = self.roster.form().mode();
        if !self.roster.cancel() {
            return;
        }
        self.sync_inputs(window, cx);
        log::debug!("Form dismissed ({:?})", mode);
        cx.notify();
    }

    pub fn show_details(&mut self, index: usize, cx: &mut Context<Self>) {
        self.roster.show_details(index);
        cx.notify();
    }

    pub fn handle_close_details(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.roster.close_details();
        cx.notify();
    }

    /// Copy the form's values into the input widgets
    fn sync_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let fields = self.roster.form().fields().clone();
        for (field, input_state) in &self.inputs {
            let value = fields.get(*field).to_string();
            input_state.update(cx, |state, cx| {
                state.set_value(value, window, cx);
            });
        }
    }

    pub fn date_of_birth_hint(&self) -> Option<&'static str> {
        date_of_birth_hint(
            self.config.date_of_birth_hint,
            &self.roster.form().fields().date_of_birth,
        )
    }
}
