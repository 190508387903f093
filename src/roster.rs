//! Screen state without the widgets
//!
//! `Roster` bundles the employee list, the add/edit form and the open
//! details row. `App` forwards UI events here and only adds logging,
//! input re-seeding and `cx.notify()` around each call.

use crate::config::IdScheme;
use crate::error::FormError;
use crate::form::{CommitOutcome, EmployeeForm};
use crate::models::{Employee, EmployeeId, FormField};
use crate::store::EmployeeStore;

#[derive(Debug, Clone)]
pub struct Roster {
    store: EmployeeStore,
    form: EmployeeForm,
    // Row whose details modal is open
    details_row: Option<usize>,
}

impl Roster {
    pub fn new(id_scheme: IdScheme) -> Self {
        Self {
            store: EmployeeStore::new(id_scheme),
            form: EmployeeForm::new(),
            details_row: None,
        }
    }

    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn details_employee(&self) -> Option<&Employee> {
        self.details_row.and_then(|index| self.store.get(index))
    }

    pub fn show_details(&mut self, index: usize) {
        if index < self.store.len() {
            self.details_row = Some(index);
        }
    }

    pub fn close_details(&mut self) {
        self.details_row = None;
    }

    pub fn open_for_add(&mut self) {
        self.form.open_for_add();
    }

    /// Open the form on the record at `index`; returns its id
    pub fn open_for_edit(&mut self, index: usize) -> Option<EmployeeId> {
        let employee = self.store.get(index)?.clone();
        self.form.open_for_edit(&employee);
        Some(employee.id)
    }

    /// Apply an input edit; returns whether the form changed
    pub fn set_field(&mut self, field: FormField, value: String) -> bool {
        if !self.form.is_open() || self.form.fields().get(field) == value {
            return false;
        }
        self.form.set_field(field, value);
        true
    }

    pub fn cancel(&mut self) -> bool {
        if !self.form.is_open() {
            return false;
        }
        self.form.cancel();
        true
    }

    /// Remove every record sharing the id of the row at `index`.
    /// Returns the id and how many records went.
    pub fn delete_at(&mut self, index: usize) -> Option<(EmployeeId, usize)> {
        let id = self.store.get(index)?.id;
        let removed = self.store.remove(id);
        self.details_row = None;
        Some((id, removed))
    }

    pub fn commit(&mut self) -> Result<CommitOutcome, FormError> {
        let outcome = self.form.commit(&mut self.store)?;
        self.details_row = None;
        Ok(outcome)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(IdScheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: [&str; 5] = ["Alice", "1 Main St", "01-01-1990", "F", "Engineer"];
    const BOB: [&str; 5] = ["Bob", "2 High St", "02-02-1985", "M", "Designer"];

    fn fill(roster: &mut Roster, values: [&str; 5]) {
        for (field, value) in FormField::ALL.into_iter().zip(values) {
            roster.set_field(field, value.to_string());
        }
    }

    fn add(roster: &mut Roster, values: [&str; 5]) {
        roster.open_for_add();
        fill(roster, values);
        roster.commit().unwrap();
    }

    #[test]
    fn delete_closes_open_details() {
        let mut roster = Roster::default();
        add(&mut roster, ALICE);
        add(&mut roster, BOB);

        roster.show_details(0);
        assert_eq!(roster.details_employee().map(|e| e.name.as_str()), Some("Alice"));

        // Row 0 still exists afterwards, yet the modal must close
        assert_eq!(roster.delete_at(1), Some((2, 1)));
        assert!(roster.details_employee().is_none());
    }

    #[test]
    fn successful_commit_closes_open_details() {
        let mut roster = Roster::default();
        add(&mut roster, ALICE);

        roster.show_details(0);
        add(&mut roster, BOB);
        assert!(roster.details_employee().is_none());

        roster.show_details(0);
        assert_eq!(roster.open_for_edit(0), Some(1));
        roster.set_field(FormField::Role, "Manager".to_string());
        roster.commit().unwrap();
        assert!(roster.details_employee().is_none());
        assert_eq!(roster.store().employees()[0].role, "Manager");
    }

    #[test]
    fn refused_commit_keeps_details() {
        let mut roster = Roster::default();
        add(&mut roster, ALICE);

        roster.show_details(0);
        roster.open_for_add();
        assert!(roster.commit().is_err());
        assert_eq!(roster.details_employee().map(|e| e.id), Some(1));
        assert!(roster.form().is_open());
    }

    #[test]
    fn delete_of_missing_row_is_noop() {
        let mut roster = Roster::default();
        add(&mut roster, ALICE);
        roster.show_details(0);

        assert_eq!(roster.delete_at(5), None);
        assert_eq!(roster.store().len(), 1);
        assert_eq!(roster.details_employee().map(|e| e.id), Some(1));
    }

    #[test]
    fn details_for_missing_row_ignored() {
        let mut roster = Roster::default();
        roster.show_details(0);
        assert!(roster.details_employee().is_none());
    }

    #[test]
    fn cancel_discards_edits() {
        let mut roster = Roster::default();
        add(&mut roster, ALICE);

        roster.open_for_edit(0);
        assert!(roster.set_field(FormField::Name, "Alicia".to_string()));
        assert!(!roster.set_field(FormField::Name, "Alicia".to_string()));
        assert!(roster.cancel());
        assert!(!roster.cancel());
        assert_eq!(roster.store().employees()[0].name, "Alice");
        assert!(!roster.set_field(FormField::Name, "Zed".to_string()));
    }
}
