//! Add/edit dialog state machine
//!
//! The form owns the authoritative values of the five inputs. Input widgets
//! only report edits through [`EmployeeForm::set_field`] and are re-seeded
//! from [`EmployeeForm::fields`] whenever the dialog opens or closes.

use crate::error::FormError;
use crate::models::{Employee, EmployeeFields, EmployeeId, FormField};
use crate::store::EmployeeStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogMode {
    #[default]
    Closed,
    OpenForAdd,
    OpenForEdit(EmployeeId),
}

/// What a successful commit did to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Added(Employee),
    Updated { id: EmployeeId, replaced: usize },
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    mode: DialogMode,
    fields: EmployeeFields,
    // Blank fields from the last refused commit
    missing: Vec<FormField>,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != DialogMode::Closed
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, DialogMode::OpenForEdit(_))
    }

    pub fn fields(&self) -> &EmployeeFields {
        &self.fields
    }

    pub fn missing(&self) -> &[FormField] {
        &self.missing
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Employee"
        } else {
            "Add Employee"
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.is_edit() {
            "UPDATE"
        } else {
            "SAVE"
        }
    }

    pub fn open_for_add(&mut self) {
        self.mode = DialogMode::OpenForAdd;
        self.fields = EmployeeFields::default();
        self.missing.clear();
    }

    pub fn open_for_edit(&mut self, employee: &Employee) {
        self.mode = DialogMode::OpenForEdit(employee.id);
        self.fields = employee.fields();
        self.missing.clear();
    }

    /// Apply an input edit; ignored while the dialog is closed
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        if !self.is_open() {
            return;
        }
        self.fields.set(field, value);
        self.missing.retain(|f| *f != field);
    }

    /// Close without committing; pending edits are discarded
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Validate and apply the pending values to `store`.
    ///
    /// On error nothing changes except the recorded missing fields, and the
    /// dialog stays open.
    pub fn commit(&mut self, store: &mut EmployeeStore) -> Result<CommitOutcome, FormError> {
        let mode = self.mode;
        if mode == DialogMode::Closed {
            return Err(FormError::NotOpen);
        }

        let missing = self.fields.blank_fields();
        if !missing.is_empty() {
            self.missing = missing.clone();
            return Err(FormError::Incomplete { missing });
        }

        let outcome = match mode {
            DialogMode::OpenForEdit(id) => {
                let replaced = store.update(id, &self.fields);
                CommitOutcome::Updated { id, replaced }
            }
            _ => CommitOutcome::Added(store.create(self.fields.clone())),
        };

        self.reset();
        Ok(outcome)
    }

    fn reset(&mut self) {
        self.mode = DialogMode::Closed;
        self.fields = EmployeeFields::default();
        self.missing.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut EmployeeForm, values: [&str; 5]) {
        for (field, value) in FormField::ALL.into_iter().zip(values) {
            form.set_field(field, value);
        }
    }

    fn add(form: &mut EmployeeForm, store: &mut EmployeeStore, values: [&str; 5]) -> Employee {
        form.open_for_add();
        fill(form, values);
        match form.commit(store) {
            Ok(CommitOutcome::Added(employee)) => employee,
            other => panic!("expected an add, got {other:?}"),
        }
    }

    const ALICE: [&str; 5] = ["Alice", "1 Main St", "01-01-1990", "F", "Engineer"];
    const BOB: [&str; 5] = ["Bob", "2 High St", "02-02-1985", "M", "Designer"];
    const CAROL: [&str; 5] = ["Carol", "3 Low Rd", "03-03-1970", "F", "Analyst"];

    #[test]
    fn starts_closed() {
        let form = EmployeeForm::new();
        assert_eq!(form.mode(), DialogMode::Closed);
        assert_eq!(form.confirm_label(), "SAVE");
        assert_eq!(form.title(), "Add Employee");
    }

    #[test]
    fn open_for_add_clears_fields() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();
        let alice = add(&mut form, &mut store, ALICE);

        form.open_for_edit(&alice);
        assert_eq!(form.fields().name, "Alice");
        form.cancel();

        form.open_for_add();
        assert_eq!(form.mode(), DialogMode::OpenForAdd);
        assert_eq!(form.fields(), &EmployeeFields::default());
    }

    #[test]
    fn open_for_edit_prefills_and_switches_labels() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();
        let alice = add(&mut form, &mut store, ALICE);

        form.open_for_edit(&alice);
        assert_eq!(form.mode(), DialogMode::OpenForEdit(1));
        assert_eq!(form.fields(), &alice.fields());
        assert_eq!(form.confirm_label(), "UPDATE");
        assert_eq!(form.title(), "Edit Employee");
    }

    #[test]
    fn blank_field_refuses_commit_and_stays_open() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();

        for blank_index in 0..5 {
            form.open_for_add();
            let mut values = ALICE;
            values[blank_index] = "   ";
            fill(&mut form, values);

            let err = form.commit(&mut store).unwrap_err();
            assert_eq!(
                err,
                FormError::Incomplete {
                    missing: vec![FormField::ALL[blank_index]]
                }
            );
            assert!(store.is_empty());
            assert_eq!(form.mode(), DialogMode::OpenForAdd);
            assert_eq!(form.fields().name, values[0]);
            form.cancel();
        }
    }

    #[test]
    fn refused_edit_leaves_list_untouched() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();
        let alice = add(&mut form, &mut store, ALICE);

        form.open_for_edit(&alice);
        form.set_field(FormField::Role, "");
        assert!(form.commit(&mut store).is_err());
        assert_eq!(store.employees(), &[alice.clone()]);
        assert_eq!(form.mode(), DialogMode::OpenForEdit(alice.id));
    }

    #[test]
    fn editing_clears_missing_mark() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();
        form.open_for_add();
        let _ = form.commit(&mut store);
        assert_eq!(form.missing(), &FormField::ALL);

        form.set_field(FormField::Gender, "F");
        assert!(!form.missing().contains(&FormField::Gender));
        assert_eq!(form.missing().len(), 4);
    }

    #[test]
    fn values_are_stored_untrimmed() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();
        let employee = add(&mut form, &mut store, [" Alice ", "x", "y", "z", "w"]);
        assert_eq!(employee.name, " Alice ");
    }

    #[test]
    fn free_text_date_of_birth_commits() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();
        let employee = add(&mut form, &mut store, ["Dan", "4 Elm St", "yesterday", "M", "Clerk"]);
        assert_eq!(employee.date_of_birth, "yesterday");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn commit_while_closed_is_rejected() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();
        fill(&mut form, ALICE);
        assert_eq!(form.fields(), &EmployeeFields::default());
        assert_eq!(form.commit(&mut store), Err(FormError::NotOpen));
        assert!(store.is_empty());
    }

    #[test]
    fn successful_commit_closes_and_clears() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();
        add(&mut form, &mut store, ALICE);
        assert_eq!(form.mode(), DialogMode::Closed);
        assert_eq!(form.fields(), &EmployeeFields::default());
        assert!(form.missing().is_empty());
    }

    #[test]
    fn add_edit_delete_scenario() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();

        let alice = add(&mut form, &mut store, ALICE);
        assert_eq!(alice.id, 1);
        let bob = add(&mut form, &mut store, BOB);
        assert_eq!(bob.id, 2);
        assert_eq!(store.employees(), &[alice.clone(), bob.clone()]);

        form.open_for_edit(&alice);
        form.set_field(FormField::Role, "Manager");
        assert_eq!(
            form.commit(&mut store),
            Ok(CommitOutcome::Updated { id: 1, replaced: 1 })
        );
        let mut promoted = alice.clone();
        promoted.role = "Manager".into();
        assert_eq!(store.employees(), &[promoted, bob.clone()]);

        store.remove(1);
        assert_eq!(store.employees(), &[bob]);
    }

    #[test]
    fn id_reused_after_delete() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();

        let alice = add(&mut form, &mut store, ALICE);
        store.remove(alice.id);
        assert!(store.is_empty());

        let carol = add(&mut form, &mut store, CAROL);
        assert_eq!(carol.id, 1);
    }

    #[test]
    fn edit_of_vanished_record_is_silent() {
        let mut store = EmployeeStore::default();
        let mut form = EmployeeForm::new();
        let alice = add(&mut form, &mut store, ALICE);

        form.open_for_edit(&alice);
        store.remove(alice.id);
        assert_eq!(
            form.commit(&mut store),
            Ok(CommitOutcome::Updated { id: 1, replaced: 0 })
        );
        assert!(store.is_empty());
        assert!(!form.is_open());
    }
}
