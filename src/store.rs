//! In-memory employee list
//!
//! Every mutation builds a fresh `Vec` and swaps it in with a single
//! assignment, so readers never observe a half-applied change.

use crate::config::IdScheme;
use crate::models::{Employee, EmployeeFields, EmployeeId};

#[derive(Debug, Clone)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
    id_scheme: IdScheme,
    // Only advanced under `IdScheme::Monotonic`
    next_serial: EmployeeId,
}

impl EmployeeStore {
    pub fn new(id_scheme: IdScheme) -> Self {
        Self {
            employees: Vec::new(),
            id_scheme,
            next_serial: 1,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.employees.get(index)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Id the next record built from the form will receive
    pub fn next_id(&self) -> EmployeeId {
        match self.id_scheme {
            IdScheme::ListLength => self.employees.len() as EmployeeId + 1,
            IdScheme::Monotonic => self.next_serial,
        }
    }

    /// Build a record with `next_id()` and append it
    pub fn create(&mut self, fields: EmployeeFields) -> Employee {
        let employee = Employee::new(self.next_id(), fields);
        self.add(employee.clone());
        employee
    }

    /// Append `employee` to the end of the list
    pub fn add(&mut self, employee: Employee) {
        if employee.id >= self.next_serial {
            self.next_serial = employee.id + 1;
        }
        let mut next = self.employees.clone();
        next.push(employee);
        self.employees = next;
    }

    /// Replace every record whose id matches; returns how many were replaced
    pub fn update(&mut self, id: EmployeeId, fields: &EmployeeFields) -> usize {
        let mut replaced = 0;
        self.employees = self
            .employees
            .iter()
            .map(|employee| {
                if employee.id == id {
                    replaced += 1;
                    employee.with_fields(fields.clone())
                } else {
                    employee.clone()
                }
            })
            .collect();
        replaced
    }

    /// Remove every record whose id matches; returns how many were removed
    pub fn remove(&mut self, id: EmployeeId) -> usize {
        let before = self.employees.len();
        self.employees = self
            .employees
            .iter()
            .filter(|employee| employee.id != id)
            .cloned()
            .collect();
        before - self.employees.len()
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new(IdScheme::default())
    }
}
