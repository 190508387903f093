//! Data models for the Employee Database GUI

/// Identifier carried by every employee record.
///
/// Not guaranteed unique: the default id scheme derives it from the list
/// length, so deleting and re-adding can hand out an id that was seen before.
pub type EmployeeId = u32;

/// One employee entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub gender: String,
    /// Free text, expected as DD-MM-YYYY
    pub date_of_birth: String,
    pub address: String,
    pub role: String,
}

impl Employee {
    pub fn new(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            gender: fields.gender,
            date_of_birth: fields.date_of_birth,
            address: fields.address,
            role: fields.role,
        }
    }

    /// Copy of this record carrying `fields`, keeping the id
    pub fn with_fields(&self, fields: EmployeeFields) -> Self {
        Self::new(self.id, fields)
    }

    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            address: self.address.clone(),
            date_of_birth: self.date_of_birth.clone(),
            gender: self.gender.clone(),
            role: self.role.clone(),
        }
    }
}

/// The five editable text fields of a record, without the id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFields {
    pub name: String,
    pub address: String,
    pub date_of_birth: String,
    pub gender: String,
    pub role: String,
}

impl EmployeeFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Address => &self.address,
            FormField::DateOfBirth => &self.date_of_birth,
            FormField::Gender => &self.gender,
            FormField::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Address => self.address = value,
            FormField::DateOfBirth => self.date_of_birth = value,
            FormField::Gender => self.gender = value,
            FormField::Role => self.role = value,
        }
    }

    /// Fields that are empty or whitespace-only, in form order
    pub fn blank_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| is_blank(self.get(*field)))
            .collect()
    }
}

/// Input fields of the employee form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Address,
    DateOfBirth,
    Gender,
    Role,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Address,
        FormField::DateOfBirth,
        FormField::Gender,
        FormField::Role,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Enter name",
            FormField::Address => "Enter Address",
            FormField::DateOfBirth => "Enter DOB (DD-MM-YYYY)",
            FormField::Gender => "Enter Gender",
            FormField::Role => "Enter Role",
        }
    }

    /// Short name used in log lines and the "Please fill in" note
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Address => "address",
            FormField::DateOfBirth => "date of birth",
            FormField::Gender => "gender",
            FormField::Role => "role",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Empty or whitespace-only
pub fn is_blank(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

/// Whether `value`, as typed, parses as a DD-MM-YYYY calendar date
pub fn looks_like_date_of_birth(value: &str) -> bool {
    chrono::NaiveDate::parse_from_str(value, "%d-%m-%Y").is_ok()
}

/// Hint shown under the form when the DOB isn't DD-MM-YYYY.
///
/// Purely advisory: commit never consults it.
pub fn date_of_birth_hint(enabled: bool, date_of_birth: &str) -> Option<&'static str> {
    if !enabled || is_blank(date_of_birth) || looks_like_date_of_birth(date_of_birth) {
        None
    } else {
        Some("Expected DD-MM-YYYY")
    }
}
