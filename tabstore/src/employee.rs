use core::fmt;

use thiserror::Error;

use crate::constants::{MAX_ID, MAX_NAME_LENGTH, MAX_SALARY, MIN_ID, MIN_SALARY};

/// A six-digit employee id.
pub type EmployeeId = u32;

/// A whole-unit salary.
pub type Salary = u32;

/// Which of the two name fields a validation error refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NameField {
    First,
    Last,
}

impl NameField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first name",
            Self::Last => "last name",
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A field value that breaks one of the record invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyName(NameField),
    #[error("{field} is {len} characters long (max {max})", max = MAX_NAME_LENGTH)]
    NameTooLong { field: NameField, len: usize },
    #[error("salary {0} is not a whole number")]
    NonIntegralSalary(f64),
    #[error("salary {0} is outside {min}..={max}", min = MIN_SALARY, max = MAX_SALARY)]
    SalaryOutOfRange(f64),
    #[error("id {0} is outside {min}..={max}", min = MIN_ID, max = MAX_ID)]
    IdOutOfRange(i64),
}

/// One row of the employee table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: Salary,
}

impl Employee {
    /// Build a record from externally supplied fields, checking every field
    /// invariant except id uniqueness.
    pub fn from_parts(
        id: i64,
        first_name: &str,
        last_name: &str,
        salary: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: validate_id(id)?,
            first_name: validate_name(NameField::First, first_name)?,
            last_name: validate_name(NameField::Last, last_name)?,
            salary: validate_salary(salary as f64)?,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Candidate for `EmployeeStore::add`. The salary is kept as entered so that
/// fractional input can be rejected rather than truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
}

impl NewEmployee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, salary: f64) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
        }
    }
}

/// Partial update: only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub salary: Option<f64>,
}

pub fn validate_id(id: i64) -> Result<EmployeeId, ValidationError> {
    if id < i64::from(MIN_ID) || id > i64::from(MAX_ID) {
        return Err(ValidationError::IdOutOfRange(id));
    }
    Ok(id as EmployeeId)
}

pub fn validate_name(field: NameField, name: &str) -> Result<String, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName(field));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong { field, len });
    }
    Ok(name.to_owned())
}

/// Accept a salary only if it is a whole number inside the allowed range.
pub fn validate_salary(raw: f64) -> Result<Salary, ValidationError> {
    if !raw.is_finite() || raw.fract() != 0.0 {
        return Err(ValidationError::NonIntegralSalary(raw));
    }
    if raw < f64::from(MIN_SALARY) || raw > f64::from(MAX_SALARY) {
        return Err(ValidationError::SalaryOutOfRange(raw));
    }
    Ok(raw as Salary)
}
