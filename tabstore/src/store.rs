//! In-memory employee table.
//!
//! The store owns an ordered record sequence. Order is significant: removal
//! shifts later records down instead of swapping, and ranking breaks salary
//! ties by position. Every lookup is a linear scan.

mod error;
mod ids;
mod rank;

use tracing::{debug, info};

pub use error::StoreError;
pub use ids::next_available_id;
pub use rank::rank_by_salary_desc;

use crate::{
    constants::{MAX_EMPLOYEES, MAX_ID},
    employee::{
        Employee, EmployeeId, EmployeeUpdate, NameField, NewEmployee, validate_name,
        validate_salary,
    },
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeStore {
    records: Vec<Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Take ownership of bulk-loaded records and order them by id.
    ///
    /// Ids are trusted as given; duplicates are not detected here.
    pub fn from_loaded(mut records: Vec<Employee>) -> Result<Self, StoreError> {
        if records.len() > MAX_EMPLOYEES {
            return Err(StoreError::CapacityExceeded);
        }
        records.sort_by_key(|e| e.id);
        debug!(count = records.len(), "store populated from bulk load");
        Ok(Self { records })
    }

    /// Records in sequence order.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn remaining_capacity(&self) -> usize {
        MAX_EMPLOYEES - self.records.len()
    }

    pub fn next_available_id(&self) -> EmployeeId {
        next_available_id(&self.records)
    }

    /// Validate `candidate`, give it the next id and append it.
    pub fn add(&mut self, candidate: NewEmployee) -> Result<&Employee, StoreError> {
        if self.records.len() >= MAX_EMPLOYEES {
            return Err(StoreError::CapacityExceeded);
        }
        let first_name = validate_name(NameField::First, &candidate.first_name)?;
        let last_name = validate_name(NameField::Last, &candidate.last_name)?;
        let salary = validate_salary(candidate.salary)?;

        let id = self.next_available_id();
        if id > MAX_ID {
            return Err(StoreError::IdSpaceExhausted(id));
        }

        info!(id, "employee added");
        self.records.push(Employee {
            id,
            first_name,
            last_name,
            salary,
        });
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }

    /// First record whose last name matches exactly (case-sensitive).
    pub fn find_by_last_name(&self, last_name: &str) -> Option<&Employee> {
        self.records.iter().find(|e| e.last_name == last_name)
    }

    /// Every record whose last name matches ignoring case, in sequence order.
    pub fn find_all_by_last_name(&self, last_name: &str) -> Vec<&Employee> {
        let needle = last_name.to_lowercase();
        self.records
            .iter()
            .filter(|e| e.last_name.to_lowercase() == needle)
            .collect()
    }

    /// Delete the record with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: EmployeeId) -> Result<Employee, StoreError> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        info!(id, "employee removed");
        Ok(removed)
    }

    /// Overwrite the fields present in `update`.
    ///
    /// Every present field is validated before anything is written, so a
    /// rejected update leaves the record as it was.
    pub fn update(
        &mut self,
        id: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<&Employee, StoreError> {
        let index = self.position(id)?;

        let first_name = update
            .first_name
            .as_deref()
            .map(|name| validate_name(NameField::First, name))
            .transpose()?;
        let last_name = update
            .last_name
            .as_deref()
            .map(|name| validate_name(NameField::Last, name))
            .transpose()?;
        let salary = update.salary.map(validate_salary).transpose()?;

        let record = &mut self.records[index];
        if let Some(first_name) = first_name {
            record.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            record.last_name = last_name;
        }
        if let Some(salary) = salary {
            record.salary = salary;
        }
        info!(id, "employee updated");
        Ok(&*record)
    }

    pub fn rank_by_salary_desc(&self, k: usize) -> Result<Vec<&Employee>, StoreError> {
        rank_by_salary_desc(&self.records, k)
    }

    fn position(&self, id: EmployeeId) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}
