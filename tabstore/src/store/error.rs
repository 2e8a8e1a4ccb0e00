use thiserror::Error;

use crate::{
    constants::MAX_EMPLOYEES,
    employee::{EmployeeId, ValidationError},
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("cannot add more employees: maximum capacity of {max} reached", max = MAX_EMPLOYEES)]
    CapacityExceeded,
    #[error("employee with id {0} not found")]
    NotFound(EmployeeId),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The next id would not fit in six digits.
    #[error("no ids left: next id would be {0}")]
    IdSpaceExhausted(EmployeeId),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
