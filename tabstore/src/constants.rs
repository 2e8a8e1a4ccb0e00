/// Smallest id the store will hand out or accept.
pub const MIN_ID: u32 = 100_000;
/// Largest six-digit id.
pub const MAX_ID: u32 = 999_999;

pub const MIN_SALARY: u32 = 30_000;
pub const MAX_SALARY: u32 = 150_000;

/// Maximum length of a first or last name, in characters.
pub const MAX_NAME_LENGTH: usize = 64;

/// Hard cap on the number of records held by an `EmployeeStore`.
pub const MAX_EMPLOYEES: usize = 1024;

/// Initial buffer size for a sample set read from a file (grown on demand).
pub const INITIAL_SAMPLE_CAPACITY: usize = 20;
