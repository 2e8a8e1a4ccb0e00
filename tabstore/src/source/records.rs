use std::io::BufRead;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{constants::MAX_EMPLOYEES, employee::Employee, source::Tokens, store::EmployeeStore};

/// Four consecutive tokens: `id first_name last_name salary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub salary: i64,
}

/// Yields complete records until a tuple cannot be parsed.
///
/// A short tuple at end of input, or an integer field that does not parse,
/// ends the stream without an error. Only I/O failures are errors.
#[derive(Debug)]
pub struct RecordReader<R> {
    tokens: Tokens<R>,
    position: usize,
    finished: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            tokens: Tokens::new(reader),
            position: 0,
            finished: false,
        }
    }

    /// 1-based index of the last record yielded.
    pub fn position(&self) -> usize {
        self.position
    }

    fn read_tuple(&mut self) -> Result<Option<RawRecord>> {
        let record = self.position + 1;
        let Some(id) = self.field(0)? else {
            return Ok(None);
        };
        let Some(id) = parse_int(record, "id", &id) else {
            return Ok(None);
        };
        let Some(first_name) = self.field(1)? else {
            return Ok(None);
        };
        let Some(last_name) = self.field(2)? else {
            return Ok(None);
        };
        let Some(salary) = self.field(3)? else {
            return Ok(None);
        };
        let Some(salary) = parse_int(record, "salary", &salary) else {
            return Ok(None);
        };
        Ok(Some(RawRecord {
            id,
            first_name,
            last_name,
            salary,
        }))
    }

    fn field(&mut self, index: usize) -> Result<Option<String>> {
        let token = self.tokens.next().transpose()?;
        if token.is_none() && index > 0 {
            debug!(fields = index, "partial record at end of input ignored");
        }
        Ok(token)
    }
}

fn parse_int(record: usize, field: &'static str, token: &str) -> Option<i64> {
    match token.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(record, field, token, "not an integer; stopping");
            None
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_tuple() {
            Ok(Some(record)) => {
                self.position += 1;
                Some(Ok(record))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// What to do with a tuple that breaks a field invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Skip it and keep reading.
    #[default]
    Lenient,
    /// Abort the load.
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    /// Valid tuples left out because the store was full. Invalid tuples past
    /// capacity still count as skipped, or fail a strict load.
    pub dropped: usize,
}

/// Read every tuple from `reader` into a new store, sorted by id.
pub fn load_employees<R: BufRead>(
    reader: R,
    policy: LoadPolicy,
) -> Result<(EmployeeStore, LoadReport)> {
    let mut records = Vec::new();
    let mut report = LoadReport::default();
    let mut tuples = RecordReader::new(reader);

    while let Some(raw) = tuples.next() {
        let raw = raw?;
        let position = tuples.position();
        match Employee::from_parts(raw.id, &raw.first_name, &raw.last_name, raw.salary) {
            Ok(_) if records.len() == MAX_EMPLOYEES => report.dropped += 1,
            Ok(employee) => records.push(employee),
            Err(err) if policy == LoadPolicy::Lenient => {
                warn!(record = position, error = %err, "invalid record skipped");
                report.skipped += 1;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("record {position} is invalid"));
            }
        }
    }

    if report.dropped > 0 {
        warn!(
            dropped = report.dropped,
            max = MAX_EMPLOYEES,
            "input holds more records than the store can take"
        );
    }
    report.loaded = records.len();
    let store = EmployeeStore::from_loaded(records)?;
    info!(
        loaded = report.loaded,
        skipped = report.skipped,
        "employees loaded"
    );
    Ok((store, report))
}
