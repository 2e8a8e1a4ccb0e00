use core::fmt;

use crate::{
    employee::Employee,
    stats::{StatsError, Summary},
};

const RULE: &str = "---------------------------------------------------------------";

/// Records rendered as `NAME  SALARY  ID` rows.
#[derive(Debug)]
pub struct EmployeeTable<'a> {
    rows: Vec<&'a Employee>,
    with_count: bool,
}

impl<'a> EmployeeTable<'a> {
    pub fn new(rows: impl IntoIterator<Item = &'a Employee>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            with_count: false,
        }
    }

    /// Append a `Number of Employees` line after the closing rule.
    pub fn with_count(mut self) -> Self {
        self.with_count = true;
        self
    }
}

impl fmt::Display for EmployeeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<32}{:<12}{}", "NAME", "SALARY", "ID")?;
        writeln!(f, "{RULE}")?;
        for e in &self.rows {
            writeln!(f, "{:<32}{:<12}{}", e.full_name(), e.salary, e.id)?;
        }
        writeln!(f, "{RULE}")?;
        if self.with_count {
            writeln!(f, "Number of Employees: {}", self.rows.len())?;
        }
        Ok(())
    }
}

/// Labeled statistics report.
#[derive(Debug)]
pub struct StatsReport<'a>(pub &'a Summary);

struct Modes<'a>(&'a [f64]);

impl fmt::Display for Modes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let integral = self.0.iter().all(|m| m.fract() == 0.0);
        for m in self.0 {
            if integral {
                write!(f, " {m:.0}")?;
            } else {
                write!(f, " {m:.3}")?;
            }
        }
        Ok(())
    }
}

struct Defined<'a>(&'a Result<f64, StatsError>);

impl fmt::Display for Defined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Ok(v) => write!(f, "{v:.3}"),
            Err(e) => write!(f, "undefined ({e})"),
        }
    }
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "Results:")?;
        writeln!(f, "--------")?;
        writeln!(f, "Num values:            {}", s.count)?;
        writeln!(f, "      mean:        {:.3}", s.mean)?;
        writeln!(f, "    median:        {:.3}", s.median)?;
        writeln!(f, "    stddev:        {:.3}", s.std_dev)?;
        if s.modes.is_empty() {
            writeln!(f, "      mode:        none (all values are unique)")?;
        } else {
            writeln!(f, "   mode(s):       {}", Modes(&s.modes))?;
        }
        writeln!(f, "  geometric mean:  {}", Defined(&s.geometric_mean))?;
        writeln!(f, "  harmonic mean:   {}", Defined(&s.harmonic_mean))?;
        writeln!(f, "Unused array capacity: {}", s.unused_capacity)?;
        Ok(())
    }
}
