//! Interactive menu over an `EmployeeStore`.
//!
//! Validation errors are handled here by asking again; the store only ever
//! sees input that already passed the field checks.

mod prompt;

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{
    constants::{MAX_SALARY, MIN_SALARY},
    employee::{
        EmployeeId, EmployeeUpdate, NameField, NewEmployee, validate_id, validate_name,
        validate_salary,
    },
    report::EmployeeTable,
    store::EmployeeStore,
};
use prompt::{Answer, Prompter};

const MENU: &str = "
Employee DB Menu:
----------------------------------
  (1) Print the Database
  (2) Lookup by ID
  (3) Lookup by Last Name
  (4) Add an Employee
  (5) Remove an Employee
  (6) Update an Employee's Information
  (7) Print the M employees with the highest salaries
  (8) Find all employees with matching last name
  (9) Quit
----------------------------------
";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Step {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    store: EmployeeStore,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: EmployeeStore, input: R, output: W) -> Self {
        Self {
            store,
            prompt: Prompter::new(input, output),
        }
    }

    pub fn into_parts(self) -> (EmployeeStore, W) {
        (self.store, self.prompt.into_output())
    }

    /// Show the menu and dispatch until the user quits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.prompt.out(), "{MENU}")?;
            let step = match self.prompt.parse::<u8>("Enter your choice: ")? {
                Answer::Closed => Step::Quit,
                Answer::Value(choice @ 1..=9) => {
                    debug!(choice, "menu choice");
                    self.dispatch(choice)?
                }
                _ => {
                    writeln!(
                        self.prompt.out(),
                        "Invalid input. Please enter a number between 1 and 9."
                    )?;
                    Step::Continue
                }
            };
            if step == Step::Quit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: u8) -> io::Result<Step> {
        match choice {
            1 => self.print_database(),
            2 => self.lookup_by_id(),
            3 => self.lookup_by_last_name(),
            4 => self.add(),
            5 => self.remove(),
            6 => self.update(),
            7 => self.highest_salaries(),
            8 => self.find_all_by_last_name(),
            _ => {
                writeln!(self.prompt.out(), "GOODBYE!")?;
                Ok(Step::Quit)
            }
        }
    }

    fn print_database(&mut self) -> io::Result<Step> {
        let table = EmployeeTable::new(self.store.records()).with_count();
        write!(self.prompt.out(), "{table}")?;
        Ok(Step::Continue)
    }

    fn lookup_by_id(&mut self) -> io::Result<Step> {
        let Some(id) = self.ask_id("Enter a 6-digit employee ID: ")? else {
            return Ok(Step::Quit);
        };
        match self.store.find_by_id(id) {
            Some(e) => write!(self.prompt.out(), "{}", EmployeeTable::new([e]))?,
            None => writeln!(
                self.prompt.out(),
                "Employee with ID {id} not found in the database."
            )?,
        }
        Ok(Step::Continue)
    }

    fn lookup_by_last_name(&mut self) -> io::Result<Step> {
        let Some(name) = self
            .prompt
            .token("Enter Employee's last name (no extra spaces): ")?
        else {
            return Ok(Step::Quit);
        };
        match self.store.find_by_last_name(&name) {
            Some(e) => write!(self.prompt.out(), "{}", EmployeeTable::new([e]))?,
            None => writeln!(
                self.prompt.out(),
                "No employees found with last name: {name}"
            )?,
        }
        Ok(Step::Continue)
    }

    fn add(&mut self) -> io::Result<Step> {
        if self.store.remaining_capacity() == 0 {
            writeln!(
                self.prompt.out(),
                "Cannot add more employees. Maximum capacity reached."
            )?;
            return Ok(Step::Continue);
        }
        let Some(first_name) = self.ask_name(NameField::First)? else {
            return Ok(Step::Quit);
        };
        let Some(last_name) = self.ask_name(NameField::Last)? else {
            return Ok(Step::Quit);
        };
        let Some(salary) = self.ask_salary("Enter employee's salary")? else {
            return Ok(Step::Quit);
        };

        writeln!(
            self.prompt.out(),
            "Do you want to add the following employee to the DB?\n\t{first_name} {last_name}, salary: {salary}"
        )?;
        let Some(confirmed) = self.prompt.confirm("Enter 1 for yes, 0 for no: ")? else {
            return Ok(Step::Quit);
        };
        if !confirmed {
            writeln!(self.prompt.out(), "Employee not added to the database.")?;
            return Ok(Step::Continue);
        }
        match self
            .store
            .add(NewEmployee::new(first_name, last_name, salary))
        {
            Ok(e) => {
                let id = e.id;
                writeln!(
                    self.prompt.out(),
                    "Employee added to the database with ID {id}."
                )?
            }
            Err(err) => writeln!(self.prompt.out(), "Employee not added: {err}.")?,
        }
        Ok(Step::Continue)
    }

    fn remove(&mut self) -> io::Result<Step> {
        if self.store.is_empty() {
            writeln!(self.prompt.out(), "No employees in the database to remove.")?;
            return Ok(Step::Continue);
        }
        let Some(id) = self.ask_existing("Enter the employee ID to remove: ")? else {
            return Ok(Step::Quit);
        };
        let Some(id) = id else {
            return Ok(Step::Continue);
        };
        let Some(confirmed) = self
            .prompt
            .confirm("Do you want to remove this employee? (1 for yes, 0 for no): ")?
        else {
            return Ok(Step::Quit);
        };
        if !confirmed {
            writeln!(self.prompt.out(), "Employee with ID {id} was not removed.")?;
            return Ok(Step::Continue);
        }
        match self.store.remove(id) {
            Ok(_) => writeln!(
                self.prompt.out(),
                "Employee with ID {id} has been removed from the database."
            )?,
            Err(err) => writeln!(self.prompt.out(), "{err}.")?,
        }
        Ok(Step::Continue)
    }

    fn update(&mut self) -> io::Result<Step> {
        if self.store.is_empty() {
            writeln!(self.prompt.out(), "No employees in the database to update.")?;
            return Ok(Step::Continue);
        }
        let Some(id) = self.ask_existing("Enter the employee ID to update: ")? else {
            return Ok(Step::Quit);
        };
        let Some(id) = id else {
            return Ok(Step::Continue);
        };
        let Some(confirmed) = self.prompt.confirm(
            "Do you want to update this employee's information? (1 for yes, 0 for no): ",
        )?
        else {
            return Ok(Step::Quit);
        };
        if !confirmed {
            writeln!(self.prompt.out(), "Employee information was not updated.")?;
            return Ok(Step::Continue);
        }

        let mut update = EmployeeUpdate::default();
        for field in [NameField::First, NameField::Last] {
            let question = format!("Do you want to update the {field}? (1 for yes, 0 for no): ");
            let Some(wanted) = self.prompt.confirm(&question)? else {
                return Ok(Step::Quit);
            };
            if !wanted {
                continue;
            }
            let Some(name) = self.ask_name(field)? else {
                return Ok(Step::Quit);
            };
            match field {
                NameField::First => update.first_name = Some(name),
                NameField::Last => update.last_name = Some(name),
            }
        }
        let Some(wanted) = self
            .prompt
            .confirm("Do you want to update the salary? (1 for yes, 0 for no): ")?
        else {
            return Ok(Step::Quit);
        };
        if wanted {
            let Some(salary) = self.ask_salary("Enter updated salary")? else {
                return Ok(Step::Quit);
            };
            update.salary = Some(salary);
        }

        match self.store.update(id, update) {
            Ok(_) => writeln!(
                self.prompt.out(),
                "Employee information updated successfully."
            )?,
            Err(err) => writeln!(self.prompt.out(), "Employee not updated: {err}.")?,
        }
        Ok(Step::Continue)
    }

    fn highest_salaries(&mut self) -> io::Result<Step> {
        if self.store.is_empty() {
            writeln!(self.prompt.out(), "No employees in the database to print.")?;
            return Ok(Step::Continue);
        }
        let m = match self
            .prompt
            .parse::<i64>("Enter the number of employees with the highest salaries to print: ")?
        {
            Answer::Closed => return Ok(Step::Quit),
            Answer::Value(m) if m > 0 => m,
            _ => {
                writeln!(
                    self.prompt.out(),
                    "Invalid value of M. Please enter a positive integer."
                )?;
                return Ok(Step::Continue);
            }
        };
        let k = usize::try_from(m).unwrap_or(usize::MAX);
        match self.store.rank_by_salary_desc(k) {
            Ok(top) => {
                let table = EmployeeTable::new(top);
                write!(
                    self.prompt.out(),
                    "Top {m} Employees with the Highest Salaries:\n\n{table}"
                )?
            }
            Err(err) => writeln!(self.prompt.out(), "{err}.")?,
        }
        Ok(Step::Continue)
    }

    fn find_all_by_last_name(&mut self) -> io::Result<Step> {
        let Some(name) = self
            .prompt
            .token("Enter the last name to search for (case-insensitive): ")?
        else {
            return Ok(Step::Quit);
        };
        let matches = self.store.find_all_by_last_name(&name);
        if matches.is_empty() {
            writeln!(
                self.prompt.out(),
                "No employees found with last name: {name}"
            )?;
        } else {
            write!(self.prompt.out(), "{}", EmployeeTable::new(matches))?;
        }
        Ok(Step::Continue)
    }

    /// Ask until a six-digit id is entered; `None` when input is closed.
    fn ask_id(&mut self, prompt: &str) -> io::Result<Option<EmployeeId>> {
        loop {
            match self.prompt.parse::<i64>(prompt)? {
                Answer::Closed => return Ok(None),
                Answer::Value(raw) => match validate_id(raw) {
                    Ok(id) => return Ok(Some(id)),
                    Err(err) => writeln!(self.prompt.out(), "Invalid input: {err}.")?,
                },
                Answer::Invalid(_) => writeln!(
                    self.prompt.out(),
                    "Invalid input. Please enter a valid 6-digit ID."
                )?,
            }
        }
    }

    /// Ask for an id and show the matching record.
    ///
    /// `Ok(None)`: input closed. `Ok(Some(None))`: no such employee.
    fn ask_existing(&mut self, prompt: &str) -> io::Result<Option<Option<EmployeeId>>> {
        let Some(id) = self.ask_id(prompt)? else {
            return Ok(None);
        };
        match self.store.find_by_id(id) {
            Some(e) => {
                let table = EmployeeTable::new([e]);
                write!(self.prompt.out(), "Employee found:\n{table}")?;
                Ok(Some(Some(id)))
            }
            None => {
                writeln!(
                    self.prompt.out(),
                    "Employee with ID {id} not found in the database."
                )?;
                Ok(Some(None))
            }
        }
    }

    fn ask_name(&mut self, field: NameField) -> io::Result<Option<String>> {
        let prompt = format!("Enter the {field} of the employee: ");
        self.prompt.until_valid(&prompt, |token| {
            validate_name(field, token).map_err(|e| e.to_string())
        })
    }

    fn ask_salary(&mut self, lead: &str) -> io::Result<Option<f64>> {
        let prompt = format!("{lead} ({MIN_SALARY} to {MAX_SALARY}): ");
        self.prompt.until_valid(&prompt, |token| {
            let raw: f64 = token
                .parse()
                .map_err(|_| format!("`{token}` is not a number"))?;
            validate_salary(raw).map_err(|e| e.to_string())?;
            Ok(raw)
        })
    }
}
