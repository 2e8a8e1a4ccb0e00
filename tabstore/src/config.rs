//! Command-line arguments and the settings resolved from them.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::source::LoadPolicy;

/// Environment variable consulted when `--log` is not given.
pub const LOG_ENV: &str = "TABSTORE_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Employee table browser and sample statistics.
#[derive(Parser, Debug)]
#[command(name = "tabstore", version)]
pub struct Cli {
    /// Log filter in `tracing` directive syntax (e.g. `info`, `tabstore=debug`)
    #[arg(long = "log", global = true, env = LOG_ENV, default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load employee records and open the interactive menu
    Employees {
        /// File of `id first last salary` records
        file: PathBuf,

        /// Fail on the first invalid record instead of skipping it
        #[arg(long)]
        strict: bool,
    },
    /// Print descriptive statistics for a file of numbers
    Stats {
        /// Whitespace-separated numbers
        file: PathBuf,
    },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    Employees,
    Stats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub input: PathBuf,
    pub load_policy: LoadPolicy,
    pub log_filter: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let (mode, input, load_policy) = match cli.command {
            Command::Employees { file, strict } => (
                Mode::Employees,
                file,
                if strict {
                    LoadPolicy::Strict
                } else {
                    LoadPolicy::Lenient
                },
            ),
            Command::Stats { file } => (Mode::Stats, file, LoadPolicy::default()),
        };
        Self {
            mode,
            input,
            load_policy,
            log_filter: cli.log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(args: &[&str]) -> Config {
        Cli::try_parse_from(args.iter().copied())
            .map(Config::from)
            .unwrap()
    }

    #[test]
    fn employees_subcommand() {
        let c = config(&[
            "tabstore",
            "employees",
            "staff.txt",
            "--strict",
            "--log",
            "debug",
        ]);
        assert_eq!(
            c,
            Config {
                mode: Mode::Employees,
                input: PathBuf::from("staff.txt"),
                load_policy: LoadPolicy::Strict,
                log_filter: "debug".into(),
            }
        );
    }

    #[test]
    fn stats_subcommand() {
        let c = config(&["tabstore", "--log", "info", "stats", "data.txt"]);
        assert_eq!(c.mode, Mode::Stats);
        assert_eq!(c.input, PathBuf::from("data.txt"));
        assert_eq!(c.log_filter, "info");
    }

    #[test]
    fn file_is_required() {
        assert!(Cli::try_parse_from(["tabstore", "stats"]).is_err());
        assert!(Cli::try_parse_from(["tabstore"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
