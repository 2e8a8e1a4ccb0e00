//! Plain-text inputs: whitespace-delimited tokens read from an owned handle.
//!
//! Employee files hold records as four consecutive tokens; sample files hold
//! one number per token. Handles are dropped (and closed) with their reader.

mod records;
mod samples;
mod tokens;

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use tracing::debug;

pub use records::{LoadPolicy, LoadReport, RawRecord, RecordReader, load_employees};
pub use samples::read_samples;
pub use tokens::Tokens;

pub fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("unable to open input file {}", path.display()))?;
    debug!(path = %path.display(), "input file opened");
    Ok(BufReader::new(file))
}
