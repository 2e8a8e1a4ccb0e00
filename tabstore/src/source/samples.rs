use std::io::BufRead;

use anyhow::Result;
use tracing::{debug, warn};

use crate::{constants::INITIAL_SAMPLE_CAPACITY, source::Tokens, stats::Dataset};

/// Read one `f64` per token until end of input or the first token that is
/// not a number.
pub fn read_samples<R: BufRead>(reader: R) -> Result<Dataset> {
    let mut samples = Vec::with_capacity(INITIAL_SAMPLE_CAPACITY);
    for token in Tokens::new(reader) {
        let token = token?;
        match token.parse::<f64>() {
            Ok(value) => samples.push(value),
            Err(_) => {
                warn!(
                    position = samples.len() + 1,
                    token = %token,
                    "not a number; stopping"
                );
                break;
            }
        }
    }
    debug!(count = samples.len(), "samples read");
    Ok(Dataset::new(samples))
}
