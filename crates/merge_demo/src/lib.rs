use std::io::{self, Write};

use merge_sort::{SortError, merge_sort};
use thiserror::Error;
use tracing::info;

pub const DEMO_INPUT: [i32; 8] = [8, 4, 2, 1, 7, 6, 5, 4];

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("sort failed: {0}")]
    Sort(#[from] SortError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub fn format_line(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the demo input, sorts it, then writes the sorted sequence.
pub fn run<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let mut data = DEMO_INPUT;
    writeln!(out, "{}", format_line(&data))?;

    merge_sort(&mut data)?;
    info!(len = data.len(), "sorted demo input");

    writeln!(out, "{}", format_line(&data))?;
    out.flush()?;
    Ok(())
}
