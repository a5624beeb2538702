use std::io::{self, BufRead, Write};

use anyhow::Context;
use combi_core::pattern::inverted_triangle;
use tracing::debug;

pub const PROMPT: &str = "Enter an integer: ";
pub const INVALID: &str = "Invalid input. Please enter an integer.";

pub fn pattern(size: Option<i64>) -> anyhow::Result<()> {
    draw(size, io::stdin().lock(), io::stdout())
}

/// Prints the triangle for `size`, asking for it first when it is missing.
///
/// A reply that is not an integer is reported and nothing is drawn. Rows
/// are written one at a time as they are produced.
fn draw<R: BufRead, W: Write>(size: Option<i64>, mut input: R, mut output: W) -> anyhow::Result<()> {
    let size: i64 = match size {
        Some(size) => size,
        None => {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let mut raw: Vec<u8> = Vec::new();
            input.read_until(b'\n', &mut raw).context("failed to read the size")?;
            let line = String::from_utf8_lossy(&raw);

            match line.trim().parse::<i64>() {
                Ok(size) => size,
                Err(e) => {
                    debug!("rejected pattern size {:?}: {e}", line.trim());
                    writeln!(output, "{INVALID}")?;
                    return Ok(());
                }
            }
        }
    };

    for row in inverted_triangle(size) {
        writeln!(output, "{row}")?;
    }
    output.flush()?;
    Ok(())
}
