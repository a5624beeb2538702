//! The inverted triangle printer.
//!
//! Row `k` (counting from one) is indented by `k` spaces and holds
//! `n - k + 1` asterisks separated by single spaces:
//!
//! ```text
//!  * * *
//!   * *
//!    *
//! ```
//!
//! Rows are produced lazily and render themselves without allocating, so
//! the output can be streamed for any size.

use std::fmt;

/// One line of the triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    indent: u64,
    stars: u64,
}

impl Row {
    pub fn indent(&self) -> u64 {
        self.indent
    }

    pub fn stars(&self) -> u64 {
        self.stars
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.indent {
            f.write_str(" ")?;
        }
        for idx in 0..self.stars {
            if idx > 0 {
                f.write_str(" ")?;
            }
            f.write_str("*")?;
        }
        Ok(())
    }
}

/// Rows of a triangle of size `n`, widest first. Non-positive sizes give no rows.
pub fn inverted_triangle(n: i64) -> impl Iterator<Item = Row> {
    let n: u64 = n.max(0).unsigned_abs();
    (1..=n).rev().map(move |stars| Row {
        indent: n - stars + 1,
        stars,
    })
}
