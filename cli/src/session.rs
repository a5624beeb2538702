//! The interactive read-validate-search loop behind `combi find`.
//!
//! The loop is a small state machine:
//!
//! ```text
//! PromptingLength -> PromptingTotal -> Searching -> Reporting -> PromptingLength
//!        |                 |
//!        +-----------------+--> Exiting
//! ```
//!
//! An invalid reply at either prompt sends the loop back to
//! `PromptingLength`. The exit keyword or the end of input moves it to
//! `Exiting`. I/O errors end the session with an error.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::Context;
use combi_common::input::{self, EXIT_KEYWORD, Reply};
use combi_core::combination::Combination;
use combi_core::enumerator::{MAX_LENGTH, SearchRequest};
use combi_core::finder::Finder;
use tracing::{debug, warn};

use crate::report;

pub const FAREWELL: &str = "Exiting the program. Goodbye!";

#[derive(Debug)]
enum State {
    PromptingLength,
    PromptingTotal { length: u64 },
    Searching { request: SearchRequest },
    Reporting { found: Vec<Combination> },
    Exiting,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Length,
    Total,
}

impl Field {
    fn prompt(self) -> &'static str {
        match self {
            Field::Length => "Enter the length of the combination (l): ",
            Field::Total => "Enter the total sum of the combination (t): ",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Length => write!(f, "length"),
            Field::Total => write!(f, "total"),
        }
    }
}

enum Answer {
    Value(u64),
    Exit,
    Retry,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    finder: Finder,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, finder: Finder) -> Self {
        Self {
            input,
            output,
            finder,
        }
    }

    /// Runs until the user leaves or the input ends.
    pub async fn run(mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Enter `{EXIT_KEYWORD}` anytime to quit the program.")?;

        let mut state: State = State::PromptingLength;

        loop {
            state = match state {
                State::PromptingLength => {
                    writeln!(self.output)?;
                    match self.ask(Field::Length)? {
                        Answer::Value(length) => State::PromptingTotal { length },
                        Answer::Exit => State::Exiting,
                        Answer::Retry => State::PromptingLength,
                    }
                }
                State::PromptingTotal { length } => match self.ask(Field::Total)? {
                    Answer::Value(total) => State::Searching {
                        request: to_request(length, total),
                    },
                    Answer::Exit => State::Exiting,
                    Answer::Retry => State::PromptingLength,
                },
                State::Searching { request } => {
                    if !request.length_in_range() {
                        warn!(
                            "A combination holds at most {MAX_LENGTH} distinct digits, {} is too long",
                            request.length
                        );
                    }
                    let found: Vec<Combination> = self.finder.find(request).await?;
                    State::Reporting { found }
                }
                State::Reporting { found } => {
                    report::write_combinations(&mut self.output, &found)?;
                    State::PromptingLength
                }
                State::Exiting => {
                    writeln!(self.output, "{FAREWELL}")?;
                    self.output.flush()?;
                    return Ok(());
                }
            };
        }
    }

    fn ask(&mut self, field: Field) -> anyhow::Result<Answer> {
        write!(self.output, "{}", field.prompt())?;
        self.output.flush()?;

        // raw bytes: a line that is not UTF-8 is just another bad reply
        let mut raw: Vec<u8> = Vec::new();
        let read: usize = self
            .input
            .read_until(b'\n', &mut raw)
            .with_context(|| format!("failed to read the {field}"))?;

        if read == 0 {
            debug!("input closed while waiting for the {field}");
            writeln!(self.output)?;
            return Ok(Answer::Exit);
        }

        let line = String::from_utf8_lossy(&raw);

        match input::read_reply(&line) {
            Ok(Reply::Exit) => Ok(Answer::Exit),
            Ok(Reply::Value(value)) => Ok(Answer::Value(value)),
            Err(e) => {
                writeln!(
                    self.output,
                    "Invalid input for {field}: {e}. Please enter a positive integer."
                )?;
                Ok(Answer::Retry)
            }
        }
    }
}

/// Lengths too large for `usize` are out of range either way.
fn to_request(length: u64, total: u64) -> SearchRequest {
    SearchRequest::new(usize::try_from(length).unwrap_or(usize::MAX), total)
}
