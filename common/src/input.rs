//! # Prompt Replies
//!
//! Turns raw lines typed at the interactive prompts into something the
//! session can act on. A reply is either the exit keyword or a positive
//! integer; anything else is an [`InputError`].

use tracing::debug;

use crate::error::InputError;

/// Keyword that ends the interactive loop at any prompt (case-insensitive).
pub const EXIT_KEYWORD: &str = "done";

/// A usable reply to a numeric prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The user asked to leave.
    Exit,
    /// A strictly positive integer.
    Value(u64),
}

/// Returns `true` when the line is the exit keyword, ignoring case and
/// surrounding whitespace.
pub fn is_exit_keyword(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(EXIT_KEYWORD)
}

/// Parses a strictly positive integer.
///
/// Leading and trailing whitespace is ignored. A leading `+` is accepted,
/// zero and negative numbers are rejected.
pub fn parse_positive(raw: &str) -> Result<u64, InputError> {
    let trimmed: &str = raw.trim();

    let value: i64 = trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotAnInteger(trimmed.to_string()))?;

    if value < 1 {
        return Err(InputError::NotPositive(value));
    }

    // value >= 1 so the conversion cannot fail
    Ok(value.unsigned_abs())
}

/// Classifies a raw prompt line. The exit keyword wins over parsing.
pub fn read_reply(raw: &str) -> Result<Reply, InputError> {
    if is_exit_keyword(raw) {
        return Ok(Reply::Exit);
    }

    parse_positive(raw).map(Reply::Value).inspect_err(|e| {
        debug!("rejected prompt reply: {e}");
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
