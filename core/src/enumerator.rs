//! Depth-first enumeration of **digit combinations**.
//!
//! Finds every set of `length` distinct digits from 1 to 9 whose sum is
//! `total`, the way a Kakuro run is filled in. Each combination is reported
//! once, in strictly increasing order, and the combinations themselves come
//! out in lexicographic order.
//!
//! Duplicates are ruled out by construction: every level of the search only
//! tries digits larger than the last one chosen, so no seen-set is needed.
//! Branches that can no longer reach `total` are cut early.

use std::ops::ControlFlow;

use tracing::debug;

use crate::combination::Combination;

pub const MIN_DIGIT: u8 = 1;
pub const MAX_DIGIT: u8 = 9;

/// Longest combination the digit alphabet allows.
pub const MAX_LENGTH: usize = (MAX_DIGIT - MIN_DIGIT + 1) as usize;

/// What to look for: `length` distinct digits adding up to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchRequest {
    pub length: usize,
    pub total: u64,
}

impl SearchRequest {
    pub fn new(length: usize, total: u64) -> Self {
        Self { length, total }
    }

    /// Lengths outside `1..=9` are accepted but can never match anything.
    pub fn length_in_range(&self) -> bool {
        (1..=MAX_LENGTH).contains(&self.length)
    }
}

/// Collects every combination matching the request.
///
/// Returns an empty vector when nothing matches, including for lengths
/// outside `1..=9` and a zero total.
pub fn enumerate(length: usize, total: u64) -> Vec<Combination> {
    let mut found: Vec<Combination> = Vec::new();

    let flow = for_each(SearchRequest::new(length, total), |combination| {
        found.push(combination);
        ControlFlow::Continue(())
    });
    debug_assert!(flow.is_continue());

    debug!(length, total, found = found.len(), "enumeration finished");
    found
}

/// Drives the search, handing each combination to `visit` as soon as it is
/// found. Returning [`ControlFlow::Break`] from `visit` stops the search and
/// is passed back to the caller.
pub fn for_each<F>(request: SearchRequest, mut visit: F) -> ControlFlow<()>
where
    F: FnMut(Combination) -> ControlFlow<()>,
{
    if !request.length_in_range() {
        return ControlFlow::Continue(());
    }

    let mut path: Vec<u8> = Vec::with_capacity(request.length);
    descend(&mut path, MIN_DIGIT, 0, &request, &mut visit)
}

fn descend<F>(
    path: &mut Vec<u8>,
    start: u8,
    sum: u64,
    request: &SearchRequest,
    visit: &mut F,
) -> ControlFlow<()>
where
    F: FnMut(Combination) -> ControlFlow<()>,
{
    if path.len() == request.length {
        if sum == request.total {
            // the path buffer keeps changing, report a copy
            return visit(Combination::from_path(path));
        }
        return ControlFlow::Continue(());
    }

    let remaining: usize = request.length - path.len();

    for digit in start..=MAX_DIGIT {
        let available: usize = usize::from(MAX_DIGIT - digit) + 1;
        if available < remaining {
            break;
        }

        // Candidates only grow from here, so once the cheapest completion
        // overshoots, every later digit does too.
        if sum + smallest_run(digit, remaining) > request.total {
            break;
        }

        if sum + u64::from(digit) + largest_run(remaining - 1) < request.total {
            continue;
        }

        path.push(digit);
        let flow = descend(path, digit + 1, sum + u64::from(digit), request, visit);
        path.pop();

        if flow.is_break() {
            return flow;
        }
    }

    ControlFlow::Continue(())
}

/// Sum of `count` consecutive digits starting at `first`.
fn smallest_run(first: u8, count: usize) -> u64 {
    let first: u64 = u64::from(first);
    let count: u64 = count as u64;
    count * first + count * count.saturating_sub(1) / 2
}

/// Sum of the `count` largest digits.
fn largest_run(count: usize) -> u64 {
    let top: u64 = u64::from(MAX_DIGIT);
    let count: u64 = count as u64;
    count * top - count * count.saturating_sub(1) / 2
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
