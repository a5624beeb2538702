//! Channelled enumeration.
//!
//! A producer on a blocking task walks the search and pushes every
//! combination into a bounded channel; the caller drains the receiver.
//! The producer is the only sender and closes the channel by dropping it
//! once the search is exhausted. If the receiver goes away first, the next
//! send fails and the producer stops searching.

use std::ops::ControlFlow;

use anyhow::Context;
use tokio::sync::mpsc::{self, Receiver};
use tokio::task::{self, JoinHandle};
use tracing::debug;

use crate::combination::Combination;
use crate::enumerator::{self, SearchRequest};

/// Starts a producer for `request` and returns the receiving end together
/// with the producer's handle.
///
/// A `capacity` of zero is raised to one, the closest a tokio channel gets
/// to an unbuffered hand-off.
///
/// Must be called from inside a tokio runtime.
pub fn spawn(request: SearchRequest, capacity: usize) -> (Receiver<Combination>, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel::<Combination>(capacity.max(1));

    let producer = task::spawn_blocking(move || {
        let flow = enumerator::for_each(request, |combination| match tx.blocking_send(combination) {
            Ok(()) => ControlFlow::Continue(()),
            Err(_) => ControlFlow::Break(()),
        });

        if flow.is_break() {
            debug!(?request, "receiver dropped, producer stopped early");
        }
    });

    (rx, producer)
}

/// Runs the producer and drains the channel until it closes.
///
/// Yields the same combinations, in the same order, as
/// [`enumerator::enumerate`].
pub async fn collect(request: SearchRequest, capacity: usize) -> anyhow::Result<Vec<Combination>> {
    let (mut rx, producer) = spawn(request, capacity);

    let mut found: Vec<Combination> = Vec::new();
    while let Some(combination) = rx.recv().await {
        found.push(combination);
    }

    producer
        .await
        .context("combination producer did not run to completion")?;

    Ok(found)
}
