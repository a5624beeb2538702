use std::time::Instant;

use combi_common::config::Config;
use tracing::debug;

use crate::combination::Combination;
use crate::enumerator::{self, SearchRequest};
use crate::stream;

/// How a search is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Plain recursion on the calling task.
    DepthFirst,
    /// Producer task feeding a bounded channel of the given capacity.
    Channelled { capacity: usize },
}

impl From<&Config> for Strategy {
    fn from(cfg: &Config) -> Self {
        if cfg.channelled {
            Strategy::Channelled {
                capacity: cfg.capacity,
            }
        } else {
            Strategy::DepthFirst
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Finder {
    strategy: Strategy,
}

impl Finder {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Strategy::from(cfg))
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub async fn find(&self, request: SearchRequest) -> anyhow::Result<Vec<Combination>> {
        let start_time: Instant = Instant::now();

        let found: Vec<Combination> = match self.strategy {
            Strategy::DepthFirst => enumerator::enumerate(request.length, request.total),
            Strategy::Channelled { capacity } => stream::collect(request, capacity).await?,
        };

        debug!(
            length = request.length,
            total = request.total,
            strategy = ?self.strategy,
            found = found.len(),
            elapsed_us = start_time.elapsed().as_micros() as u64,
            "search complete"
        );

        Ok(found)
    }
}

impl Default for Finder {
    fn default() -> Self {
        Self::new(Strategy::DepthFirst)
    }
}
