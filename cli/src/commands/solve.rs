use std::io;
use std::time::{Duration, Instant};

use colored::*;
use combi_common::config::Config;
use combi_core::combination::Combination;
use combi_core::enumerator::{MAX_LENGTH, SearchRequest};
use combi_core::finder::Finder;
use tracing::warn;

use crate::report;
use crate::terminal::{colors, print};

pub async fn solve(length: u64, total: u64, cfg: &Config) -> anyhow::Result<()> {
    let request = SearchRequest::new(usize::try_from(length).unwrap_or(usize::MAX), total);
    if !request.length_in_range() {
        warn!("A combination holds at most {MAX_LENGTH} distinct digits, {length} is too long");
    }

    let start_time: Instant = Instant::now();
    let found: Vec<Combination> = Finder::from_config(cfg).find(request).await?;

    report::write_combinations(&mut io::stdout(), &found)?;
    print_summary(found.len(), start_time.elapsed(), cfg);
    Ok(())
}

fn print_summary(count: usize, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let unit: &str = if count == 1 { "combination" } else { "combinations" };
    let count: ColoredString = format!("{count} {unit}").bold().green();
    let total_time: ColoredString = format!("{:.3}ms", total_time.as_secs_f64() * 1_000.0)
        .bold()
        .yellow();

    print::fat_separator();
    let output: ColoredString =
        format!("Search Complete: {count} found in {total_time}").color(colors::TEXT_DEFAULT);
    print::centerln(&output.to_string());
}
