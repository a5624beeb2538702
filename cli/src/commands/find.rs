use std::io;

use combi_common::config::Config;
use combi_core::finder::Finder;
use tracing::debug;

use crate::session::Session;

pub async fn find(cfg: &Config) -> anyhow::Result<()> {
    let finder: Finder = Finder::from_config(cfg);
    debug!(strategy = ?finder.strategy(), "starting interactive session");

    // stdout stays unlocked, the subscriber writes to it as well
    Session::new(io::stdin().lock(), io::stdout(), finder).run().await
}
