use std::path::PathBuf;

use anyhow::{Result, anyhow};

use vlr_momentum::analysis::analyze_team;
use vlr_momentum::config::AppConfig;
use vlr_momentum::fixture_feed::FixtureFeed;
use vlr_momentum::ingest::collect_matches;
use vlr_momentum::logging;
use vlr_momentum::report;

// Replays a recorded team history through the full pipeline without network
// access. Usage: replay <fixture.json> [match_count]
fn main() -> Result<()> {
    let cfg = AppConfig::load();
    logging::init(cfg.log_level);

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("usage: replay <fixture.json> [match_count]"))?;
    let feed = FixtureFeed::load(&path)?;
    let count = args
        .next()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or_else(|| feed.match_count());

    let summary = collect_matches(&feed, feed.team_id(), count, &cfg.side_rules)?;
    print!("{}", report::render(&analyze_team(&summary)));
    Ok(())
}
