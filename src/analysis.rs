use crate::ingest::{IngestSummary, SkippedMatch};
use crate::maps::split_maps;
use crate::momentum::{self, StreakBuckets};
use crate::winrate::{self, Winrate};

#[derive(Debug, Clone)]
pub struct TeamReport {
    pub team_name: String,
    pub momentum: StreakBuckets,
    pub winrate: Winrate,
    pub matches_analyzed: usize,
    pub skipped: Vec<SkippedMatch>,
}

/// Momentum and round win rate for the ingested team. Pure; never touches the
/// feed.
pub fn analyze_team(summary: &IngestSummary) -> TeamReport {
    let team = summary.team_name.as_str();

    let momentum = summary
        .matches
        .iter()
        .map(|m| momentum::analyze(&split_maps(&m.rounds), team))
        .fold(StreakBuckets::default(), |acc, b| acc.merge(&b));
    let winrate = winrate::aggregate(&summary.matches, team);

    TeamReport {
        team_name: summary.team_name.clone(),
        momentum,
        winrate,
        matches_analyzed: summary.matches.len(),
        skipped: summary.skipped.clone(),
    }
}
