use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::feed::RoundFeed;
use crate::rounds::{ResolvedMatch, resolve_match};
use crate::side::SideRules;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMatch {
    pub match_id: u32,
    pub reason: String,
}

/// Everything fetched for one analysis run. Matches keep feed order.
#[derive(Debug, Clone)]
pub struct IngestSummary {
    pub team_id: u32,
    pub team_name: String,
    pub matches_requested: usize,
    pub matches: Vec<ResolvedMatch>,
    pub skipped: Vec<SkippedMatch>,
}

impl IngestSummary {
    pub fn matches_attempted(&self) -> usize {
        self.matches.len() + self.skipped.len()
    }
}

/// Fetches and resolves up to `count` of the team's most recent matches.
///
/// Failing to list matches or to read the team name aborts the run. A match
/// that fails to load is recorded in `skipped` and the rest still run.
pub fn collect_matches<F: RoundFeed>(
    feed: &F,
    team_id: u32,
    count: usize,
    rules: &SideRules,
) -> Result<IngestSummary> {
    let team_name = feed
        .team_name(team_id)
        .with_context(|| format!("failed to read name of team {team_id}"))?;
    let ids = feed
        .recent_match_ids(team_id)
        .with_context(|| format!("failed to list matches of team {team_id}"))?;
    info!(team_id, team = %team_name, listed = ids.len(), requested = count, "collecting matches");

    let mut matches = Vec::new();
    let mut skipped = Vec::new();
    for match_id in ids.into_iter().take(count) {
        match feed.match_rounds(match_id) {
            Ok(raw) => {
                let resolved = resolve_match(&raw, rules);
                info!(match_id, rounds = resolved.rounds.len(), "match resolved");
                matches.push(resolved);
            }
            Err(err) => {
                warn!(match_id, error = %err, "skipping match");
                skipped.push(SkippedMatch {
                    match_id,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(IngestSummary {
        team_id,
        team_name,
        matches_requested: count,
        matches,
        skipped,
    })
}
