use serde::{Deserialize, Serialize};

use crate::feed::{RawMatch, SideResult};
use crate::side::{SideRules, side_state};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRound {
    pub round_number: u32,
    pub winner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMatch {
    pub match_id: u32,
    pub rounds: Vec<ResolvedRound>,
}

pub fn round_winner<'a>(
    side_result: SideResult,
    team1_attacking: bool,
    team1: &'a str,
    team2: &'a str,
) -> &'a str {
    let team1_won = match side_result {
        SideResult::TWin => team1_attacking,
        SideResult::CtWin => !team1_attacking,
    };
    if team1_won { team1 } else { team2 }
}

/// Resolves every round with a side result to the winning team name, keeping
/// input order. Rounds without a result are dropped.
pub fn resolve_match(raw: &RawMatch, rules: &SideRules) -> ResolvedMatch {
    let team1_at_start = raw.starting_side.resolve(raw.match_id);

    let rounds = raw
        .rounds
        .iter()
        .filter_map(|record| {
            let side_result = record.side_result?;
            let team1_attacking = side_state(record.round_number, team1_at_start, rules);
            let winner = round_winner(side_result, team1_attacking, &raw.team1, &raw.team2);
            Some(ResolvedRound {
                round_number: record.round_number,
                winner: winner.to_string(),
            })
        })
        .collect::<Vec<_>>();

    let dropped = raw.rounds.len() - rounds.len();
    if dropped > 0 {
        tracing::debug!(match_id = raw.match_id, dropped, "rounds without a result dropped");
    }

    ResolvedMatch {
        match_id: raw.match_id,
        rounds,
    }
}
