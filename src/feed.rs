use serde::{Deserialize, Serialize};

use crate::error::FeedResult;

/// Which tactical side took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideResult {
    #[serde(rename = "t")]
    TWin,
    #[serde(rename = "ct")]
    CtWin,
}

/// One round as reported by the feed. `side_result` is `None` when the page
/// carried no unambiguous winner marker for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u32,
    #[serde(default)]
    pub side_result: Option<SideResult>,
}

/// Round-1 side hint read from the match page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartingSide {
    Team1Attacking,
    Team2Attacking,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatch {
    pub match_id: u32,
    pub team1: String,
    pub team2: String,
    #[serde(default)]
    pub starting_side: StartingSide,
    #[serde(default)]
    pub rounds: Vec<RoundRecord>,
}

/// Source of raw per-round match data.
///
/// Implementations are blocking; the ingestion stage calls them one match at
/// a time.
pub trait RoundFeed {
    /// Match ids for a team, most recent first.
    fn recent_match_ids(&self, team_id: u32) -> FeedResult<Vec<u32>>;

    fn match_rounds(&self, match_id: u32) -> FeedResult<RawMatch>;

    fn team_name(&self, team_id: u32) -> FeedResult<String>;
}

impl<F: RoundFeed + ?Sized> RoundFeed for &F {
    fn recent_match_ids(&self, team_id: u32) -> FeedResult<Vec<u32>> {
        (**self).recent_match_ids(team_id)
    }

    fn match_rounds(&self, match_id: u32) -> FeedResult<RawMatch> {
        (**self).match_rounds(match_id)
    }

    fn team_name(&self, team_id: u32) -> FeedResult<String> {
        (**self).team_name(team_id)
    }
}
