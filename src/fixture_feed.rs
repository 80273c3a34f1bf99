use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{FeedError, FeedResult};
use crate::feed::{RawMatch, RoundFeed};

/// A recorded team history, as stored in fixture files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureDocument {
    pub team_id: u32,
    pub team_name: String,
    /// Most recent first.
    #[serde(default)]
    pub matches: Vec<RawMatch>,
    /// Listed ids with no recorded data; fetching them fails.
    #[serde(default)]
    pub broken_match_ids: Vec<u32>,
}

/// In-memory feed replaying a `FixtureDocument`.
#[derive(Debug, Clone)]
pub struct FixtureFeed {
    team_id: u32,
    team_name: String,
    order: Vec<u32>,
    matches: HashMap<u32, RawMatch>,
}

impl FixtureFeed {
    pub fn from_document(doc: FixtureDocument) -> Self {
        let mut order: Vec<u32> = doc.matches.iter().map(|m| m.match_id).collect();
        order.extend(doc.broken_match_ids.iter().copied());
        let matches = doc
            .matches
            .into_iter()
            .map(|m| (m.match_id, m))
            .collect();
        Self {
            team_id: doc.team_id,
            team_name: doc.team_name,
            order,
            matches,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let doc: FixtureDocument =
            serde_json::from_str(raw.trim()).context("invalid fixture json")?;
        Ok(Self::from_document(doc))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed reading fixture {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn team_id(&self) -> u32 {
        self.team_id
    }

    pub fn match_count(&self) -> usize {
        self.order.len()
    }
}

impl RoundFeed for FixtureFeed {
    fn recent_match_ids(&self, team_id: u32) -> FeedResult<Vec<u32>> {
        if team_id != self.team_id {
            return Err(FeedError::UnknownTeam(team_id));
        }
        Ok(self.order.clone())
    }

    fn match_rounds(&self, match_id: u32) -> FeedResult<RawMatch> {
        self.matches
            .get(&match_id)
            .cloned()
            .ok_or(FeedError::UnknownMatch(match_id))
    }

    fn team_name(&self, team_id: u32) -> FeedResult<String> {
        if team_id != self.team_id {
            return Err(FeedError::UnknownTeam(team_id));
        }
        Ok(self.team_name.clone())
    }
}
