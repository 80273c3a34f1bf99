use crate::rounds::ResolvedRound;

/// Rounds of one played map, in play order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameMap {
    pub rounds: Vec<ResolvedRound>,
}

impl GameMap {
    pub fn winners(&self) -> impl Iterator<Item = &str> {
        self.rounds.iter().map(|r| r.winner.as_str())
    }
}

/// Splits a match's resolved rounds into maps. A round numbered 1 starts a
/// new map once the current one holds at least one round.
pub fn split_maps(rounds: &[ResolvedRound]) -> Vec<GameMap> {
    let mut maps = Vec::new();
    let mut current = GameMap::default();
    for round in rounds {
        if round.round_number == 1 && !current.rounds.is_empty() {
            maps.push(std::mem::take(&mut current));
        }
        current.rounds.push(round.clone());
    }
    if !current.rounds.is_empty() {
        maps.push(current);
    }
    maps
}
