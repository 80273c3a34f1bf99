use crate::feed::StartingSide;

/// Round thresholds that drive side swaps within one map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideRules {
    /// First round played on swapped sides after halftime.
    pub halftime_round: u32,
    /// First overtime round.
    pub overtime_round: u32,
    /// Length of one overtime side cycle; the round-1 attacker attacks in the
    /// first half of each cycle.
    pub overtime_cycle: u32,
}

impl Default for SideRules {
    fn default() -> Self {
        Self {
            halftime_round: 13,
            overtime_round: 25,
            overtime_cycle: 2,
        }
    }
}

/// Returns true when team1 holds the attacking side at `round_number`.
pub fn side_state(round_number: u32, team1_attacking_at_round1: bool, rules: &SideRules) -> bool {
    if round_number >= rules.overtime_round {
        let cycle = rules.overtime_cycle.max(2);
        let offset = (round_number - rules.overtime_round) % cycle;
        let first_half = offset < cycle / 2;
        return if first_half {
            team1_attacking_at_round1
        } else {
            !team1_attacking_at_round1
        };
    }
    if round_number >= rules.halftime_round {
        return !team1_attacking_at_round1;
    }
    team1_attacking_at_round1
}

impl StartingSide {
    /// Collapses the hint to a boolean. An unknown start falls back to team2
    /// attacking.
    pub fn resolve(self, match_id: u32) -> bool {
        match self {
            StartingSide::Team1Attacking => true,
            StartingSide::Team2Attacking => false,
            StartingSide::Unknown => {
                tracing::warn!(
                    match_id,
                    "round 1 side markers missing, assuming team2 starts attacking"
                );
                false
            }
        }
    }
}
