use crate::rounds::ResolvedMatch;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Winrate {
    pub team_wins: u32,
    pub total_rounds: u32,
    pub percent: f64,
}

/// Counts every resolved round across all matches and maps, with no per-map
/// weighting.
pub fn aggregate(matches: &[ResolvedMatch], team_name: &str) -> Winrate {
    let mut team_wins = 0u32;
    let mut total_rounds = 0u32;
    for round in matches.iter().flat_map(|m| m.rounds.iter()) {
        total_rounds += 1;
        if round.winner == team_name {
            team_wins += 1;
        }
    }

    let percent = if total_rounds > 0 {
        100.0 * team_wins as f64 / total_rounds as f64
    } else {
        0.0
    };

    Winrate {
        team_wins,
        total_rounds,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::aggregate;
    use crate::rounds::{ResolvedMatch, ResolvedRound};

    fn resolved(match_id: u32, winners: &[&str]) -> ResolvedMatch {
        ResolvedMatch {
            match_id,
            rounds: winners
                .iter()
                .enumerate()
                .map(|(i, w)| ResolvedRound {
                    round_number: i as u32 + 1,
                    winner: (*w).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn no_matches_is_zero() {
        let w = aggregate(&[], "A");
        assert_eq!(w.team_wins, 0);
        assert_eq!(w.total_rounds, 0);
        assert_eq!(w.percent, 0.0);
    }

    #[test]
    fn counts_across_matches() {
        let matches = [resolved(1, &["A", "B", "A"]), resolved(2, &["B", "A"])];
        let w = aggregate(&matches, "A");
        assert_eq!(w.team_wins, 3);
        assert_eq!(w.total_rounds, 5);
        assert!((w.percent - 60.0).abs() < 1e-9);
    }
}
