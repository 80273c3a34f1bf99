use std::path::PathBuf;

use vlr_momentum::analysis::analyze_team;
use vlr_momentum::feed::{RawMatch, RoundRecord, SideResult, StartingSide};
use vlr_momentum::fixture_feed::{FixtureDocument, FixtureFeed};
use vlr_momentum::ingest::collect_matches;
use vlr_momentum::report::render;
use vlr_momentum::side::SideRules;

fn t_wins(match_id: u32, team1: &str, team2: &str, rounds: u32) -> RawMatch {
    RawMatch {
        match_id,
        team1: team1.to_string(),
        team2: team2.to_string(),
        starting_side: StartingSide::Team1Attacking,
        rounds: (1..=rounds)
            .map(|round_number| RoundRecord {
                round_number,
                side_result: Some(SideResult::TWin),
            })
            .collect(),
    }
}

fn sample_feed() -> FixtureFeed {
    FixtureFeed::from_document(FixtureDocument {
        team_id: 2,
        team_name: "Sentinels".to_string(),
        matches: vec![
            t_wins(100, "Sentinels", "LOUD", 7),
            t_wins(101, "NRG", "Sentinels", 6),
        ],
        broken_match_ids: vec![102],
    })
}

#[test]
fn broken_match_is_skipped_and_reported() {
    let feed = sample_feed();
    let summary = collect_matches(&feed, 2, 10, &SideRules::default()).expect("ingest");
    assert_eq!(summary.matches.len(), 2);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].match_id, 102);
    assert_eq!(summary.matches_attempted(), 3);

    let text = render(&analyze_team(&summary));
    let expected = "\
Team Name: Sentinels
5/5 win streak: 2 successful cases out of 2 total (100.00% success rate)
4/5 win streak: 0 successful cases out of 0 total (0.00% success rate)
3/5 win streak: 0 successful cases out of 0 total (0.00% success rate)
2/5 win streak: 0 successful cases out of 0 total (0.00% success rate)
1/5 win streak: 0 successful cases out of 0 total (0.00% success rate)
0/5 win streak: 0 successful cases out of 1 total (0.00% success rate)

Overall Round Winrate for Sentinels:
Rounds Won: 7
Total Rounds: 13
Winrate: 53.85%

Matches Analyzed: 2
Matches Skipped: 1
Skipped match 102: unknown match id 102
";
    assert_eq!(text, expected);
}

#[test]
fn match_count_limits_the_fetch() {
    let feed = sample_feed();
    let summary = collect_matches(&feed, 2, 1, &SideRules::default()).expect("ingest");
    assert_eq!(summary.matches.len(), 1);
    assert_eq!(summary.matches[0].match_id, 100);
    assert!(summary.skipped.is_empty());
}

#[test]
fn unknown_team_aborts_the_run() {
    let feed = sample_feed();
    assert!(collect_matches(&feed, 99, 5, &SideRules::default()).is_err());
}

#[test]
fn zero_matches_report_zero_winrate() {
    let feed = FixtureFeed::from_document(FixtureDocument {
        team_id: 2,
        team_name: "Sentinels".to_string(),
        matches: Vec::new(),
        broken_match_ids: Vec::new(),
    });
    let summary = collect_matches(&feed, 2, 5, &SideRules::default()).expect("ingest");
    let text = render(&analyze_team(&summary));
    assert!(text.contains("Rounds Won: 0\n"));
    assert!(text.contains("Total Rounds: 0\n"));
    assert!(text.contains("Winrate: 0.00%\n"));
    assert!(text.contains("Matches Analyzed: 0\n"));
}

#[test]
fn recorded_history_replays_offline() {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("team_history.json");
    let feed = FixtureFeed::load(&path).expect("fixture should load");
    assert_eq!(feed.team_id(), 2);
    assert_eq!(feed.match_count(), 3);

    let summary = collect_matches(&feed, 2, 3, &SideRules::default()).expect("ingest");
    let report = analyze_team(&summary);
    assert_eq!(report.matches_analyzed, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.winrate.team_wins, 6);
    assert_eq!(report.winrate.total_rounds, 10);
    assert!((report.winrate.percent - 60.0).abs() < 1e-9);

    let four = report.momentum.get(4).copied().unwrap_or_default();
    assert_eq!(four.attempts, 1);
    assert_eq!(four.successes, 1);
    assert_eq!(report.momentum.total_attempts(), 1);
}

#[test]
fn overtime_rounds_alternate_winners() {
    let feed = FixtureFeed::from_document(FixtureDocument {
        team_id: 2,
        team_name: "Sentinels".to_string(),
        matches: vec![t_wins(200, "Sentinels", "LOUD", 28)],
        broken_match_ids: Vec::new(),
    });
    let summary = collect_matches(&feed, 2, 1, &SideRules::default()).expect("ingest");
    let winners: Vec<&str> = summary.matches[0]
        .rounds
        .iter()
        .map(|r| r.winner.as_str())
        .collect();
    assert!(winners[..12].iter().all(|w| *w == "Sentinels"));
    assert!(winners[12..24].iter().all(|w| *w == "LOUD"));
    assert_eq!(&winners[24..], &["Sentinels", "LOUD", "Sentinels", "LOUD"]);
}
