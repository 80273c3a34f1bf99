use std::fmt::Write;

use crate::analysis::TeamReport;
use crate::momentum::{StreakBuckets, WINDOW};
use crate::winrate::Winrate;

pub fn render(report: &TeamReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Team Name: {}\n", report.team_name));
    out.push_str(&render_momentum(&report.momentum));
    out.push('\n');
    out.push_str(&render_winrate(&report.team_name, &report.winrate));
    out.push('\n');
    out.push_str(&format!("Matches Analyzed: {}\n", report.matches_analyzed));
    out.push_str(&format!("Matches Skipped: {}\n", report.skipped.len()));
    for skip in &report.skipped {
        out.push_str(&format!("Skipped match {}: {}\n", skip.match_id, skip.reason));
    }
    out
}

/// One line per bucket, longest streak first.
pub fn render_momentum(buckets: &StreakBuckets) -> String {
    let mut out = String::new();
    for (wins, bucket) in buckets.iter_desc() {
        let _ = writeln!(
            out,
            "{wins}/{WINDOW} win streak: {} successful cases out of {} total ({:.2}% success rate)",
            bucket.successes,
            bucket.attempts,
            bucket.success_rate() * 100.0
        );
    }
    out
}

pub fn render_winrate(team_name: &str, winrate: &Winrate) -> String {
    format!(
        "Overall Round Winrate for {team_name}:\nRounds Won: {}\nTotal Rounds: {}\nWinrate: {:.2}%\n",
        winrate.team_wins, winrate.total_rounds, winrate.percent
    )
}
