use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow};

use vlr_momentum::analysis::analyze_team;
use vlr_momentum::config::AppConfig;
use vlr_momentum::ingest::collect_matches;
use vlr_momentum::logging;
use vlr_momentum::report;
use vlr_momentum::vlr_fetch::VlrFeed;

fn main() -> Result<()> {
    let cfg = AppConfig::load();
    logging::init(cfg.log_level);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let team_id = match parse_u32_arg("team") {
        Some(id) => id,
        None => prompt_number(&mut input, "What is the team number?")?,
    };
    let count = match parse_u32_arg("matches") {
        Some(n) => n as usize,
        None => prompt_number(
            &mut input,
            &format!(
                "How many matches back are you looking to analyze? (maximum: {})",
                cfg.max_matches
            ),
        )? as usize,
    };
    if count > cfg.max_matches {
        println!("Too large.");
        return Ok(());
    }

    println!(
        "Here is the momentum data you're looking for for team number {team_id} in {count} matches:"
    );

    let feed = VlrFeed::new(&cfg)?;
    let summary = collect_matches(&feed, team_id, count, &cfg.side_rules)?;
    let team_report = analyze_team(&summary);
    print!("{}", report::render(&team_report));
    io::stdout().flush().context("flush stdout")?;

    Ok(())
}

fn prompt_number<R: BufRead>(input: &mut R, question: &str) -> Result<u32> {
    println!("{question}");
    io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    input.read_line(&mut line).context("read stdin")?;
    let trimmed = line.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| anyhow!("expected a whole number, got {trimmed:?}"))
}

fn parse_u32_arg(name: &str) -> Option<u32> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let flag = format!("--{name}");
    let prefix = format!("--{name}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix(&prefix)
            && let Ok(value) = raw.trim().parse::<u32>()
        {
            return Some(value);
        }
        if *arg == flag
            && let Some(next) = args.get(idx + 1)
            && let Ok(value) = next.trim().parse::<u32>()
        {
            return Some(value);
        }
    }
    None
}
