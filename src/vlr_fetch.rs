use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::Client;
use scraper::{CaseSensitivity, ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::config::AppConfig;
use crate::error::{FeedError, FeedResult};
use crate::feed::{RawMatch, RoundFeed, RoundRecord, SideResult, StartingSide};
use crate::http_client::http_client;

const VLR_BASE: &str = "https://www.vlr.gg";

static MATCH_HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(\d+)").expect("match href pattern is valid"));

/// `RoundFeed` backed by vlr.gg team and match pages.
pub struct VlrFeed {
    client: &'static Client,
}

impl VlrFeed {
    pub fn new(cfg: &AppConfig) -> anyhow::Result<Self> {
        let client = http_client(&cfg.user_agent, cfg.http_timeout_secs)?;
        Ok(Self { client })
    }

    fn get_html(&self, url: &str) -> FeedResult<String> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(resp.text()?)
    }
}

impl RoundFeed for VlrFeed {
    #[instrument(skip(self))]
    fn recent_match_ids(&self, team_id: u32) -> FeedResult<Vec<u32>> {
        let html = self.get_html(&format!("{VLR_BASE}/team/matches/{team_id}"))?;
        let ids = parse_team_match_ids(&html)?;
        debug!(count = ids.len(), "listed team matches");
        Ok(ids)
    }

    #[instrument(skip(self))]
    fn match_rounds(&self, match_id: u32) -> FeedResult<RawMatch> {
        let html = self.get_html(&format!("{VLR_BASE}/{match_id}"))?;
        parse_match_page(match_id, &html)
    }

    #[instrument(skip(self))]
    fn team_name(&self, team_id: u32) -> FeedResult<String> {
        let html = self.get_html(&format!("{VLR_BASE}/team/matches/{team_id}"))?;
        parse_team_name(&html)
    }
}

fn selector(css: &'static str) -> FeedResult<Selector> {
    Selector::parse(css).map_err(|e| FeedError::Selector(format!("{css}: {e}")))
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn has_class(el: &ElementRef, class: &str) -> bool {
    el.value().has_class(class, CaseSensitivity::CaseSensitive)
}

/// Match ids linked from the results block of a team's matches page, in page
/// order (most recent first).
pub fn parse_team_match_ids(html: &str) -> FeedResult<Vec<u32>> {
    let document = Html::parse_document(html);
    let block_selector = selector(r#"div.mod-dark[style="margin-bottom: 25px;"]"#)?;
    let block = document
        .select(&block_selector)
        .next()
        .ok_or(FeedError::MissingElement {
            context: "results block (div.mod-dark)",
        })?;

    let link_selector = selector("a.wf-card.fc-flex.m-item[href]")?;
    let ids = block
        .select(&link_selector)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| MATCH_HREF.captures(href))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .collect();
    Ok(ids)
}

pub fn parse_team_name(html: &str) -> FeedResult<String> {
    let document = Html::parse_document(html);
    let name_selector = selector("div.team-header-name h1.wf-title")?;
    document
        .select(&name_selector)
        .next()
        .map(|h1| element_text(&h1))
        .ok_or(FeedError::MissingElement {
            context: "team name (div.team-header-name h1.wf-title)",
        })
}

pub fn parse_match_page(match_id: u32, html: &str) -> FeedResult<RawMatch> {
    let document = Html::parse_document(html);

    let header_selector = selector("div.match-header-vs")?;
    let header = document
        .select(&header_selector)
        .next()
        .ok_or(FeedError::MissingElement {
            context: "match header (div.match-header-vs)",
        })?;
    let team1_selector = selector("a.match-header-link.mod-1 div.wf-title-med")?;
    let team2_selector = selector("a.match-header-link.mod-2 div.wf-title-med")?;
    let team1 = header
        .select(&team1_selector)
        .next()
        .map(|e| element_text(&e))
        .ok_or(FeedError::MissingElement {
            context: "team 1 name (match-header-link mod-1)",
        })?;
    let team2 = header
        .select(&team2_selector)
        .next()
        .map(|e| element_text(&e))
        .ok_or(FeedError::MissingElement {
            context: "team 2 name (match-header-link mod-2)",
        })?;

    let column_selector = selector("div.vlr-rounds-row-col")?;
    let number_selector = selector("div.rnd-num")?;
    let square_selector = selector("div.rnd-sq")?;
    let t_win_selector = selector("div.rnd-sq.mod-win.mod-t")?;
    let ct_win_selector = selector("div.rnd-sq.mod-win.mod-ct")?;

    let mut starting_side = None;
    let mut rounds = Vec::new();
    for column in document.select(&column_selector) {
        let Some(number) = column.select(&number_selector).next() else {
            continue;
        };
        let raw_number = element_text(&number);
        let round_number = raw_number
            .parse::<u32>()
            .map_err(|_| FeedError::InvalidRoundNumber(raw_number.clone()))?;

        if round_number == 1 && starting_side.is_none() {
            starting_side = Some(starting_side_of(&column, &square_selector));
        }

        let side_result = if column.select(&t_win_selector).next().is_some() {
            Some(SideResult::TWin)
        } else if column.select(&ct_win_selector).next().is_some() {
            Some(SideResult::CtWin)
        } else {
            None
        };
        rounds.push(RoundRecord {
            round_number,
            side_result,
        });
    }

    debug!(match_id, rounds = rounds.len(), "parsed match rounds");
    Ok(RawMatch {
        match_id,
        team1,
        team2,
        starting_side: starting_side.unwrap_or_default(),
        rounds,
    })
}

/// The first square belongs to team1 and the second to team2; each carries
/// `mod-t` or `mod-ct` for the side that team played.
fn starting_side_of(column: &ElementRef, square_selector: &Selector) -> StartingSide {
    let squares: Vec<ElementRef> = column.select(square_selector).take(2).collect();
    let [team1_sq, team2_sq] = squares.as_slice() else {
        return StartingSide::Unknown;
    };
    if has_class(team1_sq, "mod-t") || has_class(team2_sq, "mod-ct") {
        StartingSide::Team1Attacking
    } else if has_class(team1_sq, "mod-ct") || has_class(team2_sq, "mod-t") {
        StartingSide::Team2Attacking
    } else {
        StartingSide::Unknown
    }
}
