use thiserror::Error;

/// Failures raised while fetching or parsing match data from a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("element not found: {context}")]
    MissingElement { context: &'static str },

    #[error("invalid round number: {0:?}")]
    InvalidRoundNumber(String),

    #[error("invalid css selector: {0}")]
    Selector(String),

    #[error("http {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unknown match id {0}")]
    UnknownMatch(u32),

    #[error("unknown team id {0}")]
    UnknownTeam(u32),
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;
