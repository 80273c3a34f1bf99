pub mod analysis;
pub mod config;
pub mod error;
pub mod feed;
pub mod fixture_feed;
pub mod http_client;
pub mod ingest;
pub mod logging;
pub mod maps;
pub mod momentum;
pub mod report;
pub mod rounds;
pub mod side;
pub mod vlr_fetch;
pub mod winrate;
