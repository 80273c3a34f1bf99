use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Installs a stderr fmt subscriber so stdout carries only the report.
pub fn init(level: LevelFilter) {
    let registry = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(level);
    if tracing::subscriber::set_global_default(registry).is_err() {
        eprintln!("warning: tracing subscriber already installed");
    }
}
