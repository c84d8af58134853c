use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `taskboard=debug`.
pub const LOG_ENV: &str = "TASKBOARD_LOG";

fn level_from_verbosity(verbosity: u8) -> Option<LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::INFO),
        2 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    }
}

/// Build the filter: `TASKBOARD_LOG` wins, then `-v` flags, then the
/// configured level.
pub fn filter(verbosity: u8, configured: &str) -> EnvFilter {
    if let Ok(directive) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directive) {
            return filter;
        }
    }
    match level_from_verbosity(verbosity) {
        Some(level) => EnvFilter::default().add_directive(level.into()),
        None => EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

/// Install the global subscriber. Output goes to stderr so `--json` stdout
/// stays parseable.
pub fn init(verbosity: u8, configured: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity, configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
