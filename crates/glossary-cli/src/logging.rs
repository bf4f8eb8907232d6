use std::io;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when set and valid, `info` otherwise.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Formatting subscriber on stderr; stdout carries the command output.
pub fn subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .finish()
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::*;

    #[test]
    fn per_target_directives_survive() {
        let filter = EnvFilter::new("warn,glossary_validate=debug");
        tracing::subscriber::with_default(subscriber(filter), || {
            assert!(tracing::enabled!(target: "glossary_validate", Level::DEBUG));
            assert!(!tracing::enabled!(target: "glossary_parse::segment", Level::DEBUG));
            assert!(!tracing::enabled!(target: "glossary_parse::segment", Level::INFO));
            assert!(tracing::enabled!(target: "glossary_parse::segment", Level::WARN));
        });
    }
}
