//! Tracing subscriber setup for the CLI.
//!
//! `RUST_LOG` takes precedence; otherwise the crate logs at `warn`, or at
//! `info` with `--verbose`. Output always goes to stderr so stdout stays
//! reserved for generated text.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATE_TARGET: &str = "prompt_enhancer";

pub fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    // A second initialization (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn default_directive(level: &str) -> String {
    format!("{}={}", CRATE_TARGET, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_targets_this_crate() {
        assert_eq!(default_directive("warn"), "prompt_enhancer=warn");
        assert!(EnvFilter::try_new(default_directive("info")).is_ok());
    }
}
