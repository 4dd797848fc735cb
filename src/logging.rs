//! Structured logging setup with tracing.
//!
//! Diagnostics go to stderr so command output on stdout stays clean for
//! piping. The filter comes from `RUST_LOG` (default `info`); `--verbose`
//! forces `debug` regardless.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for the given flag and `RUST_LOG` value.
pub fn filter_directive(verbose: bool, env: Option<&str>) -> &str {
    match env {
        _ if verbose => "debug",
        Some(directive) if !directive.trim().is_empty() => directive,
        _ => "info",
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(verbose, env.as_deref());
    let env_filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("ignoring invalid {}: {err}", EnvFilter::DEFAULT_ENV);
        EnvFilter::new("info")
    });

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(verbose))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(directive, "logging initialized");
    }
}
