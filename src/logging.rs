//! Logging setup for the command-line tool.
//!
//! Events go to stderr so the result lines on stdout stay scriptable.
//!
//! ## Log Levels
//!
//! - **WARN**: Rejected rounds (default)
//! - **INFO**: Batch lifecycle
//! - **DEBUG**: Every scored round
//!
//! `RUST_LOG` takes precedence over the verbosity flag.

use std::io::IsTerminal;
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Map the number of `-v` flags to a level
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let ansi = std::io::stderr().is_terminal();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(output_layer(std::io::stderr, ansi))
        .try_init();
}

// Colour escapes only make sense on a terminal
fn output_layer<S, W>(writer: W, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
}
