//! Tracing setup for the `tabpick` binary.
//!
//! Logs go to stderr so the outcome printed on stdout stays machine readable.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV: &str = "TABPICK_LOG";

fn default_directives(verbose: bool) -> &'static str {
	if verbose {
		"tabpick=debug,tabpick_core=debug,warn"
	} else {
		"warn"
	}
}

/// Install the global subscriber. `TABPICK_LOG` takes precedence over the
/// verbosity flag. Calling this twice keeps the first subscriber.
pub fn initialize(verbose: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

	let layer = tracing_subscriber::fmt::layer()
		.with_writer(std::io::stderr)
		.with_ansi(false)
		.with_span_events(FmtSpan::CLOSE)
		.with_target(verbose);

	let installed = tracing_subscriber::registry()
		.with(filter)
		.with(layer)
		.try_init()
		.is_ok();

	if installed {
		tracing::debug!(verbose, "tracing initialized");
	}
}
