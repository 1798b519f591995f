//! Integration tests for the `jstp` crate.

mod accessors;
mod dump;
mod ordering;
mod parse;

use std::sync::LazyLock;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installed once per test binary; `JSTP_LOG` takes a target filter such as
/// `jstp=trace`.
static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let filter = std::env::var("JSTP_LOG")
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::WARN));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Set up a tracing subscriber for tests.
pub fn setup() {
    LazyLock::force(&SUBSCRIBER_INIT);
}
