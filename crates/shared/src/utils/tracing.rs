use std::sync::Once;

use time::format_description::well_known::Iso8601;
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{format::Pretty, time::UtcTime},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    Layer,
};
use tracing_web::{performance_layer, MakeWebConsoleWriter};

/// Sends tracing events at or above `level` to the browser console
///
/// Fails if a global subscriber is already installed
pub fn configure_tracing(level: Level) -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .with_timer(UtcTime::new(Iso8601::DEFAULT))
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::from_level(level));
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry().with(fmt_layer).with(perf_layer).try_init()
}

/// Configures tracing inside a Once block so repeated calls are no-ops
pub fn configure_tracing_once(level: Level) {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        if let Err(e) = configure_tracing(level) {
            web_sys::console::warn_1(&format!("Tracing already configured: {e}").into());
        }
    });
}
