//! Opt-in logging setup for the codec's `log` breadcrumbs.
//!
//! The library itself only emits through the `log` facade and never installs
//! a subscriber on its own; embedding applications keep full control of their
//! logging. This helper exists for tools and debugging sessions that want
//! output without wiring a logger themselves.

use std::sync::Once;

use log::LevelFilter;

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` subscriber at debug level, once per process.
/// Subsequent calls are no-ops, as is the call if another subscriber is
/// already registered.
pub fn enable_verbose_logging() {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        let _ = builder.try_init();
    });
}
