//! Logging setup.
//!
//! Diagnostics go through the `log` facade. User-facing warnings and
//! failures are printed by [`crate::actions::ConsoleReporter`] and mirrored
//! to the log at debug level.

use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Map `-v` occurrences to a level filter.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the global logger.
///
/// `RUST_LOG` overrides the verbosity-derived level. Calling this twice is
/// harmless.
pub fn init(verbosity: u8) {
    let mut builder = Builder::new();
    builder.filter_level(level_for_verbosity(verbosity));
    builder.parse_default_env();
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{:<5}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    });

    if builder.try_init().is_ok() {
        log::debug!("logging initialized at verbosity {}", verbosity);
    }
}
