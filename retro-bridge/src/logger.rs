//! Forwards core log messages into the [`log`] facade.
use super::*;
use env_logger::filter::{Builder as FilterBuilder, Filter};
use log::{Level, Metadata, Record};
use once_cell::sync::Lazy;

/// Target used for every forwarded core message.
pub const CORE_LOG_TARGET: &str = "libretro::core";

static CORE_LOG_FILTER: Lazy<Filter> = Lazy::new(|| {
    let directives = std::env::var("RETRO_BRIDGE_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();

    build_filter(directives.as_deref())
});

/// Builds the filter from `env_logger` style directives.
///
/// By default the env_logger filter defaults to the error level if no
/// directives have been set, cores get everything instead.
fn build_filter(directives: Option<&str>) -> Filter {
    let mut builder = FilterBuilder::new();

    match directives {
        Some(s) if !s.trim().is_empty() => {
            builder.parse(s);
        }
        _ => {
            builder.filter(None, log::LevelFilter::Trace);
        }
    }

    builder.build()
}

/// A ready-made [`LogHandler`] that emits core messages as [`log`] records.
pub struct RetroLogForwarder {
    filter: &'static Filter,
}

impl Default for RetroLogForwarder {
    fn default() -> Self {
        Self::new()
    }
}

impl RetroLogForwarder {
    /// Uses the filter from `RETRO_BRIDGE_LOG`, falling back to `RUST_LOG`.
    pub fn new() -> Self {
        Self {
            filter: &CORE_LOG_FILTER,
        }
    }

    pub fn get_log_level(level: LogLevel) -> Level {
        match level {
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
        }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        let metadata = Metadata::builder()
            .level(Self::get_log_level(level))
            .target(CORE_LOG_TARGET)
            .build();

        self.filter.enabled(&metadata)
    }

    pub fn forward(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        // Cores terminate their messages with a newline, the log facade does not
        let message = message.trim_end_matches(['\r', '\n']);

        log::logger().log(
            &Record::builder()
                .args(format_args!("{message}"))
                .level(Self::get_log_level(level))
                .target(CORE_LOG_TARGET)
                .build(),
        );
    }
}

/// Sends all messages of cores holding `callback` to the [`log`] facade.
pub fn forward_core_logs(callback: &mut retro_log_callback) {
    let forwarder = RetroLogForwarder::new();
    install_log_interface(move |level, message| forwarder.forward(level, message), callback);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(level: Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn level_mapping() {
        assert_eq!(RetroLogForwarder::get_log_level(LogLevel::Debug), Level::Debug);
        assert_eq!(RetroLogForwarder::get_log_level(LogLevel::Info), Level::Info);
        assert_eq!(RetroLogForwarder::get_log_level(LogLevel::Warn), Level::Warn);
        assert_eq!(RetroLogForwarder::get_log_level(LogLevel::Error), Level::Error);
    }

    #[test]
    fn default_filter_lets_everything_through() {
        let filter = build_filter(None);
        assert!(filter.enabled(&metadata(Level::Trace, CORE_LOG_TARGET)));

        let filter = build_filter(Some("   "));
        assert!(filter.enabled(&metadata(Level::Debug, CORE_LOG_TARGET)));
    }

    #[test]
    fn directives_restrict_core_messages() {
        let filter = build_filter(Some("libretro::core=warn"));

        assert!(filter.enabled(&metadata(Level::Error, CORE_LOG_TARGET)));
        assert!(filter.enabled(&metadata(Level::Warn, CORE_LOG_TARGET)));
        assert!(!filter.enabled(&metadata(Level::Info, CORE_LOG_TARGET)));
    }
}
