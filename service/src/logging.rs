use crate::config::Config;
use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Dependency modules that are silenced unless the threshold is Trace.
const FILTERED_MODULES: &[&str] = &["tower", "tower_http", "hyper", "axum", "reqwest", "rustls"];

pub struct Logger {}

impl Logger {
    /// Installs the global terminal logger at the threshold from `config`.
    ///
    /// At Trace every record is shown, including the HTTP stack underneath
    /// the handlers and the outbound Zoom client. Below Trace only this
    /// workspace's own records are emitted.
    pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
        let log_config = Self::build_log_config(config.log_level_filter);

        TermLogger::init(
            config.log_level_filter,
            log_config,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )
    }

    fn should_filter_dependencies(level: LevelFilter) -> bool {
        level != LevelFilter::Trace
    }

    fn build_log_config(level: LevelFilter) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();

        if Self::should_filter_dependencies(level) {
            for module in FILTERED_MODULES {
                builder.add_filter_ignore_str(module);
            }
        }

        builder.build()
    }
}
