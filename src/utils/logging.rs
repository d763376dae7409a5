//! Process-wide logger setup shared by the binaries.

use std::io::Write;

use chrono::Local;
use env_logger::{Env, Target};
use log::LevelFilter;

/// Environment variable read for the log filter, `info` when unset.
pub const LOG_ENV_VAR: &str = "JANGGI_LOG";

/// Installs an stderr logger with millisecond local timestamps.
///
/// `level` overrides whatever `JANGGI_LOG` says. Calling this twice is
/// harmless; the second call is ignored.
pub fn init_logging(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV_VAR, "info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }

    let _ = builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{style}[{}] [{:5}]{style:#} {}",
                Local::now().format("%T%.3f"),
                record.level(),
                record.args(),
                style = buf.default_level_style(record.level()),
            )
        })
        .target(Target::Stderr)
        .try_init();
}

/// Parses a `--log-level` value such as `debug` or `off`.
pub fn parse_level(text: &str) -> Result<LevelFilter, String> {
    text.parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level '{text}', expected off/error/warn/info/debug/trace"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level("DEBUG"), Ok(LevelFilter::Debug));
        assert_eq!(parse_level("off"), Ok(LevelFilter::Off));
        assert!(parse_level("loud").is_err());
    }
}
