//! Logger bootstrap for hosts that don't bring their own.
//!
//! Core code only emits through the `log` facade, as
//! `event=<name> module=<module> status=<status>` lines. Selection text is
//! never logged; derived tags and statuses are.

use std::sync::OnceLock;

static INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Installs an `env_logger` writing to stderr. `RUST_LOG` wins over `level`.
///
/// Idempotent: later calls return the first call's result. Never panics.
pub fn init_logging(level: &str) -> Result<(), String> {
    INIT.get_or_init(|| {
        let level = normalize_level(level)?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
            .format_timestamp_millis()
            .try_init()
            .map_err(|err| format!("failed to start logger: {err}"))?;
        log::info!(
            "event=core_init module=logging status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );
        Ok(())
    })
    .clone()
}

/// Returns the default log level for current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok("off"),
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected off|trace|debug|info|warn|error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO"), Ok("info"));
        assert_eq!(normalize_level(" warning "), Ok("warn"));
    }

    #[test]
    fn normalize_level_rejects_unknown() {
        let err = normalize_level("chatty").expect_err("unknown level must fail");
        assert!(err.contains("unsupported"));
    }

    #[test]
    fn init_logging_is_idempotent() {
        let first = init_logging("info");
        assert_eq!(init_logging("debug"), first);
    }
}
