//! Redaction of row-level values in log output.
//!
//! Cohort cells can hold patient-identifying text (initials, free-text
//! reasoning). Library crates pass such values through [`redact_value`]
//! before logging them; the CLI flips the switch with `--log-data`.

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when row-level logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Enables or disables row-level values in logs.
pub fn set_log_data_enabled(enable: bool) {
    LOG_DATA_ENABLED.store(enable, Ordering::Release);
}

/// Returns true if row-level logging is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

/// Returns the input value when row-level logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redaction_follows_switch() {
        set_log_data_enabled(false);
        assert_eq!(redact_value("AB"), REDACTED_VALUE);
        set_log_data_enabled(true);
        assert_eq!(redact_value("AB"), "AB");
        set_log_data_enabled(false);
    }
}
