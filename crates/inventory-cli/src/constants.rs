//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Item not present in the inventory.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, or an inventory file that cannot be parsed.
    pub const INVALID_INPUT: i32 = 4;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "INVENTORY_CONFIG";

/// Environment variable selecting the log line format (`text` or `json`).
pub const LOG_FORMAT_ENV: &str = "INVENTORY_LOG_FORMAT";
