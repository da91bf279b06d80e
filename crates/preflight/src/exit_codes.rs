//! Exit codes for the CLI

/// No problems found
pub const SUCCESS: i32 = 0;

/// At least one violation or I/O failure was reported
pub const VALIDATION_FAILED: i32 = 1;

/// Configuration error: missing metadata root or bad config file
pub const CONFIG_ERROR: i32 = 2;

/// Unexpected error, e.g. the report could not be written
pub const ERROR: i32 = 1;
