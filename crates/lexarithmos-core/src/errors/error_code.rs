//! LexErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable `Display` message.
pub trait LexErrorCode {
    /// Returns the error code string (e.g., "UNKNOWN_KEY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const INVALID_PHRASE: &str = "INVALID_PHRASE";
pub const INVALID_NUMBERS: &str = "INVALID_NUMBERS";
pub const UNKNOWN_KEY: &str = "UNKNOWN_KEY";
pub const UNKNOWN_PHRASE: &str = "UNKNOWN_PHRASE";
pub const PERSISTENCE_FAILURE: &str = "PERSISTENCE_FAILURE";
pub const MALFORMED_ARTIFACT: &str = "MALFORMED_ARTIFACT";
pub const TRANSFORM_ERROR: &str = "TRANSFORM_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
