//! Errors raised while turning parameter maps into a `ParameterSet`.
//!
//! The numeric engine itself never fails; only the parsing boundary does.

/// Parameter boundary error.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    /// Key that names no parameter.
    #[error("unknown parameter '{0}'")]
    UnknownField(String),

    /// Positional array of the wrong size.
    #[error("expected {expected} parameters, got {got}")]
    WrongLength {
        /// Required number of values
        expected: usize,
        /// Number of values supplied
        got: usize,
    },

    /// `key=value` text without the `=`.
    #[error("malformed assignment '{0}', expected key=value")]
    MalformedAssignment(String),

    /// Parameter document that is not a JSON object of parameters.
    #[error("invalid parameter document: {0}")]
    Json(#[from] serde_json::Error),
}
