use thiserror::Error;

/// Exit status when the command line itself is unusable
pub const EXIT_USAGE: i32 = 2;

/// Exit status when the composed line could not be written
pub const EXIT_OUTPUT: i32 = 1;

/// Main error type for RICM
#[derive(Debug, Error)]
pub enum RicmError {
    #[error("the following arguments are required: {}", .0.join(", "))]
    MissingArguments(Vec<&'static str>),

    #[error("invalid risk level '{0}' (expected one of: safe, validated, risky, broken)")]
    UnknownRiskLevel(String),

    #[error("invalid intention '{0}' (expected one of: feature, bugfix, refactoring, documentation)")]
    UnknownIntention(String),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RicmError {
    /// Process exit status this error terminates with
    pub fn exit_code(&self) -> i32 {
        match self {
            RicmError::MissingArguments(_)
            | RicmError::UnknownRiskLevel(_)
            | RicmError::UnknownIntention(_) => EXIT_USAGE,
            RicmError::Output(_) => EXIT_OUTPUT,
        }
    }

    /// Whether the usage synopsis should precede the diagnostic
    pub fn is_usage_error(&self) -> bool {
        self.exit_code() == EXIT_USAGE
    }
}

/// Result type alias for RICM operations
pub type RicmResult<T> = Result<T, RicmError>;
