use colored::*;

use crate::notation::CommitRequest;
use crate::utils::error::RicmError;

/// Formats status lines for CLI output
pub struct OutputFormatter;

impl OutputFormatter {
    /// Format error message for CLI display
    pub fn format_error(error: &RicmError) -> String {
        format!("{} {}", "error:".red().bold(), error)
    }

    /// Format info message for CLI display
    pub fn format_info(message: &str) -> String {
        format!("{} {}", "Info:".blue().bold(), message)
    }

    /// Describe how a request maps onto its codes, for verbose output
    pub fn describe_request(request: &CommitRequest) -> String {
        let risk = request.risk();
        let intention = request.intention();
        Self::format_info(&format!(
            "risk {} -> '{}', intention {} -> '{}', message {} bytes",
            risk.as_str().cyan(),
            risk.code(),
            intention.as_str().cyan(),
            intention.code(),
            request.message().len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{Intention, RiskLevel};

    #[test]
    fn test_format_error_carries_diagnostic() {
        let error = RicmError::MissingArguments(vec!["<MESSAGE>"]);
        let line = OutputFormatter::format_error(&error);

        assert!(line.contains("error:"));
        assert!(line.contains("the following arguments are required: <MESSAGE>"));
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_describe_request() {
        let request = CommitRequest::new(RiskLevel::Validated, Intention::Bugfix, "fix").unwrap();
        let line = OutputFormatter::describe_request(&request);

        assert!(line.contains("Info:"));
        assert!(line.contains("'^'"));
        assert!(line.contains("'b'"));
        assert!(line.contains("3 bytes"));
    }
}
