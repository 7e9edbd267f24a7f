use std::fmt;

use crate::notation::{Intention, RiskLevel};
use crate::utils::error::{RicmError, RicmResult};

/// One invocation's worth of input: the two codes and the free-text message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    risk: RiskLevel,
    intention: Intention,
    message: String,
}

impl CommitRequest {
    /// Build a request; an empty message counts as a missing one
    pub fn new(risk: RiskLevel, intention: Intention, message: impl Into<String>) -> RicmResult<Self> {
        let message = message.into();
        if message.is_empty() {
            return Err(RicmError::MissingArguments(vec!["<MESSAGE>"]));
        }

        Ok(Self {
            risk,
            intention,
            message,
        })
    }

    pub fn risk(&self) -> RiskLevel {
        self.risk
    }

    pub fn intention(&self) -> Intention {
        self.intention
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Compose `"<risk code> <intention code> <message>"`
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CommitRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.risk.code(), self.intention.code(), self.message)
    }
}
