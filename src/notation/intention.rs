use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::notation::FALLBACK_CODE;
use crate::utils::error::RicmError;

/// Declared category of a change
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intention {
    /// Change or extend one aspect of program behavior
    Feature,
    /// Repair one existing, undesirable program behavior
    Bugfix,
    /// Change implementation without changing program behavior
    Refactoring,
    /// Change something that communicates to team members
    Documentation,
}

impl Intention {
    pub const ALL: [Intention; 4] = [
        Intention::Feature,
        Intention::Bugfix,
        Intention::Refactoring,
        Intention::Documentation,
    ];

    /// Single-character code placed after the risk code
    pub fn code(self) -> char {
        match self {
            Intention::Feature => 'f',
            Intention::Bugfix => 'b',
            Intention::Refactoring => 'r',
            Intention::Documentation => 'd',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intention::Feature => "feature",
            Intention::Bugfix => "bugfix",
            Intention::Refactoring => "refactoring",
            Intention::Documentation => "documentation",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Intention::Feature => "Feature",
            Intention::Bugfix => "Bugfix",
            Intention::Refactoring => "Refactoring",
            Intention::Documentation => "Documentation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Intention::Feature => {
                "Change or extend one aspect of program behavior without altering others."
            }
            Intention::Bugfix => {
                "Repair one existing, undesirable program behavior without altering any others."
            }
            Intention::Refactoring => "Change implementation without changing program behavior.",
            Intention::Documentation => {
                "Change something which communicates to team members and does not impact program behavior."
            }
        }
    }
}

impl fmt::Display for Intention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Intention {
    type Err = RicmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intention::ALL
            .into_iter()
            .find(|intention| intention.as_str() == s)
            .ok_or_else(|| RicmError::UnknownIntention(s.to_string()))
    }
}

/// Look up the code for an intention by name, falling back to a space
pub fn intention_code(name: &str) -> char {
    name.parse::<Intention>()
        .map(Intention::code)
        .unwrap_or(FALLBACK_CODE)
}
