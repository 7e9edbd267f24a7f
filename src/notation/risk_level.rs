use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::notation::FALLBACK_CODE;
use crate::utils::error::RicmError;

/// Declared confidence that a change is safe
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    /// Addresses all known and unknown risks
    Safe,
    /// Addresses all known risks
    Validated,
    /// Some known risks remain unverified
    Risky,
    /// No risk attestation
    Broken,
}

impl RiskLevel {
    /// Every risk level, safest first
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Safe,
        RiskLevel::Validated,
        RiskLevel::Risky,
        RiskLevel::Broken,
    ];

    /// Single-character code placed in front of the commit message
    pub fn code(self) -> char {
        match self {
            RiskLevel::Safe => '.',
            RiskLevel::Validated => '^',
            RiskLevel::Risky => '!',
            RiskLevel::Broken => '@',
        }
    }

    /// Name accepted on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Validated => "validated",
            RiskLevel::Risky => "risky",
            RiskLevel::Broken => "broken",
        }
    }

    /// Label used in the reference table
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Safe => "Known safe",
            RiskLevel::Validated => "Validated",
            RiskLevel::Risky => "Risky",
            RiskLevel::Broken => "(Probably) Broken",
        }
    }

    pub fn meaning(self) -> &'static str {
        match self {
            RiskLevel::Safe => "Addresses all known and unknown risks.",
            RiskLevel::Validated => "Addresses all known risks.",
            RiskLevel::Risky => "Some known risks remain unverified.",
            RiskLevel::Broken => "No risk attestation.",
        }
    }

    /// Correctness guarantees the level attests to, strongest level has the most
    pub fn guarantees(self) -> &'static [&'static str] {
        match self {
            RiskLevel::Safe => &["Intended Change", "Known Invariants", "Unknown Invariants"],
            RiskLevel::Validated => &["Intended Change", "Known Invariants"],
            RiskLevel::Risky => &["Intended Change"],
            RiskLevel::Broken => &[],
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = RicmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| RicmError::UnknownRiskLevel(s.to_string()))
    }
}

/// Look up the code for a risk level by name, falling back to a space
pub fn risk_code(name: &str) -> char {
    name.parse::<RiskLevel>()
        .map(RiskLevel::code)
        .unwrap_or(FALLBACK_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(RiskLevel::Safe.code(), '.');
        assert_eq!(RiskLevel::Validated.code(), '^');
        assert_eq!(RiskLevel::Risky.code(), '!');
        assert_eq!(RiskLevel::Broken.code(), '@');
    }

    #[test]
    fn test_codes_are_distinct() {
        let mut codes: Vec<char> = RiskLevel::ALL.iter().map(|r| r.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 4);
        assert!(!codes.contains(&FALLBACK_CODE));
    }

    #[test]
    fn test_parse_is_exact() {
        for level in RiskLevel::ALL {
            assert_eq!(level.as_str().parse::<RiskLevel>().unwrap(), level);
            assert_eq!(level.to_string(), level.as_str());
        }

        match "Safe".parse::<RiskLevel>() {
            Err(RicmError::UnknownRiskLevel(name)) => assert_eq!(name, "Safe"),
            other => panic!("Expected UnknownRiskLevel, got {:?}", other),
        }
        assert!(" safe".parse::<RiskLevel>().is_err());
        assert!("".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_risk_code_lookup() {
        assert_eq!(risk_code("safe"), '.');
        assert_eq!(risk_code("validated"), '^');
        assert_eq!(risk_code("risky"), '!');
        assert_eq!(risk_code("broken"), '@');
        // Repeated lookups are stable
        assert_eq!(risk_code("risky"), risk_code("risky"));
    }

    #[test]
    fn test_risk_code_fallback() {
        assert_eq!(risk_code("reckless"), ' ');
        assert_eq!(risk_code("SAFE"), ' ');
        assert_eq!(risk_code(""), ' ');
    }

    #[test]
    fn test_guarantees_shrink_with_risk() {
        let counts: Vec<usize> = RiskLevel::ALL.iter().map(|r| r.guarantees().len()).collect();
        assert_eq!(counts, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_value_enum_names_match_cli_names() {
        for level in RiskLevel::ALL {
            let value = level.to_possible_value().unwrap();
            assert_eq!(value.get_name(), level.as_str());
        }
    }
}
