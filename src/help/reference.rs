use colored::*;

use crate::help::table::TextTable;
use crate::notation::{Intention, RiskLevel};

/// An intention some projects add on top of the four core ones
#[derive(Debug, Clone)]
pub struct ExtensionIntention {
    pub prefix: &'static str,
    pub name: &'static str,
    pub intention: &'static str,
    pub alternatives: &'static str,
}

/// Commonly used extension intentions, each with what projects do instead
pub const EXTENSION_INTENTIONS: &[ExtensionIntention] = &[
    ExtensionIntention {
        prefix: "m",
        name: "Merge",
        intention: "Merge branches. Set risk level based on maximum for any individual commit in the branch.",
        alternatives: "Use 'f', 'b', or 'r', based on the primary intention of the branch. Optionally leave blank for merge from 'main' to a feature branch.",
    },
    ExtensionIntention {
        prefix: "t",
        name: "Test-only",
        intention: "Alter automated tests without altering functionality.",
        alternatives: "Use 'f' or 'b', depending on which kind of work the test validates. Use 'r' for a refactoring purely within test code.",
    },
    ExtensionIntention {
        prefix: "e",
        name: "Environment",
        intention: "Environment (non-code) and tooling changes that don't affect program behavior (e.g. linting).",
        alternatives: "Consider the environment to be a product where the users are team members, and code it accordingly.",
    },
    ExtensionIntention {
        prefix: "a",
        name: "Auto",
        intention: "Automatic formatting, code generation, or similar tasks.",
        alternatives: "Use the intention that matches the reason you are performing the action.",
    },
    ExtensionIntention {
        prefix: "c",
        name: "Comment",
        intention: "Changes comments only. Excludes comments visible to doc-generation tools.",
        alternatives: "Use 'd'.",
    },
    ExtensionIntention {
        prefix: "C",
        name: "Content",
        intention: "Changes user-visible content, such as website copy.",
        alternatives: "Use 'f'.",
    },
    ExtensionIntention {
        prefix: "p",
        name: "Process",
        intention: "Changes some team process or working agreement.",
        alternatives: "Use a tacit, informal process; use 'd'; or keep the process definition outside of source control.",
    },
    ExtensionIntention {
        prefix: "s",
        name: "Spec",
        intention: "Changes the spec or design kept in the main product source.",
        alternatives: "Use informal specs; use 'd'; use the test suite as the only spec with 't'; or keep specs outside of source control.",
    },
    ExtensionIntention {
        prefix: "n",
        name: "NOP",
        intention: "A commit with no changes ('--allow-empty').",
        alternatives: "Use 'r'.",
    },
    ExtensionIntention {
        prefix: "@",
        name: "Unknown / multiple",
        intention: "A batch of changes checked in together with no real way to validate safety. Usually '@ @'.",
        alternatives: "Don't allow this. Require each commit to do exactly one intention.",
    },
];

const EXTENSION_PREAMBLE: &str = "\
Each project can define a set of extension intentions and should state which
extension codes it uses. It is up to each project to define the approaches for
each of the 4 risk levels. --intention only accepts the core intentions.";

/// Render the full RICM reference: risk levels, core and extension intentions
pub fn render_reference() -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Risk levels".bold()));
    output.push_str(&risk_level_table());
    output.push('\n');

    output.push_str(&format!("{}\n", "Core intentions".bold()));
    output.push_str(&core_intention_table());
    output.push('\n');

    output.push_str(&format!("{}\n", "Extension intentions".bold()));
    output.push_str(&format!("{}\n", EXTENSION_PREAMBLE));
    output.push_str(&extension_intention_table());

    output
}

fn risk_level_table() -> String {
    let mut table = TextTable::new(&["Risk Level", "Code", "Meaning", "Correctness Guarantees"]);
    for level in RiskLevel::ALL {
        table.push_row([
            level.label().to_string(),
            level.code().to_string(),
            level.meaning().to_string(),
            level.guarantees().join(", "),
        ]);
    }
    table.render()
}

fn core_intention_table() -> String {
    let mut table = TextTable::new(&["Prefix", "Name", "Intention"]);
    for intention in Intention::ALL {
        table.push_row([
            intention.code().to_string(),
            intention.name().to_string(),
            intention.description().to_string(),
        ]);
    }
    table.render()
}

fn extension_intention_table() -> String {
    let mut table = TextTable::new(&["Prefix", "Name", "Intention", "Alternatives"]);
    for ext in EXTENSION_INTENTIONS {
        table.push_row([ext.prefix, ext.name, ext.intention, ext.alternatives]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_lists_every_risk_level() {
        let reference = render_reference();
        for level in RiskLevel::ALL {
            assert!(reference.contains(level.label()), "missing {}", level.label());
            assert!(reference.contains(level.meaning()));
        }
        assert!(reference.contains("Intended Change, Known Invariants, Unknown Invariants"));
    }

    #[test]
    fn test_reference_lists_core_intentions_with_emitted_codes() {
        let table = core_intention_table();
        for intention in Intention::ALL {
            let row_start = format!("| {}      | {}", intention.code(), intention.name());
            assert!(table.contains(&row_start), "missing row {}", row_start);
        }
    }

    #[test]
    fn test_reference_lists_extension_intentions() {
        let reference = render_reference();
        for ext in EXTENSION_INTENTIONS {
            assert!(reference.contains(ext.name));
            assert!(reference.contains(ext.alternatives));
        }
    }

    #[test]
    fn test_extension_prefixes_do_not_shadow_core_codes() {
        for ext in EXTENSION_INTENTIONS {
            for intention in Intention::ALL {
                assert_ne!(ext.prefix, intention.code().to_string());
            }
        }
    }

    #[test]
    fn test_section_titles_sit_on_their_own_lines() {
        let reference = render_reference();
        let lines: Vec<&str> = reference.lines().collect();

        for title in ["Risk levels", "Core intentions", "Extension intentions"] {
            let index = lines
                .iter()
                .position(|line| line.contains(title))
                .unwrap_or_else(|| panic!("missing title {}", title));
            assert!(lines[index + 1].starts_with('+') || lines[index + 1].starts_with("Each project"));
        }
    }

    #[test]
    fn test_reference_is_stable() {
        assert_eq!(render_reference(), render_reference());
    }
}
