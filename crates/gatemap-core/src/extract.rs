//! Instruction-name extraction.

use tracing::warn;

use crate::platform::PlatformDescription;

/// First whitespace-delimited word of an instruction entry.
///
/// `"cz q0,q2"` yields `"cz"`. Blank entries have no name.
#[inline]
pub fn first_word(entry: &str) -> Option<&str> {
    entry.split_whitespace().next()
}

/// Collect every instruction name the platform references, in traversal
/// order and with duplicates.
///
/// The `instructions` section comes first. Then, per decomposition rule in
/// document order, the rule's own name followed by each name in its body.
pub fn extract_names(platform: &PlatformDescription) -> Vec<String> {
    let rules = platform.gate_decomposition.iter();
    let entries = platform
        .instructions
        .iter()
        .chain(rules.flat_map(|(rule, body)| {
            std::iter::once(rule).chain(body.iter().map(String::as_str))
        }));

    let mut names = Vec::new();
    for entry in entries {
        match first_word(entry) {
            Some(name) => names.push(name.to_string()),
            None => warn!("Skipping blank instruction entry {entry:?}"),
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, body: &[&str]) -> (String, Vec<String>) {
        (name.to_string(), body.iter().map(|s| (*s).to_string()).collect())
    }

    #[test]
    fn test_first_word() {
        assert_eq!(first_word("cx q0 q1"), Some("cx"));
        assert_eq!(first_word("  h\tq2"), Some("h"));
        assert_eq!(first_word("measure"), Some("measure"));
        assert_eq!(first_word(""), None);
        assert_eq!(first_word("   "), None);
    }

    #[test]
    fn test_instructions_in_order_with_duplicates() {
        let platform = PlatformDescription::new(["x q0", "cx q0 q1", "x q0"], []);
        assert_eq!(extract_names(&platform), ["x", "cx", "x"]);
    }

    #[test]
    fn test_decomposition_rule_then_body() {
        let platform = PlatformDescription::new(
            Vec::<String>::new(),
            [rule("toffoli q0 q1 q2", &["cx q0 q1", "h q2"])],
        );
        assert_eq!(extract_names(&platform), ["toffoli", "cx", "h"]);
    }

    #[test]
    fn test_instructions_before_decompositions() {
        let platform = PlatformDescription::new(
            ["cz q0,q1", "prepz q0"],
            [
                rule("cnot q0,q1", &["ym90 q1", "cz q0,q1", "y90 q1"]),
                rule("swap q0,q1", &["cnot q0,q1", "cnot q1,q0", "cnot q0,q1"]),
            ],
        );
        assert_eq!(
            extract_names(&platform),
            [
                "cz", "prepz", "cnot", "ym90", "cz", "y90", "swap", "cnot", "cnot", "cnot"
            ]
        );
    }

    #[test]
    fn test_blank_entries_skipped() {
        let platform = PlatformDescription::new(["", "x q0", "   "], [rule(" ", &["h q0"])]);
        assert_eq!(extract_names(&platform), ["x", "h"]);
    }

    #[test]
    fn test_empty_platform() {
        assert!(extract_names(&PlatformDescription::default()).is_empty());
    }
}
