//! Property tests for the specification parser.

use proptest::prelude::*;

use spec::{Severity, parse};

/// Applies a casing mask to a level spelling.
fn recase(spelling: &str, mask: u32) -> String {
    spelling
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            if mask >> (index % 32) & 1 == 1 {
                ch.to_ascii_uppercase()
            } else {
                ch.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    /// The parser must never panic, whatever the input.
    #[test]
    fn parse_never_panics(input in ".*") {
        let _ = parse(&input);
    }

    /// Equal inputs always produce equal specifications.
    #[test]
    fn parse_is_deterministic(input in ".*") {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    /// Any casing of a recognized spelling parses to the same severity.
    #[test]
    fn level_casing_is_irrelevant(index in 0usize..8, mask in any::<u32>()) {
        let table = [
            ("trace", Severity::Debug),
            ("debug", Severity::Debug),
            ("info", Severity::Info),
            ("warn", Severity::Warning),
            ("warning", Severity::Warning),
            ("error", Severity::Error),
            ("critical", Severity::Critical),
            ("off", Severity::Critical),
        ];
        let (spelling, severity) = table[index];

        let parsed = parse(&recase(spelling, mask)).unwrap();
        prop_assert_eq!(parsed.default_severity(), severity);
    }

    /// `::` and `.` separators yield identical specifications.
    #[test]
    fn separators_are_interchangeable(
        segments in prop::collection::vec("[a-zA-Z_][a-zA-Z0-9_]{0,6}", 1..4),
        level_index in 0usize..8,
    ) {
        let levels = ["trace", "debug", "info", "warn", "warning", "error", "critical", "off"];
        let level = levels[level_index];

        let dotted = format!("{}={level}", segments.join("."));
        let double_colon = format!("{}={level}", segments.join("::"));

        prop_assert_eq!(parse(&dotted).unwrap(), parse(&double_colon).unwrap());
    }

    /// A valid component override is stored under its normalized name.
    #[test]
    fn overrides_are_stored_normalized(
        segments in prop::collection::vec("[a-zA-Z_][a-zA-Z0-9_]{0,6}", 1..4),
    ) {
        let name = segments.join(".");
        let parsed = parse(&format!("{}=debug", segments.join("::"))).unwrap();

        prop_assert_eq!(parsed.component_severity(&name), Some(Severity::Debug));
    }
}
