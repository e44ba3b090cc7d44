//! Grammar agreement properties.
//!
//! Validation (anchored whole-string match) and extraction (unanchored lazy
//! scan) are independent passes over the same input. These properties pin
//! down that the passes agree: every accepted manifest extracts exactly the
//! arguments it was built from, and a manifest broken anywhere is rejected
//! outright.

use docinc_directives::extract;
use proptest::prelude::*;

/// Valid directive arguments: the full allowed character class, empty included.
fn argument() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9./_]{0,24}").unwrap()
}

/// Whitespace runs permitted around directives.
fn gap() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ \t\n]{0,4}").unwrap()
}

/// Assemble a manifest from leading whitespace and (argument, gap) pairs.
fn manifest_from(lead: &str, parts: &[(String, String)]) -> String {
    let mut manifest = lead.to_owned();
    for (arg, ws) in parts {
        manifest.push_str("@include(");
        manifest.push_str(arg);
        manifest.push(')');
        manifest.push_str(ws);
    }
    manifest
}

proptest! {
    /// Every manifest the validator accepts extracts its arguments in order.
    #[test]
    fn accepted_manifest_extracts_in_order(
        lead in gap(),
        parts in prop::collection::vec((argument(), gap()), 0..8),
    ) {
        let manifest = manifest_from(&lead, &parts);

        let extracted = extract(&manifest).expect("valid manifest rejected");
        let expected: Vec<String> = parts.iter().map(|(arg, _)| arg.clone()).collect();
        prop_assert_eq!(extracted, expected);
    }

    /// A manifest with a stray character after its directives is rejected,
    /// never partially extracted.
    #[test]
    fn stray_suffix_is_rejected(
        parts in prop::collection::vec((argument(), gap()), 1..6),
        stray in proptest::char::range('A', 'Z'),
    ) {
        let mut manifest = manifest_from("", &parts);
        manifest.push(stray);

        prop_assert!(extract(&manifest).is_err());
    }

    /// An uppercase letter inside any argument invalidates the whole manifest.
    #[test]
    fn uppercase_argument_is_rejected(
        before in argument(),
        bad in proptest::char::range('A', 'Z'),
        after in argument(),
        trailing in prop::collection::vec((argument(), gap()), 0..3),
    ) {
        let mut manifest = format!("@include({before}{bad}{after}) ");
        manifest.push_str(&manifest_from("", &trailing));

        prop_assert!(extract(&manifest).is_err());
    }

    /// Text without an `@` cannot contain the trigger, so extraction is an
    /// empty passthrough even when the text spells out "include".
    #[test]
    fn no_trigger_is_passthrough(text in "[a-z0-9 .,_/()-]{0,64}") {
        let extracted = extract(&text).expect("trigger-free text rejected");
        prop_assert!(extracted.is_empty());
    }
}
