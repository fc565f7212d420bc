//! Property-based tests for the declaration parser
//!
//! Invariants that hold for every input string:
//! - Totality: parsing never panics and always yields a descriptor
//! - Determinism: the same text parses to the same descriptor
//! - Canonical names contain no `::` and no surrounding whitespace

use apigraph_ir::features::declaration_parser::split_generic_arguments;
use apigraph_ir::{parse, DeclarationParser};
use proptest::prelude::*;

/// No underscores, so an identifier never contains a SAL/RPC marker
fn identifier() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9]{0,8}".prop_filter("System prefix is repaired", |s| !s.starts_with("System"))
}

fn qualified_name() -> impl Strategy<Value = String> {
    prop::collection::vec(identifier(), 1..4).prop_map(|parts| parts.join("::"))
}

fn decoration() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "*", "**", "^", "&", "[]"])
}

proptest! {
    #[test]
    fn prop_parse_is_total_and_deterministic(raw in ".{0,64}") {
        let parser = DeclarationParser::new();
        let first = parser.parse(&raw);
        let second = parser.parse(&raw);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_canonical_names_are_clean(raw in ".{0,64}") {
        let d = parse(&raw);
        prop_assert!(!d.full_name.contains("::"));
        prop_assert_eq!(d.full_name.trim(), d.full_name.as_str());
    }

    #[test]
    fn prop_decorated_names_keep_their_identity(
        name in qualified_name(),
        deco in decoration(),
        constant in any::<bool>(),
    ) {
        let raw = format!("{}{}{}", if constant { "const " } else { "" }, name, deco);
        let d = parse(&raw);
        prop_assert!(!d.is_ambiguous);
        prop_assert_eq!(d.full_name, name.replace("::", "."));
        prop_assert_eq!(d.is_const, constant);
    }

    #[test]
    fn prop_generic_argument_count(args in prop::collection::vec(qualified_name(), 1..5)) {
        let raw = format!("IVector<{}>", args.join(", "));
        let d = parse(&raw);
        prop_assert!(d.is_generic);
        prop_assert_eq!(d.generic_arguments.len(), args.len());
        prop_assert_eq!(split_generic_arguments(&args.join(", ")).len(), args.len());
    }
}
