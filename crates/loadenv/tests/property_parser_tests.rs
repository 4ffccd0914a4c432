//! Property-based tests for the line parser.
//!
//! Test coverage:
//! - Serializing a parsed map back to `KEY=VALUE` lines and reparsing is stable.
//! - Lines with zero or several separators fail with their own index.
//! - Blank lines anywhere never change the result.

use loadenv::{ParseError, VarMap, parse_lines};
use proptest::prelude::*;

/// Keys and values without `=`, line feeds, or surrounding whitespace.
fn token_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.:/@-]{1,24}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        token_strategy(),
        "[A-Za-z0-9]{1,8} [A-Za-z0-9]{1,8}".prop_map(String::from),
    ]
}

fn vars_strategy() -> impl Strategy<Value = VarMap> {
    prop::collection::btree_map(token_strategy(), value_strategy(), 0..16)
}

/// Lines that are not exactly one pair: no separator, or more than one.
fn malformed_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        token_strategy(),
        (token_strategy(), token_strategy(), token_strategy())
            .prop_map(|(a, b, c)| format!("{a}={b}={c}")),
        (token_strategy(), token_strategy()).prop_map(|(a, b)| format!("{a}=={b}")),
    ]
}

fn blank_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), " {1,4}", "\t{1,2}"]
}

fn serialize(vars: &VarMap) -> Vec<String> {
    vars.iter().map(|(k, v)| format!("{k}={v}")).collect()
}

proptest! {
    #[test]
    fn prop_serialize_reparse_is_stable(vars in vars_strategy()) {
        let parsed = parse_lines(&serialize(&vars)).unwrap();
        let reparsed = parse_lines(&serialize(&parsed)).unwrap();
        prop_assert_eq!(&parsed, &reparsed);
        prop_assert_eq!(parsed, vars);
    }

    #[test]
    fn prop_serialize_order_does_not_matter(vars in vars_strategy()) {
        let mut lines = serialize(&vars);
        lines.reverse();
        prop_assert_eq!(parse_lines(&lines).unwrap(), vars);
    }

    #[test]
    fn prop_malformed_line_reports_its_index(
        vars in vars_strategy(),
        bad in malformed_line_strategy(),
        position in any::<prop::sample::Index>(),
    ) {
        let mut lines = serialize(&vars);
        let index = position.index(lines.len() + 1);
        lines.insert(index, bad);
        prop_assert_eq!(parse_lines(&lines), Err(ParseError { line: index }));
    }

    #[test]
    fn prop_blank_lines_are_ignored(
        vars in vars_strategy(),
        blanks in prop::collection::vec((blank_line_strategy(), any::<prop::sample::Index>()), 0..8),
    ) {
        let mut lines = serialize(&vars);
        for (blank, position) in blanks {
            let index = position.index(lines.len() + 1);
            lines.insert(index, blank);
        }
        prop_assert_eq!(parse_lines(&lines).unwrap(), vars);
    }
}
