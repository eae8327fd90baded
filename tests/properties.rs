//! Property-based tests for the core combinators
//!
//! These check the invariants every parser relies on:
//! - a cursor's position always matches the input it has consumed
//! - repetition terminates even when the repeated parser consumes nothing
//! - alternation reports the messages of both branches in order
//! - backtracking combinators leave no trace of a failed attempt

use parsistate::{
    AndExt, Cursor, MapExt, OrExt, Parser, any_char, chain_left, literal, many, maybe, parse,
    pattern, sep_by, succeed,
};
use proptest::prelude::*;

/// Generate identifiers that never contain the separator
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

proptest! {
    #[test]
    fn literal_consumes_exactly_itself(prefix in "\\PC{1,12}", rest in "\\PC{0,12}") {
        let input = format!("{prefix}{rest}");
        let context = parse(literal(prefix.clone()), &input);

        prop_assert_eq!(context.outcome.as_deref(), Ok(prefix.as_str()));
        prop_assert_eq!(context.cursor.position(), prefix.len());
        prop_assert_eq!(context.cursor.remaining(), rest.as_str());
    }

    #[test]
    fn many_any_char_consumes_everything(input in "\\PC{0,40}") {
        let context = parse(many(any_char()), &input);

        prop_assert_eq!(
            context.outcome.unwrap().into_iter().collect::<String>(),
            input.clone()
        );
        prop_assert!(context.cursor.eos());
        prop_assert_eq!(context.cursor.position(), input.len());
    }

    #[test]
    fn many_of_non_consuming_parser_terminates(input in "\\PC{0,20}") {
        let context = parse(many(succeed(())), &input);

        prop_assert_eq!(context.outcome, Ok(vec![]));
        prop_assert_eq!(context.cursor.position(), 0);
    }

    #[test]
    fn or_reports_both_branches(input in "[c-z]{0,10}") {
        let context = parse(literal("a").or(literal("b")), &input);

        let error = context.outcome.unwrap_err();
        prop_assert_eq!(error.messages(), ["expected \"a\"", "expected \"b\""]);
        prop_assert_eq!(context.cursor.position(), 0);
    }

    #[test]
    fn maybe_rewinds_partial_match(count in 0usize..8) {
        let input = "ab".repeat(count) + "a";
        let pairs = many(literal("a").and(literal("b")));
        let context = parse(pairs.and(maybe(literal("a").and(literal("c")))), &input);

        let (pairs, tail) = context.outcome.unwrap();
        prop_assert_eq!(pairs.len(), count);
        prop_assert!(tail.is_none());
        prop_assert_eq!(context.cursor.remaining(), "a");
    }

    #[test]
    fn sep_by_recovers_joined_items(items in prop::collection::vec(identifier_strategy(), 0..8)) {
        let input = items.join(",");
        let ident = pattern("[a-z][a-z0-9_]*").unwrap();
        let context = parse(sep_by(literal(","), ident), &input);

        prop_assert_eq!(context.outcome.unwrap(), items);
        prop_assert!(context.cursor.eos());
    }

    #[test]
    fn chain_left_matches_fold(numbers in prop::collection::vec(0i64..1000, 1..8)) {
        let input = numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("-");
        let int = pattern("[0-9]+")
            .unwrap()
            .map(|digits| digits.parse::<i64>().unwrap_or_default());
        let minus = literal("-")
            .ignore_then(succeed((|a: i64, b: i64| a - b) as fn(i64, i64) -> i64));

        let expected = numbers[1..].iter().fold(numbers[0], |acc, n| acc - n);
        prop_assert_eq!(parse(chain_left(minus, int), &input).outcome, Ok(expected));
    }

    #[test]
    fn locate_counts_lines(input in "[a-z\\n]{0,40}", offset in 0usize..41) {
        let position = offset.min(input.len());
        let location = Cursor::new(&input).advance(position).locate();

        let before = &input[..position];
        prop_assert_eq!(location.line, before.matches('\n').count() + 1);
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        prop_assert_eq!(location.column, position - line_start + 1);
    }
}

#[test]
fn parser_trait_is_object_safe() {
    let boxed: Box<dyn Parser<State = (), Output = char>> = Box::new(any_char());
    assert_eq!(parse(boxed, "z").outcome, Ok('z'));
}
