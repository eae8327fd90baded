pub mod character;
pub mod end;
pub mod literal;
pub mod pattern;
pub mod take_while;

use crate::and::{AndExt, ThenIgnore};
use crate::parser::Parser;

pub use character::{any_char, satisfy};
pub use end::end_of_input;
pub use literal::literal;
pub use pattern::{AnchoredMatcher, RegexMatcher, pattern, pattern_with};
pub use take_while::{TakeWhile, take_while};

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Parser for the longest run of spaces, tabs, carriage returns and newlines
///
/// Always succeeds, possibly with an empty string.
pub fn whitespace<S>() -> TakeWhile<fn(char) -> bool, S> {
    take_while(is_whitespace as fn(char) -> bool)
}

/// Run `parser` and skip any whitespace after it, keeping the parser's result
pub fn lexeme<P>(parser: P) -> ThenIgnore<P, TakeWhile<fn(char) -> bool, P::State>>
where
    P: Parser,
{
    parser.then_ignore(whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::many;
    use crate::parser::parse;
    use rstest::rstest;

    #[rstest]
    #[case("   x", "   ", "x")]
    #[case("\t\r\n x", "\t\r\n ", "x")]
    #[case("x", "", "x")]
    #[case("", "", "")]
    #[case("\u{00A0}x", "", "\u{00A0}x")]
    fn test_whitespace(#[case] input: &str, #[case] skipped: &str, #[case] remaining: &str) {
        let context = parse(whitespace(), input);
        assert_eq!(context.outcome.as_deref(), Ok(skipped));
        assert_eq!(context.cursor.remaining(), remaining);
    }

    #[test]
    fn test_lexeme_skips_trailing_whitespace() {
        let context = parse(many(lexeme(literal("a"))), "a a\n a!");
        assert_eq!(context.outcome.unwrap().len(), 3);
        assert_eq!(context.cursor.remaining(), "!");
    }
}
