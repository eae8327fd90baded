use crate::cursor::Cursor;
use crate::parser::{ParseContext, Parser};
use std::marker::PhantomData;

/// Parser that consumes the longest prefix of characters satisfying a predicate
///
/// Always succeeds, with an empty string when the first character does not
/// satisfy the predicate.
pub struct TakeWhile<F, S> {
    predicate: F,
    _phantom: PhantomData<fn(S) -> S>,
}

impl<F, S> TakeWhile<F, S> {
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<F, S> Parser for TakeWhile<F, S>
where
    F: Fn(char) -> bool,
{
    type State = S;
    type Output = String;

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, String> {
        let remaining = cursor.remaining();
        let len = remaining
            .char_indices()
            .find(|&(_, c)| !(self.predicate)(c))
            .map_or(remaining.len(), |(index, _)| index);

        ParseContext::success(state, cursor.advance(len), remaining[..len].to_string())
    }
}

/// Convenience function to create a TakeWhile parser
pub fn take_while<F, S>(predicate: F) -> TakeWhile<F, S>
where
    F: Fn(char) -> bool,
{
    TakeWhile::new(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_take_while_digits() {
        let context = parse(take_while(|c| c.is_ascii_digit()), "123abc");
        assert_eq!(context.outcome.unwrap(), "123");
        assert_eq!(context.cursor.remaining(), "abc");
    }

    #[test]
    fn test_take_while_no_match_succeeds_empty() {
        let context = parse(take_while(|c| c.is_ascii_digit()), "abc");
        assert_eq!(context.outcome.unwrap(), "");
        assert_eq!(context.cursor.position(), 0);
    }

    #[test]
    fn test_take_while_consumes_everything() {
        let context = parse(take_while(|c| c != ';'), "no semicolon");
        assert_eq!(context.outcome.unwrap(), "no semicolon");
        assert!(context.cursor.eos());
    }

    #[test]
    fn test_take_while_empty_input() {
        let context = parse(take_while(char::is_alphabetic), "");
        assert_eq!(context.outcome.unwrap(), "");
    }

    #[test]
    fn test_take_while_multibyte() {
        let context = parse(take_while(|c| !c.is_ascii()), "héllo");
        assert_eq!(context.outcome.unwrap(), "");

        let context = parse(take_while(char::is_alphabetic), "日本語 text");
        assert_eq!(context.outcome.unwrap(), "日本語");
        assert_eq!(context.cursor.remaining(), " text");
    }
}
