use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseContext, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that consumes a single character accepted by a predicate
///
/// Fails with `expected <description>` and consumes nothing when the next
/// character is rejected or the input is exhausted.
pub struct Satisfy<F, S> {
    predicate: F,
    description: Cow<'static, str>,
    _phantom: PhantomData<fn(S) -> S>,
}

impl<F, S> Satisfy<F, S> {
    pub fn new(predicate: F, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            predicate,
            description: description.into(),
            _phantom: PhantomData,
        }
    }
}

impl<F, S> Parser for Satisfy<F, S>
where
    F: Fn(char) -> bool,
{
    type State = S;
    type Output = char;

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, char> {
        match cursor.remaining().chars().next() {
            Some(c) if (self.predicate)(c) => {
                ParseContext::success(state, cursor.advance(c.len_utf8()), c)
            }
            _ => ParseContext::failure(
                state,
                cursor,
                ParseError::new(format!("expected {}", self.description)),
            ),
        }
    }
}

/// Parser that consumes and returns a single character
pub struct AnyChar<S> {
    _phantom: PhantomData<fn(S) -> S>,
}

impl<S> Parser for AnyChar<S> {
    type State = S;
    type Output = char;

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, char> {
        match cursor.remaining().chars().next() {
            Some(c) => ParseContext::success(state, cursor.advance(c.len_utf8()), c),
            None => ParseContext::failure(
                state,
                cursor,
                ParseError::new("unexpected end of input"),
            ),
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F, S>(predicate: F, description: impl Into<Cow<'static, str>>) -> Satisfy<F, S>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, description)
}

/// Convenience function to create an AnyChar parser
pub fn any_char<S>() -> AnyChar<S> {
    AnyChar {
        _phantom: PhantomData,
    }
}
