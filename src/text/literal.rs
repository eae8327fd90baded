use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseContext, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that matches an exact string at the start of the remaining input
///
/// Consumes the string on a match. On a mismatch it fails with
/// `expected "<string>"` and consumes nothing.
pub struct Literal<S> {
    expected: Cow<'static, str>,
    _phantom: PhantomData<fn(S) -> S>,
}

impl<S> Literal<S> {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
            _phantom: PhantomData,
        }
    }
}

impl<S> Parser for Literal<S> {
    type State = S;
    type Output = Cow<'static, str>;

    fn parse<'code>(
        &self,
        state: S,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, S, Self::Output> {
        if cursor.remaining().starts_with(self.expected.as_ref()) {
            let matched = self.expected.clone();
            ParseContext::success(state, cursor.advance(self.expected.len()), matched)
        } else {
            ParseContext::failure(
                state,
                cursor,
                ParseError::new(format!("expected {:?}", self.expected)),
            )
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal<S>(expected: impl Into<Cow<'static, str>>) -> Literal<S> {
    Literal::new(expected)
}
