use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseContext, Parser};
use std::marker::PhantomData;

/// Parser that succeeds only when no input remains
pub struct EndOfInput<S> {
    _phantom: PhantomData<fn(S) -> S>,
}

impl<S> Parser for EndOfInput<S> {
    type State = S;
    type Output = ();

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, ()> {
        if cursor.eos() {
            ParseContext::success(state, cursor, ())
        } else {
            ParseContext::failure(state, cursor, ParseError::new("expected end of input"))
        }
    }
}

pub fn end_of_input<S>() -> EndOfInput<S> {
    EndOfInput {
        _phantom: PhantomData,
    }
}
