use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseContext, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds with a clone of its value without consuming input
pub struct Succeed<T, S> {
    value: T,
    _phantom: PhantomData<fn(S) -> S>,
}

impl<T, S> Succeed<T, S> {
    pub fn new(value: T) -> Self {
        Succeed {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<T, S> Parser for Succeed<T, S>
where
    T: Clone,
{
    type State = S;
    type Output = T;

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, T> {
        ParseContext::success(state, cursor, self.value.clone())
    }
}

/// Parser that always fails with a single message without consuming input
pub struct Fail<T, S> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn(S) -> (S, T)>,
}

impl<T, S> Fail<T, S> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<T, S> Parser for Fail<T, S> {
    type State = S;
    type Output = T;

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, T> {
        ParseContext::failure(state, cursor, ParseError::new(self.message.as_ref()))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T, S>(value: T) -> Succeed<T, S>
where
    T: Clone,
{
    Succeed::new(value)
}

/// Convenience function to create a Fail parser
pub fn fail<T, S>(message: impl Into<Cow<'static, str>>) -> Fail<T, S> {
    Fail::new(message)
}
