use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseContext, Parser};
use std::borrow::Cow;

/// Parser combinator that transforms the error messages of a failing parser
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> Parser for MapErr<P, F>
where
    P: Parser,
    F: Fn(ParseError) -> ParseError,
{
    type State = P::State;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        self.parser.parse(state, cursor).map_err(&self.mapper)
    }
}

/// Parser combinator that replaces every error message with a single label
///
/// Used to give grammar rules a user facing name instead of leaking the
/// messages of the primitives they are built from.
pub struct Label<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            message: message.into(),
        }
    }
}

impl<P> Parser for Label<P>
where
    P: Parser,
{
    type State = P::State;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        self.parser
            .parse(state, cursor)
            .map_err(|_| ParseError::new(self.message.as_ref()))
    }
}

/// Extension trait to add .map_err() and .label() method support for parsers
pub trait MapErrExt: Parser + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(ParseError) -> ParseError,
    {
        MapErr::new(self, mapper)
    }

    fn label(self, message: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, message)
    }
}

/// Implement MapErrExt for all parsers
impl<P> MapErrExt for P where P: Parser {}

/// Convenience function to create a MapErr parser
pub fn map_err<P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser,
    F: Fn(ParseError) -> ParseError,
{
    MapErr::new(parser, mapper)
}

/// Convenience function to create a Label parser
pub fn label<P>(message: impl Into<Cow<'static, str>>, parser: P) -> Label<P>
where
    P: Parser,
{
    Label::new(parser, message)
}
