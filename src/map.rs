use crate::cursor::Cursor;
use crate::parser::{ParseContext, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Failures pass through unchanged, and the state and cursor are whatever the
/// inner parser left behind in either case.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type State = P::State;
    type Output = U;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, U> {
        self.parser.parse(state, cursor).map(&self.mapper)
    }
}

/// Parser combinator that discards the output of a parser
pub struct Skip<P> {
    parser: P,
}

impl<P> Skip<P> {
    pub fn new(parser: P) -> Self {
        Skip { parser }
    }
}

impl<P> Parser for Skip<P>
where
    P: Parser,
{
    type State = P::State;
    type Output = ();

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, ()> {
        self.parser.parse(state, cursor).map(|_| ())
    }
}

/// Extension trait to add .map() and .skip() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn skip(self) -> Skip<Self> {
        Skip::new(self)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Convenience function to create a Skip parser
pub fn skip<P>(parser: P) -> Skip<P>
where
    P: Parser,
{
    Skip::new(parser)
}
