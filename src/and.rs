use crate::cursor::Cursor;
use crate::parser::{ParseContext, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. The nested
/// form keeps the destructuring pattern explicit about the parsing order.
///
/// The first failure is propagated with the state and cursor at the point of
/// failure; nothing is rewound.
pub struct Pair<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Pair<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Pair { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Pair<P1, P2>
where
    P1: Parser,
    P2: Parser<State = P1::State>,
{
    type State = P1::State;
    type Output = (P1::Output, P2::Output);

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        let ParseContext {
            state,
            cursor,
            outcome,
        } = self.parser1.parse(state, cursor);
        let first = match outcome {
            Ok(value) => value,
            Err(error) => return ParseContext::failure(state, cursor, error),
        };

        self.parser2
            .parse(state, cursor)
            .map(|second| (first, second))
    }
}

/// Sequence two parsers, keeping the result of the first
pub struct ThenIgnore<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> ThenIgnore<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        ThenIgnore { parser1, parser2 }
    }
}

impl<P1, P2> Parser for ThenIgnore<P1, P2>
where
    P1: Parser,
    P2: Parser<State = P1::State>,
{
    type State = P1::State;
    type Output = P1::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        let ParseContext {
            state,
            cursor,
            outcome,
        } = self.parser1.parse(state, cursor);
        let first = match outcome {
            Ok(value) => value,
            Err(error) => return ParseContext::failure(state, cursor, error),
        };

        self.parser2.parse(state, cursor).map(|_| first)
    }
}

/// Sequence two parsers, keeping the result of the second
pub struct IgnoreThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> IgnoreThen<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        IgnoreThen { parser1, parser2 }
    }
}

impl<P1, P2> Parser for IgnoreThen<P1, P2>
where
    P1: Parser,
    P2: Parser<State = P1::State>,
{
    type State = P1::State;
    type Output = P2::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        let ParseContext {
            state,
            cursor,
            outcome,
        } = self.parser1.parse(state, cursor);
        if let Err(error) = outcome {
            return ParseContext::failure(state, cursor, error);
        }

        self.parser2.parse(state, cursor)
    }
}

/// Convenience function to create a Pair parser
pub fn pair<P1, P2>(parser1: P1, parser2: P2) -> Pair<P1, P2>
where
    P1: Parser,
    P2: Parser<State = P1::State>,
{
    Pair::new(parser1, parser2)
}

/// Extension trait to add .and(), .then_ignore() and .ignore_then() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> Pair<Self, P>
    where
        P: Parser<State = Self::State>,
    {
        Pair::new(self, other)
    }

    fn then_ignore<P>(self, other: P) -> ThenIgnore<Self, P>
    where
        P: Parser<State = Self::State>,
    {
        ThenIgnore::new(self, other)
    }

    fn ignore_then<P>(self, other: P) -> IgnoreThen<Self, P>
    where
        P: Parser<State = Self::State>,
    {
        IgnoreThen::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}
