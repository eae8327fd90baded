use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseContext, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both attempts start from the same state and cursor, so whatever the first
/// parser consumed before failing is given back. When both fail, the messages
/// of the first come before the messages of the second and the original state
/// and cursor are returned.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P1::State: Clone,
    P2: Parser<State = P1::State, Output = P1::Output>,
{
    type State = P1::State;
    type Output = P1::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        let left = match self.parser1.parse(state.clone(), cursor) {
            ParseContext {
                outcome: Err(error),
                ..
            } => error,
            success => return success,
        };

        let right = match self.parser2.parse(state.clone(), cursor) {
            ParseContext {
                outcome: Err(error),
                ..
            } => error,
            success => return success,
        };

        ParseContext::failure(state, cursor, left.merge(right))
    }
}

/// Parser combinator that tries each parser in order until one succeeds
///
/// Equivalent to folding `or` over the list. An empty list fails without any
/// message.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<P> Parser for Choice<P>
where
    P: Parser,
    P::State: Clone,
{
    type State = P::State;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        let mut errors = ParseError::empty();

        for parser in &self.parsers {
            match parser.parse(state.clone(), cursor) {
                ParseContext {
                    outcome: Err(error),
                    ..
                } => errors = errors.merge(error),
                success => return success,
            }
        }

        ParseContext::failure(state, cursor, errors)
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<State = Self::State, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<State = P1::State, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

/// Convenience function to create a Choice parser
pub fn choice<P>(parsers: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser,
{
    Choice::new(parsers.into_iter().collect())
}
