use crate::cursor::{Cursor, Location};
use crate::parser::{ParseContext, Parser};
use std::marker::PhantomData;

/// Represents the byte range of input a parser consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the slice of `source` that this span represents
    pub fn slice<'code>(&self, source: &'code str) -> &'code str {
        &source[self.start..self.end]
    }
}

/// A parser combinator that captures the position span of a successful parse
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<P> Parser for Spanned<P>
where
    P: Parser,
{
    type State = P::State;
    type Output = (P::Output, Span);

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        let start = cursor.position();
        let context = self.parser.parse(state, cursor);
        let end = context.cursor.position();
        context.map(|value| (value, Span::new(start, end)))
    }
}

/// Parser that hands the current location to a function choosing the next parser
///
/// Computing the location does not consume input.
pub struct WithLocation<F, S> {
    builder: F,
    _phantom: PhantomData<fn(S) -> S>,
}

impl<F, S, P> Parser for WithLocation<F, S>
where
    F: Fn(Location<'_>) -> P,
    P: Parser<State = S>,
{
    type State = S;
    type Output = P::Output;

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, P::Output> {
        (self.builder)(cursor.locate()).parse(state, cursor)
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt: Parser + Sized {
    /// Wrap this parser to capture its position span
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<P> PositionExt for P where P: Parser {}

/// Convenience function to create a Spanned combinator
pub fn spanned<P>(parser: P) -> Spanned<P>
where
    P: Parser,
{
    Spanned::new(parser)
}

pub fn with_location<F, S, P>(builder: F) -> WithLocation<F, S>
where
    F: Fn(Location<'_>) -> P,
    P: Parser<State = S>,
{
    WithLocation {
        builder,
        _phantom: PhantomData,
    }
}

/// Like `with_location`, passing only the 1-based line number
pub fn with_line<F, S, P>(builder: F) -> WithLocation<impl Fn(Location<'_>) -> P, S>
where
    F: Fn(usize) -> P,
    P: Parser<State = S>,
{
    with_location(move |location: Location<'_>| builder(location.line))
}

/// Like `with_location`, passing only the 1-based column
pub fn with_column<F, S, P>(builder: F) -> WithLocation<impl Fn(Location<'_>) -> P, S>
where
    F: Fn(usize) -> P,
    P: Parser<State = S>,
{
    with_location(move |location: Location<'_>| builder(location.column))
}
