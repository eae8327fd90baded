use crate::cursor::Cursor;
use crate::map::Skip;
use crate::parser::{ParseContext, Parser};

/// Apply `parser` until it fails or stops making progress
///
/// Returns the collected results with the state and cursor from just before
/// the attempt that stopped the loop. An application that succeeds without
/// moving the cursor ends the loop and its result is dropped, so parsers that
/// can match the empty string do not loop forever.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    mut results: Vec<P::Output>,
    mut state: P::State,
    mut cursor: Cursor<'code>,
) -> ParseContext<'code, P::State, Vec<P::Output>>
where
    P: Parser,
    P::State: Clone,
{
    loop {
        match parser.parse(state.clone(), cursor) {
            ParseContext {
                state: next_state,
                cursor: next_cursor,
                outcome: Ok(value),
            } if next_cursor != cursor => {
                results.push(value);
                state = next_state;
                cursor = next_cursor;
            }
            _ => return ParseContext::success(state, cursor, results),
        }
    }
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
    P::State: Clone,
{
    type State = P::State;
    type Output = Vec<P::Output>;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        repeat(&self.parser, Vec::new(), state, cursor)
    }
}

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Fails exactly when the first application fails.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<P> Parser for Many1<P>
where
    P: Parser,
    P::State: Clone,
{
    type State = P::State;
    type Output = Vec<P::Output>;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        // First parse must succeed
        let ParseContext {
            state,
            cursor,
            outcome,
        } = self.parser.parse(state, cursor);
        match outcome {
            Ok(first) => repeat(&self.parser, vec![first], state, cursor),
            Err(error) => ParseContext::failure(state, cursor, error),
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}

/// Convenience function to create a Many1 parser
pub fn many1<P>(parser: P) -> Many1<P>
where
    P: Parser,
{
    Many1::new(parser)
}

/// Like `many`, discarding the results
pub fn skip_many<P>(parser: P) -> Skip<Many<P>>
where
    P: Parser,
{
    Skip::new(Many::new(parser))
}

/// Like `many1`, discarding the results
pub fn skip_many1<P>(parser: P) -> Skip<Many1<P>>
where
    P: Parser,
{
    Skip::new(Many1::new(parser))
}

/// Extension trait to add .many() and .many1() method support for parsers
pub trait ManyExt: Parser + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<P> ManyExt for P where P: Parser {}
