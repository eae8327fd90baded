use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseContext, Parser};

/// Parser combinator that performs positive lookahead
///
/// On success the cursor is put back where it was, but the state the inner
/// parser produced is kept: state changes made while looking ahead are
/// visible afterwards. A failure is propagated exactly as the inner parser
/// returned it.
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<P> Parser for Lookahead<P>
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
        match self.parser.parse(state, cursor) {
            ParseContext {
                state,
                outcome: Ok(value),
                ..
            } => ParseContext::success(state, cursor, value),
            failure => failure,
        }
    }
}

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input or changes the state regardless of outcome.
pub struct NotFollowedBy<P> {
    parser: P,
}

impl<P> NotFollowedBy<P> {
    pub fn new(parser: P) -> Self {
        NotFollowedBy { parser }
    }
}

impl<P> Parser for NotFollowedBy<P>
where
    P: Parser,
    P::State: Clone,
{
    type State = P::State;
    type Output = ();

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, ()> {
        if self.parser.parse(state.clone(), cursor).is_success() {
            ParseContext::failure(state, cursor, ParseError::new("unexpected input"))
        } else {
            ParseContext::success(state, cursor, ())
        }
    }
}

/// Convenience function to create a Lookahead parser
pub fn lookahead<P>(parser: P) -> Lookahead<P>
where
    P: Parser,
{
    Lookahead::new(parser)
}

/// Convenience function to create a NotFollowedBy parser for negative lookahead
pub fn not_followed_by<P>(parser: P) -> NotFollowedBy<P>
where
    P: Parser,
{
    NotFollowedBy::new(parser)
}

/// Extension trait to add .lookahead() and .not_followed_by() method support for parsers
pub trait LookaheadExt: Parser + Sized {
    fn lookahead(self) -> Lookahead<Self> {
        Lookahead::new(self)
    }

    fn not_followed_by(self) -> NotFollowedBy<Self> {
        NotFollowedBy::new(self)
    }
}

/// Implement LookaheadExt for all parsers
impl<P> LookaheadExt for P where P: Parser {}
