use crate::cursor::Cursor;
use crate::parser::{ParseContext, Parser};

/// Parser combinator that feeds the result of one parser into a function
/// choosing the parser to run next
///
/// The chosen parser starts from the state and cursor the first parser left
/// behind. A failure of the first parser is propagated unchanged.
pub struct Then<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Then<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Then { parser, next }
    }
}

impl<P, F, P2> Parser for Then<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> P2,
    P2: Parser<State = P::State>,
{
    type State = P::State;
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
        } = self.parser.parse(state, cursor);

        match outcome {
            Ok(value) => (self.next)(value).parse(state, cursor),
            Err(error) => ParseContext::failure(state, cursor, error),
        }
    }
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt: Parser + Sized {
    fn then<F, P2>(self, next: F) -> Then<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<State = Self::State>,
    {
        Then::new(self, next)
    }
}

/// Implement ThenExt for all parsers
impl<P> ThenExt for P where P: Parser {}

/// Convenience function to create a Then parser
pub fn then<P, F, P2>(parser: P, next: F) -> Then<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> P2,
    P2: Parser<State = P::State>,
{
    Then::new(parser, next)
}
