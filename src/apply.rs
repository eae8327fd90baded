use crate::cursor::Cursor;
use crate::parser::{ParseContext, Parser};

/// Parser combinator that runs a parser producing a function, then a parser
/// producing its argument, and applies one to the other
///
/// Either failure is propagated with the state and cursor at the point of
/// failure.
pub struct Apply<PF, PV> {
    function: PF,
    value: PV,
}

impl<PF, PV> Apply<PF, PV> {
    pub fn new(function: PF, value: PV) -> Self {
        Apply { function, value }
    }
}

impl<PF, PV, U> Parser for Apply<PF, PV>
where
    PF: Parser,
    PV: Parser<State = PF::State>,
    PF::Output: FnOnce(PV::Output) -> U,
{
    type State = PF::State;
    type Output = U;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, U> {
        let ParseContext {
            state,
            cursor,
            outcome,
        } = self.function.parse(state, cursor);
        let function = match outcome {
            Ok(function) => function,
            Err(error) => return ParseContext::failure(state, cursor, error),
        };

        self.value.parse(state, cursor).map(function)
    }
}

/// Extension trait to add .apply() method support for parsers producing functions
pub trait ApplyExt: Parser + Sized {
    fn apply<PV>(self, value: PV) -> Apply<Self, PV>
    where
        PV: Parser<State = Self::State>,
    {
        Apply::new(self, value)
    }
}

/// Implement ApplyExt for all parsers
impl<P> ApplyExt for P where P: Parser {}

/// Convenience function to create an Apply parser
pub fn apply<PF, PV, U>(function: PF, value: PV) -> Apply<PF, PV>
where
    PF: Parser,
    PV: Parser<State = PF::State>,
    PF::Output: FnOnce(PV::Output) -> U,
{
    Apply::new(function, value)
}
