use crate::cursor::Cursor;
use crate::parser::{ParseContext, Parser};

/// Parser combinator that applies a parser exactly `n` times
///
/// Fails with the first failing application, leaving the state and cursor
/// where that application left them. `n == 0` succeeds with an empty vector
/// without consuming anything.
pub struct Count<P> {
    times: usize,
    parser: P,
}

impl<P> Count<P> {
    pub fn new(times: usize, parser: P) -> Self {
        Count { times, parser }
    }
}

impl<P> Parser for Count<P>
where
    P: Parser,
{
    type State = P::State;
    type Output = Vec<P::Output>;

    fn parse<'code>(
        &self,
        mut state: Self::State,
        mut cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        let mut results = Vec::with_capacity(self.times);

        for _ in 0..self.times {
            let context = self.parser.parse(state, cursor);
            state = context.state;
            cursor = context.cursor;
            match context.outcome {
                Ok(value) => results.push(value),
                Err(error) => return ParseContext::failure(state, cursor, error),
            }
        }

        ParseContext::success(state, cursor, results)
    }
}

/// Convenience function to create a Count parser
pub fn count<P>(times: usize, parser: P) -> Count<P>
where
    P: Parser,
{
    Count::new(times, parser)
}
