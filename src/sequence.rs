use crate::cursor::Cursor;
use crate::parser::{ParseContext, Parser};

/// Parser combinator that runs a list of parsers one after another
///
/// Each parser starts where its predecessor stopped. The results are collected
/// in order; the first failure stops the run and is propagated, discarding the
/// results collected so far.
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<P> Parser for Sequence<P>
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
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let context = parser.parse(state, cursor);
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

/// Convenience function to create a Sequence parser
pub fn sequence<P>(parsers: impl IntoIterator<Item = P>) -> Sequence<P>
where
    P: Parser,
{
    Sequence::new(parsers.into_iter().collect())
}
