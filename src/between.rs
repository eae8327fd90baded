use crate::cursor::Cursor;
use crate::parser::{ParseContext, Parser};
use crate::text::literal::{Literal, literal};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open`, then `content`, then `close`, and returns just the content
/// value with the delimiters discarded. The first failure is propagated.
///
/// This does not handle whitespace automatically; wrap the delimiters in
/// `lexeme` for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
/// - `"{data}"` → `"data"`
pub struct Between<P1, P2, P3> {
    open: P1,
    close: P2,
    content: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, close: P2, content: P3) -> Self {
        Between {
            open,
            close,
            content,
        }
    }
}

impl<P1, P2, P3> Parser for Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser<State = P1::State>,
    P3: Parser<State = P1::State>,
{
    type State = P1::State;
    type Output = P3::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        let ParseContext {
            state,
            cursor,
            outcome,
        } = self.open.parse(state, cursor);
        if let Err(error) = outcome {
            return ParseContext::failure(state, cursor, error);
        }

        let ParseContext {
            state,
            cursor,
            outcome,
        } = self.content.parse(state, cursor);
        let value = match outcome {
            Ok(value) => value,
            Err(error) => return ParseContext::failure(state, cursor, error),
        };

        self.close.parse(state, cursor).map(|_| value)
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<P1, P2, P3>(open: P1, close: P2, content: P3) -> Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser<State = P1::State>,
    P3: Parser<State = P1::State>,
{
    Between::new(open, close, content)
}

/// Content between `(` and `)`
pub fn parens<P>(content: P) -> Between<Literal<P::State>, Literal<P::State>, P>
where
    P: Parser,
{
    between(literal("("), literal(")"), content)
}

/// Content between `{` and `}`
pub fn braces<P>(content: P) -> Between<Literal<P::State>, Literal<P::State>, P>
where
    P: Parser,
{
    between(literal("{"), literal("}"), content)
}

/// Content between `[` and `]`
pub fn brackets<P>(content: P) -> Between<Literal<P::State>, Literal<P::State>, P>
where
    P: Parser,
{
    between(literal("["), literal("]"), content)
}
