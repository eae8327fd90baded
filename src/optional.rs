use crate::always::{Succeed, succeed};
use crate::cursor::Cursor;
use crate::or::Or;
use crate::parser::{ParseContext, Parser};

/// Parser combinator that turns a failure into `None`
///
/// On failure whatever the parser consumed or changed is discarded and the
/// pre-attempt state and cursor are returned.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<P> Parser for Maybe<P>
where
    P: Parser,
    P::State: Clone,
{
    type State = P::State;
    type Output = Option<P::Output>;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        match self.parser.parse(state.clone(), cursor) {
            ParseContext {
                state,
                cursor,
                outcome: Ok(value),
            } => ParseContext::success(state, cursor, Some(value)),
            ParseContext { outcome: Err(_), .. } => ParseContext::success(state, cursor, None),
        }
    }
}

/// Parser that falls back to a default value when the inner parser fails
pub type Optional<P> = Or<P, Succeed<<P as Parser>::Output, <P as Parser>::State>>;

/// Try `parser`, succeeding with `default` from the original position if it fails
pub fn optional<P>(default: P::Output, parser: P) -> Optional<P>
where
    P: Parser,
    P::Output: Clone,
{
    Or::new(parser, succeed(default))
}

/// Convenience function to create a Maybe parser
pub fn maybe<P>(parser: P) -> Maybe<P>
where
    P: Parser,
{
    Maybe::new(parser)
}

/// Extension trait to add .maybe() and .or_default_to() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }

    fn or_default_to(self, default: Self::Output) -> Optional<Self>
    where
        Self::Output: Clone,
    {
        optional(default, self)
    }
}

/// Implement OptionalExt for all parsers
impl<P> OptionalExt for P where P: Parser {}
