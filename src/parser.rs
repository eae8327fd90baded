use crate::cursor::Cursor;
use crate::error::{Outcome, ParseError, ParseFailure};
use std::marker::PhantomData;
use std::rc::Rc;

/// Core parser trait for parser combinators
///
/// A parser threads a user supplied state and a cursor through one application
/// and reports the state and cursor it leaves behind together with its outcome.
/// Failure is a returned value, never a panic. Parsers do not backtrack on their
/// own: on failure the returned cursor reflects whatever input was consumed
/// before the failure, and it is up to combinators like `or` to rewind.
pub trait Parser {
    /// User state threaded through every application
    type State;
    type Output;

    /// Apply this parser once at the given state and cursor
    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output>;
}

/// Everything a single parser application produced
#[derive(Debug, Clone, PartialEq)]
pub struct ParseContext<'code, S, T> {
    pub state: S,
    pub cursor: Cursor<'code>,
    pub outcome: Outcome<T>,
}

impl<'code, S, T> ParseContext<'code, S, T> {
    pub fn new(state: S, cursor: Cursor<'code>, outcome: Outcome<T>) -> Self {
        ParseContext {
            state,
            cursor,
            outcome,
        }
    }

    pub fn success(state: S, cursor: Cursor<'code>, value: T) -> Self {
        ParseContext::new(state, cursor, Ok(value))
    }

    pub fn failure(state: S, cursor: Cursor<'code>, error: ParseError) -> Self {
        ParseContext::new(state, cursor, Err(error))
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The input left unconsumed by this application
    pub fn remaining(&self) -> &'code str {
        self.cursor.remaining()
    }

    /// Transform the success value, keeping state and cursor as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseContext<'code, S, U> {
        ParseContext::new(self.state, self.cursor, self.outcome.map(f))
    }

    /// Transform the failure payload, keeping state and cursor as they are
    pub fn map_err(self, f: impl FnOnce(ParseError) -> ParseError) -> Self {
        ParseContext::new(self.state, self.cursor, self.outcome.map_err(f))
    }

    /// Convert into a plain `Result`, locating the failure in the input
    pub fn finish(self) -> Result<(S, T), ParseFailure> {
        match self.outcome {
            Ok(value) => Ok((self.state, value)),
            Err(error) => {
                tracing::debug!(
                    position = self.cursor.position(),
                    %error,
                    "building parse failure report"
                );
                Err(ParseFailure::new(
                    self.cursor.locate(),
                    self.cursor.position(),
                    error,
                ))
            }
        }
    }
}

/// A parser built directly from a function over state and cursor
pub struct Primitive<F, S, T> {
    function: F,
    _phantom: PhantomData<fn(S) -> T>,
}

impl<F, S, T> Primitive<F, S, T> {
    pub fn new(function: F) -> Self {
        Primitive {
            function,
            _phantom: PhantomData,
        }
    }
}

impl<F, S, T> Parser for Primitive<F, S, T>
where
    F: for<'code> Fn(S, Cursor<'code>) -> ParseContext<'code, S, T>,
{
    type State = S;
    type Output = T;

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, T> {
        (self.function)(state, cursor)
    }
}

/// Create a parser from a function over state and cursor
pub fn primitive<F, S, T>(function: F) -> Primitive<F, S, T>
where
    F: for<'code> Fn(S, Cursor<'code>) -> ParseContext<'code, S, T>,
{
    Primitive::new(function)
}

impl<P> Parser for &P
where
    P: Parser + ?Sized,
{
    type State = P::State;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        (**self).parse(state, cursor)
    }
}

impl<P> Parser for Rc<P>
where
    P: Parser + ?Sized,
{
    type State = P::State;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        (**self).parse(state, cursor)
    }
}

impl<P> Parser for Box<P>
where
    P: Parser + ?Sized,
{
    type State = P::State;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        (**self).parse(state, cursor)
    }
}

/// Run a parser over `input` starting from an explicit user state
pub fn run<'code, P>(
    parser: P,
    state: P::State,
    input: &'code str,
) -> ParseContext<'code, P::State, P::Output>
where
    P: Parser,
{
    tracing::trace!(input_len = input.len(), "running parser");

    let context = parser.parse(state, Cursor::new(input));
    if let Err(error) = &context.outcome {
        tracing::debug!(
            position = context.cursor.position(),
            %error,
            "parse failed"
        );
    }
    context
}

/// Run a parser that needs no user state over `input`
pub fn parse<'code, P>(parser: P, input: &'code str) -> ParseContext<'code, (), P::Output>
where
    P: Parser<State = ()>,
{
    run(parser, (), input)
}
