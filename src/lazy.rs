use crate::cursor::Cursor;
use crate::parser::{ParseContext, Parser};
use once_cell::unsync::OnceCell;

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// The factory runs on the first application only; the parser it returns is
/// cached and reused for every later application. This breaks the construction
/// time recursion of self-referential and mutually recursive grammar rules.
///
/// The cache is a single-threaded cell, so a `Lazy` is never `Sync` and one
/// grammar definition cannot be forced from two threads at once.
pub struct Lazy<F, P> {
    factory: F,
    parser: OnceCell<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceCell::new(),
        }
    }

    /// Whether the factory has already been run
    pub fn is_forced(&self) -> bool {
        self.parser.get().is_some()
    }

    fn force(&self) -> &P {
        self.parser.get_or_init(|| {
            tracing::trace!("forcing deferred parser");
            (self.factory)()
        })
    }
}

impl<F, P> Parser for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    type State = P::State;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        self.force().parse(state, cursor)
    }
}

/// Create a parser whose construction is deferred until it is first applied
///
/// Use this for grammar rules that refer to themselves:
///
/// ```
/// use parsistate::{BoxedExt, BoxedParser, MapExt, many, parens, parse, recursive};
///
/// fn nesting() -> BoxedParser<(), usize> {
///     recursive(|| many(parens(nesting())).map(|inner| 1 + inner.into_iter().sum::<usize>()))
///         .boxed()
/// }
///
/// assert_eq!(parse(nesting(), "(()())").outcome, Ok(4));
/// ```
pub fn recursive<F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}
