use crate::and::{IgnoreThen, Pair, ThenIgnore};
use crate::cursor::Cursor;
use crate::map::Map;
use crate::or::Or;
use crate::parser::{ParseContext, Parser};
use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

type DynParser<S, T> = Rc<dyn Parser<State = S, Output = T>>;

/// Type-erased, cheaply cloneable parser
///
/// Grammar rules that refer to themselves need a nameable return type, which
/// is what this provides. It also carries the operator aliases:
///
/// - `a + b` sequences and keeps both results as a pair
/// - `a - b` sequences and keeps the left result
/// - `a * b` sequences and keeps the right result
/// - `a | b` tries `a`, then `b` from the same position
/// - `a >> f` maps the result through `f`
pub struct BoxedParser<S, T> {
    parser: DynParser<S, T>,
}

impl<S, T> Clone for BoxedParser<S, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<S, T> BoxedParser<S, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<State = S, Output = T> + 'static,
    {
        BoxedParser {
            parser: Rc::new(parser),
        }
    }
}

impl<S, T> Parser for BoxedParser<S, T> {
    type State = S;
    type Output = T;

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, T> {
        self.parser.parse(state, cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized + 'static {
    fn boxed(self) -> BoxedParser<Self::State, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<P> BoxedExt for P where P: Parser + 'static {}

impl<S: 'static, T: 'static, U: 'static> Add<BoxedParser<S, U>> for BoxedParser<S, T> {
    type Output = BoxedParser<S, (T, U)>;

    fn add(self, rhs: BoxedParser<S, U>) -> Self::Output {
        BoxedParser::new(Pair::new(self, rhs))
    }
}

impl<S: 'static, T: 'static, U: 'static> Sub<BoxedParser<S, U>> for BoxedParser<S, T> {
    type Output = BoxedParser<S, T>;

    fn sub(self, rhs: BoxedParser<S, U>) -> Self::Output {
        BoxedParser::new(ThenIgnore::new(self, rhs))
    }
}

impl<S: 'static, T: 'static, U: 'static> Mul<BoxedParser<S, U>> for BoxedParser<S, T> {
    type Output = BoxedParser<S, U>;

    fn mul(self, rhs: BoxedParser<S, U>) -> Self::Output {
        BoxedParser::new(IgnoreThen::new(self, rhs))
    }
}

impl<S: Clone + 'static, T: 'static> BitOr for BoxedParser<S, T> {
    type Output = BoxedParser<S, T>;

    fn bitor(self, rhs: BoxedParser<S, T>) -> Self::Output {
        BoxedParser::new(Or::new(self, rhs))
    }
}

impl<S: 'static, T: 'static, U: 'static, F> Shr<F> for BoxedParser<S, T>
where
    F: Fn(T) -> U + 'static,
{
    type Output = BoxedParser<S, U>;

    fn shr(self, f: F) -> Self::Output {
        BoxedParser::new(Map::new(self, f))
    }
}
