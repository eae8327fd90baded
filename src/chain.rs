use crate::and::Pair;
use crate::cursor::Cursor;
use crate::many::repeat;
use crate::parser::{ParseContext, Parser};

/// Collect `first (op operand)*`, stopping before an incomplete `op operand` pair
fn operands<'code, O, P>(
    op: &O,
    parser: &P,
    state: P::State,
    cursor: Cursor<'code>,
) -> ParseContext<'code, P::State, (P::Output, Vec<(O::Output, P::Output)>)>
where
    P: Parser,
    P::State: Clone,
    O: Parser<State = P::State>,
{
    let ParseContext {
        state,
        cursor,
        outcome,
    } = parser.parse(state, cursor);
    let first = match outcome {
        Ok(value) => value,
        Err(error) => return ParseContext::failure(state, cursor, error),
    };

    repeat(&Pair::new(op, parser), Vec::new(), state, cursor).map(|rest| (first, rest))
}

/// Parser combinator for left-associative binary operator chains
///
/// Parses one or more operands separated by operators and folds them from the
/// left: `1 - 2 - 3` becomes `(1 - 2) - 3`. The operator parser yields the
/// function that combines its neighbours.
pub struct ChainLeft<O, P> {
    op: O,
    parser: P,
}

impl<O, P> ChainLeft<O, P> {
    pub fn new(op: O, parser: P) -> Self {
        ChainLeft { op, parser }
    }
}

impl<O, P> Parser for ChainLeft<O, P>
where
    P: Parser,
    P::State: Clone,
    O: Parser<State = P::State>,
    O::Output: FnOnce(P::Output, P::Output) -> P::Output,
{
    type State = P::State;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        operands(&self.op, &self.parser, state, cursor)
            .map(|(first, rest)| rest.into_iter().fold(first, |acc, (f, next)| f(acc, next)))
    }
}

/// Parser combinator for right-associative binary operator chains
///
/// Like [`ChainLeft`] but folds from the right: `2 ^ 3 ^ 2` becomes
/// `2 ^ (3 ^ 2)`.
pub struct ChainRight<O, P> {
    op: O,
    parser: P,
}

impl<O, P> ChainRight<O, P> {
    pub fn new(op: O, parser: P) -> Self {
        ChainRight { op, parser }
    }
}

impl<O, P> Parser for ChainRight<O, P>
where
    P: Parser,
    P::State: Clone,
    O: Parser<State = P::State>,
    O::Output: FnOnce(P::Output, P::Output) -> P::Output,
{
    type State = P::State;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        operands(&self.op, &self.parser, state, cursor).map(|(first, rest)| {
            let mut rest = rest.into_iter().rev();
            match rest.next() {
                None => first,
                Some(last) => {
                    let (op, rhs) = rest.fold(last, |(op, rhs), (next_op, lhs)| {
                        (next_op, op(lhs, rhs))
                    });
                    op(first, rhs)
                }
            }
        })
    }
}

/// Convenience function to create a ChainLeft parser
pub fn chain_left<O, P>(op: O, parser: P) -> ChainLeft<O, P>
where
    P: Parser,
    O: Parser<State = P::State>,
{
    ChainLeft::new(op, parser)
}

/// Convenience function to create a ChainRight parser
pub fn chain_right<O, P>(op: O, parser: P) -> ChainRight<O, P>
where
    P: Parser,
    O: Parser<State = P::State>,
{
    ChainRight::new(op, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::always::succeed;
    use crate::and::AndExt;
    use crate::map::MapExt;
    use crate::parser::parse;
    use crate::text::{literal, pattern};

    type BinOp = fn(i64, i64) -> i64;

    fn int() -> impl Parser<State = (), Output = i64> {
        pattern("[0-9]+")
            .unwrap()
            .map(|digits| digits.parse::<i64>().unwrap_or_default())
    }

    fn minus() -> impl Parser<State = (), Output = BinOp> {
        literal("-").ignore_then(succeed((|a: i64, b: i64| a - b) as BinOp))
    }

    fn power() -> impl Parser<State = (), Output = BinOp> {
        literal("^").ignore_then(succeed((|a: i64, b: i64| a.pow(b as u32)) as BinOp))
    }

    #[test]
    fn test_chain_left_subtraction() {
        let context = parse(chain_left(minus(), int()), "1-2-3");
        assert_eq!(context.outcome, Ok(-4));
        assert!(context.cursor.eos());
    }

    #[test]
    fn test_chain_right_subtraction() {
        let context = parse(chain_right(minus(), int()), "1-2-3");
        assert_eq!(context.outcome, Ok(2));
        assert!(context.cursor.eos());
    }

    #[test]
    fn test_chain_right_power() {
        let context = parse(chain_right(power(), int()), "2^3^2");
        assert_eq!(context.outcome, Ok(512));
    }

    #[test]
    fn test_chain_single_operand() {
        assert_eq!(parse(chain_left(minus(), int()), "7").outcome, Ok(7));
        assert_eq!(parse(chain_right(minus(), int()), "7").outcome, Ok(7));
    }

    #[test]
    fn test_chain_left_rewinds_dangling_operator() {
        let context = parse(chain_left(minus(), int()), "5-1-x");
        assert_eq!(context.outcome, Ok(4));
        assert_eq!(context.cursor.remaining(), "-x");
    }

    #[test]
    fn test_chain_right_rewinds_dangling_operator() {
        let context = parse(chain_right(minus(), int()), "5-1-");
        assert_eq!(context.outcome, Ok(4));
        assert_eq!(context.cursor.remaining(), "-");
    }

    #[test]
    fn test_chain_first_operand_fails() {
        let context = parse(chain_left(minus(), int()), "-1");
        assert_eq!(
            context.outcome.unwrap_err().messages(),
            ["expected input matching /[0-9]+/"]
        );
    }
}
