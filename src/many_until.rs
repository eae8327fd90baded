use crate::cursor::Cursor;
use crate::parser::{ParseContext, Parser};

/// Parser that repeatedly applies another parser until a terminator matches
///
/// Each step tries the terminator first. When it matches, the collected
/// results are returned and the terminator's input stays consumed, although
/// its value is dropped. Otherwise the body parser runs from the same position;
/// if the body fails as well, the terminator's failure is reported, since
/// the terminator is the expected way out of the loop.
///
/// Unlike `many`, a body that succeeds without consuming input still counts
/// as a step, so a terminator that depends on the state can end the loop.
/// A body that consumes nothing while the terminator can never match loops
/// forever.
pub struct ManyUntil<P, PT> {
    parser: P,
    terminator: PT,
}

impl<P, PT> ManyUntil<P, PT> {
    pub fn new(parser: P, terminator: PT) -> Self {
        Self { parser, terminator }
    }
}

impl<P, PT> Parser for ManyUntil<P, PT>
where
    P: Parser,
    P::State: Clone,
    PT: Parser<State = P::State>,
{
    type State = P::State;
    type Output = Vec<P::Output>;

    fn parse<'code>(
        &self,
        mut state: Self::State,
        mut cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        let mut results = Vec::new();

        loop {
            let terminated = self.terminator.parse(state.clone(), cursor);
            let terminator_error = match terminated.outcome {
                Ok(_) => return ParseContext::success(terminated.state, terminated.cursor, results),
                Err(error) => error,
            };

            match self.parser.parse(state, cursor) {
                ParseContext {
                    state: next_state,
                    cursor: next_cursor,
                    outcome: Ok(value),
                } => {
                    results.push(value);
                    state = next_state;
                    cursor = next_cursor;
                }
                ParseContext { outcome: Err(_), .. } => {
                    return ParseContext::failure(
                        terminated.state,
                        terminated.cursor,
                        terminator_error,
                    );
                }
            }
        }
    }
}

/// Convenience function to create a ManyUntil parser
pub fn many_until<P, PT>(parser: P, terminator: PT) -> ManyUntil<P, PT>
where
    P: Parser,
    PT: Parser<State = P::State>,
{
    ManyUntil::new(parser, terminator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::parser::parse;
    use crate::text::{any_char, literal};

    #[test]
    fn test_many_until_block_comment() {
        let comment = literal("/*").ignore_then(many_until(any_char(), literal("*/")));
        let context = parse(comment, "/* hi */ rest");

        let body: String = context.outcome.unwrap().into_iter().collect();
        assert_eq!(body, " hi ");
        assert_eq!(context.cursor.remaining(), " rest");
    }

    #[test]
    fn test_many_until_immediate_terminator() {
        let context = parse(many_until(any_char(), literal("\"")), "\"tail");
        assert!(context.outcome.unwrap().is_empty());
        assert_eq!(context.cursor.remaining(), "tail");
    }

    #[test]
    fn test_many_until_reports_terminator_failure() {
        let context = parse(many_until(any_char(), literal("*/")), "abc");
        assert_eq!(context.outcome.unwrap_err().messages(), ["expected \"*/\""]);
        assert!(context.cursor.eos());
    }

    #[test]
    fn test_many_until_state_driven_terminator() {
        use crate::always::{fail, succeed};
        use crate::boxed::{BoxedExt, BoxedParser};
        use crate::map::MapExt;
        use crate::parser::run;
        use crate::state::{modify_state, with_state};

        let tick = modify_state(|n: u32| n + 1).map(|_| 'x');
        let done = with_state(|n: &u32| -> BoxedParser<u32, ()> {
            if *n >= 3 {
                succeed(()).boxed()
            } else {
                fail("not yet").boxed()
            }
        });

        let context = run(many_until(tick, done), 0, "abc");
        assert_eq!(context.outcome, Ok(vec!['x', 'x', 'x']));
        assert_eq!(context.state, 3);
        assert_eq!(context.cursor.position(), 0);
    }

    #[test]
    fn test_many_until_body_failure_reports_terminator() {
        let context = parse(many_until(literal("a"), literal(";")), "aab;");
        assert_eq!(context.outcome.unwrap_err().messages(), ["expected \";\""]);
        assert_eq!(context.cursor.remaining(), "b;");
    }
}
