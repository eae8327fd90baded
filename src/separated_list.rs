use crate::and::IgnoreThen;
use crate::cursor::Cursor;
use crate::many::repeat;
use crate::parser::{ParseContext, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses an item followed by zero or more occurrences of (separator + item)
/// and returns the items, dropping the separator results. A separator that is
/// not followed by an item is left unconsumed, unless trailing separators are
/// allowed, in which case a single trailing separator is consumed.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
pub struct SeparatedList<PS, P> {
    separator: PS,
    parser: P,
    allow_empty: bool,
    allow_trailing: bool,
}

impl<PS, P> SeparatedList<PS, P> {
    pub fn new(separator: PS, parser: P, allow_empty: bool, allow_trailing: bool) -> Self {
        SeparatedList {
            separator,
            parser,
            allow_empty,
            allow_trailing,
        }
    }
}

impl<PS, P> Parser for SeparatedList<PS, P>
where
    P: Parser,
    P::State: Clone,
    PS: Parser<State = P::State>,
{
    type State = P::State;
    type Output = Vec<P::Output>;

    fn parse<'code>(
        &self,
        state: Self::State,
        cursor: Cursor<'code>,
    ) -> ParseContext<'code, Self::State, Self::Output> {
        // Parse the first element
        let first = self.parser.parse(state.clone(), cursor);
        let value = match first.outcome {
            Ok(value) => value,
            Err(_) if self.allow_empty => return ParseContext::success(state, cursor, Vec::new()),
            Err(error) => return ParseContext::failure(first.state, first.cursor, error),
        };

        // Parse remaining elements preceded by separator
        let rest = IgnoreThen::new(&self.separator, &self.parser);
        let list = repeat(&rest, vec![value], first.state, first.cursor);
        if !self.allow_trailing {
            return list;
        }

        let trailing = self.separator.parse(list.state.clone(), list.cursor);
        if trailing.is_success() {
            ParseContext::new(trailing.state, trailing.cursor, list.outcome)
        } else {
            list
        }
    }
}

/// Zero or more items separated by `separator`
pub fn sep_by<PS, P>(separator: PS, parser: P) -> SeparatedList<PS, P>
where
    P: Parser,
    PS: Parser<State = P::State>,
{
    SeparatedList::new(separator, parser, true, false)
}

/// One or more items separated by `separator`
pub fn sep_by1<PS, P>(separator: PS, parser: P) -> SeparatedList<PS, P>
where
    P: Parser,
    PS: Parser<State = P::State>,
{
    SeparatedList::new(separator, parser, false, false)
}

/// Zero or more items separated by `separator`, with an optional trailing separator
pub fn sep_end_by<PS, P>(separator: PS, parser: P) -> SeparatedList<PS, P>
where
    P: Parser,
    PS: Parser<State = P::State>,
{
    SeparatedList::new(separator, parser, true, true)
}

/// One or more items separated by `separator`, with an optional trailing separator
pub fn sep_end_by1<PS, P>(separator: PS, parser: P) -> SeparatedList<PS, P>
where
    P: Parser,
    PS: Parser<State = P::State>,
{
    SeparatedList::new(separator, parser, false, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::parser::parse;
    use crate::text::{literal, pattern};

    fn int() -> impl Parser<State = (), Output = i64> {
        pattern(r"-?[0-9]+")
            .unwrap()
            .map(|digits| digits.parse::<i64>().unwrap_or_default())
    }

    #[test]
    fn test_sep_by_multiple_elements() {
        let context = parse(sep_by(literal(","), literal("a")), "a,a,a");
        assert_eq!(context.outcome.unwrap(), vec!["a", "a", "a"]);
        assert!(context.cursor.eos());
    }

    #[test]
    fn test_sep_by_empty_input() {
        let context = parse(sep_by(literal(","), literal("a")), "");
        assert!(context.outcome.unwrap().is_empty());
        assert_eq!(context.cursor.position(), 0);
    }

    #[test]
    fn test_sep_by_leaves_dangling_separator() {
        let context = parse(sep_by(literal(","), literal("a")), "a,a,b");
        assert_eq!(context.outcome.unwrap(), vec!["a", "a"]);
        assert_eq!(context.cursor.remaining(), ",b");
    }

    #[test]
    fn test_sep_by1_empty_list_fails() {
        let context = parse(sep_by1(literal(","), int()), "");
        assert_eq!(
            context.outcome.unwrap_err().messages(),
            ["expected input matching /-?[0-9]+/"]
        );
    }

    #[test]
    fn test_sep_by1_single_element() {
        let context = parse(sep_by1(literal(","), int()), "42");
        assert_eq!(context.outcome, Ok(vec![42]));
    }

    #[test]
    fn test_non_matching_separator() {
        let context = parse(sep_by1(literal(","), int()), "1;2;3");
        assert_eq!(context.outcome, Ok(vec![1]));
        assert_eq!(context.cursor.remaining(), ";2;3");
    }

    #[test]
    fn test_string_separator() {
        let context = parse(sep_by1(literal("::"), int()), "1::-2::3 extra");
        assert_eq!(context.outcome, Ok(vec![1, -2, 3]));
        assert_eq!(context.cursor.remaining(), " extra");
    }

    #[test]
    fn test_sep_end_by_consumes_trailing_separator() {
        let context = parse(sep_end_by(literal(";"), int()), "1;2;");
        assert_eq!(context.outcome, Ok(vec![1, 2]));
        assert!(context.cursor.eos());
    }

    #[test]
    fn test_sep_end_by_without_trailing_separator() {
        let context = parse(sep_end_by(literal(";"), int()), "1;2");
        assert_eq!(context.outcome, Ok(vec![1, 2]));
        assert!(context.cursor.eos());
    }

    #[test]
    fn test_sep_end_by_consumes_only_one_trailing_separator() {
        let context = parse(sep_end_by(literal(";"), int()), "1;;");
        assert_eq!(context.outcome, Ok(vec![1]));
        assert_eq!(context.cursor.remaining(), ";");
    }

    #[test]
    fn test_sep_end_by_empty() {
        let context = parse(sep_end_by(literal(";"), int()), "x");
        assert_eq!(context.outcome, Ok(vec![]));
        assert_eq!(context.cursor.position(), 0);
    }

    #[test]
    fn test_sep_end_by1_requires_element() {
        let context = parse(sep_end_by1(literal(";"), int()), ";");
        assert!(context.outcome.is_err());

        let context = parse(sep_end_by1(literal(";"), int()), "7;");
        assert_eq!(context.outcome, Ok(vec![7]));
        assert!(context.cursor.eos());
    }
}
