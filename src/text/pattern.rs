use crate::cursor::Cursor;
use crate::error::{GrammarError, ParseError};
use crate::parser::{ParseContext, Parser};
use regex::Regex;
use std::marker::PhantomData;

/// Pattern matcher consulted by [`Pattern`]
///
/// Implementations must only match at the very start of `text` and return the
/// length in bytes of the single match they pick, or `None` when the text does
/// not start with a match.
pub trait AnchoredMatcher {
    fn match_anchored(&self, text: &str) -> Option<usize>;

    /// Source form of the pattern, used in failure messages
    fn pattern(&self) -> &str;
}

/// Regular expression matcher anchored at the start of the input
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    source: String,
    regex: Regex,
}

impl RegexMatcher {
    /// Compile `pattern` anchored at the start of the input
    ///
    /// The pattern is wrapped in a group, so under `(?x)` it must not end in
    /// a `#` comment: the comment would swallow the closing parenthesis and
    /// compilation fails with [`GrammarError::InvalidPattern`].
    pub fn new(pattern: &str) -> Result<Self, GrammarError> {
        let regex = Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| {
            GrammarError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        Ok(RegexMatcher {
            source: pattern.to_string(),
            regex,
        })
    }
}

impl AnchoredMatcher for RegexMatcher {
    fn match_anchored(&self, text: &str) -> Option<usize> {
        self.regex.find(text).map(|found| found.end())
    }

    fn pattern(&self) -> &str {
        &self.source
    }
}

/// Parser that matches a pattern at the start of the remaining input
///
/// Succeeds with the matched text and consumes it. Fails with
/// `expected input matching /<pattern>/` without consuming anything.
pub struct Pattern<M, S> {
    matcher: M,
    _phantom: PhantomData<fn(S) -> S>,
}

impl<M, S> Pattern<M, S> {
    pub fn new(matcher: M) -> Self {
        Pattern {
            matcher,
            _phantom: PhantomData,
        }
    }
}

impl<M, S> Parser for Pattern<M, S>
where
    M: AnchoredMatcher,
{
    type State = S;
    type Output = String;

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, String> {
        let remaining = cursor.remaining();
        // A matcher reporting a length off a char boundary counts as no match
        let matched = self
            .matcher
            .match_anchored(remaining)
            .and_then(|len| remaining.get(..len));

        match matched {
            Some(matched) => {
                ParseContext::success(state, cursor.advance(matched.len()), matched.to_string())
            }
            None => ParseContext::failure(
                state,
                cursor,
                ParseError::new(format!(
                    "expected input matching /{}/",
                    self.matcher.pattern()
                )),
            ),
        }
    }
}

/// Create a parser for a regular expression
///
/// Fails to build when `pattern` is not a valid regular expression.
pub fn pattern<S>(pattern: &str) -> Result<Pattern<RegexMatcher, S>, GrammarError> {
    Ok(Pattern::new(RegexMatcher::new(pattern)?))
}

/// Create a pattern parser around any anchored matcher
pub fn pattern_with<M, S>(matcher: M) -> Pattern<M, S>
where
    M: AnchoredMatcher,
{
    Pattern::new(matcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use rstest::rstest;

    #[rstest]
    #[case(r"[0-9]+", "123abc", "123", "abc")]
    #[case(r"[a-z]+", "hello world", "hello", " world")]
    #[case(r"a|ab", "abc", "a", "bc")]
    #[case(r"\s*", "  x", "  ", "x")]
    #[case(r"x*", "abc", "", "abc")]
    fn test_pattern_matches_prefix(
        #[case] expr: &str,
        #[case] input: &str,
        #[case] matched: &str,
        #[case] remaining: &str,
    ) {
        let context = parse(pattern(expr).unwrap(), input);
        assert_eq!(context.outcome.as_deref(), Ok(matched));
        assert_eq!(context.cursor.remaining(), remaining);
    }

    #[test]
    fn test_pattern_is_anchored() {
        let context = parse(pattern(r"[0-9]+").unwrap(), "abc123");
        assert_eq!(
            context.outcome.unwrap_err().messages(),
            ["expected input matching /[0-9]+/"]
        );
        assert_eq!(context.cursor.position(), 0);
    }

    #[test]
    fn test_anchor_applies_to_every_alternative() {
        let context = parse(pattern(r"a|b").unwrap(), "xb");
        assert!(context.outcome.is_err());
    }

    #[test]
    fn test_pattern_after_consumed_input() {
        use crate::and::AndExt;
        use crate::text::literal;

        let parser = literal("id:").ignore_then(pattern(r"[0-9]+").unwrap());
        let context = parse(parser, "id:42;");
        assert_eq!(context.outcome.unwrap(), "42");
        assert_eq!(context.cursor.remaining(), ";");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = pattern::<()>("(unclosed");
        assert!(matches!(
            result,
            Err(GrammarError::InvalidPattern { ref pattern, .. }) if pattern == "(unclosed"
        ));
    }

    struct Digits;

    impl AnchoredMatcher for Digits {
        fn match_anchored(&self, text: &str) -> Option<usize> {
            let len = text.bytes().take_while(u8::is_ascii_digit).count();
            (len > 0).then_some(len)
        }

        fn pattern(&self) -> &str {
            "digits"
        }
    }

    struct OffBoundary;

    impl AnchoredMatcher for OffBoundary {
        fn match_anchored(&self, text: &str) -> Option<usize> {
            (!text.is_empty()).then_some(1)
        }

        fn pattern(&self) -> &str {
            "one byte"
        }
    }

    #[rstest]
    #[case("é")]
    #[case("")]
    fn test_matcher_length_off_char_boundary_fails(#[case] input: &str) {
        let context = parse(pattern_with(OffBoundary), input);
        assert_eq!(
            context.outcome.unwrap_err().messages(),
            ["expected input matching /one byte/"]
        );
        assert_eq!(context.cursor.position(), 0);
    }

    #[test]
    fn test_matcher_length_past_end_fails() {
        struct TooLong;

        impl AnchoredMatcher for TooLong {
            fn match_anchored(&self, text: &str) -> Option<usize> {
                Some(text.len() + 3)
            }

            fn pattern(&self) -> &str {
                "too long"
            }
        }

        let context = parse(pattern_with(TooLong), "ab");
        assert!(context.outcome.is_err());
        assert_eq!(context.cursor.position(), 0);
    }

    #[test]
    fn test_extended_pattern_ending_in_comment_is_rejected() {
        assert!(pattern::<()>("(?x) [a-z]+ # word").is_err());
        assert!(pattern::<()>("(?x) [a-z]+ # word\n").is_ok());
    }

    #[test]
    fn test_custom_matcher() {
        let context = parse(pattern_with(Digits), "42x");
        assert_eq!(context.outcome.unwrap(), "42");

        let context = parse(pattern_with(Digits), "x");
        assert_eq!(
            context.outcome.unwrap_err().messages(),
            ["expected input matching /digits/"]
        );
    }
}
