//! # ParsiState - Stateful Parser Combinator Library
//!
//! Parsers are values that thread a user supplied state and a cursor over the
//! input through every application. Small parsers combine into larger ones
//! with combinators, either as free functions, as extension trait methods, or
//! on [`BoxedParser`] as infix operators.
//!
//! - **No panics**: failure is a returned [`Outcome`], never a panic
//! - **Explicit backtracking**: only alternation, optional and repetition rewind
//! - **User state**: every parser can read and replace the state it is handed
//! - **Recursive grammars**: [`recursive`] defers construction of self-referential rules
//!
//! ```
//! use parsistate::{AndExt, MapExt, literal, parse, pattern, sep_by};
//!
//! let number = pattern(r"[0-9]+").unwrap().map(|digits| digits.len());
//! let list = literal("[").ignore_then(sep_by(literal(","), number)).then_ignore(literal("]"));
//!
//! let context = parse(list, "[1,22,333]");
//! assert_eq!(context.outcome, Ok(vec![1, 2, 3]));
//! assert!(context.cursor.eos());
//! ```

pub mod always;
pub mod and;
pub mod apply;
pub mod between;
pub mod boxed;
pub mod chain;
pub mod count;
pub mod cursor;
pub mod error;
pub mod lazy;
pub mod lookahead;
pub mod many;
pub mod many_until;
pub mod map;
pub mod map_err;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod separated_list;
pub mod sequence;
pub mod state;
pub mod text;
pub mod then;

pub use always::{fail, succeed};
pub use and::{AndExt, pair};
pub use apply::{ApplyExt, apply};
pub use between::{between, braces, brackets, parens};
pub use boxed::{BoxedExt, BoxedParser};
pub use chain::{chain_left, chain_right};
pub use count::count;
pub use cursor::{Cursor, Location};
pub use error::{GrammarError, Outcome, ParseError, ParseFailure};
pub use lazy::{Lazy, recursive};
pub use lookahead::{LookaheadExt, lookahead, not_followed_by};
pub use many::{ManyExt, many, many1, skip_many, skip_many1};
pub use many_until::many_until;
pub use map::{MapExt, map, skip};
pub use map_err::{MapErrExt, label, map_err};
pub use optional::{OptionalExt, maybe, optional};
pub use or::{OrExt, choice, or};
pub use parser::{ParseContext, Parser, parse, primitive, run};
pub use position::{PositionExt, Span, spanned, with_column, with_line, with_location};
pub use separated_list::{sep_by, sep_by1, sep_end_by, sep_end_by1};
pub use sequence::sequence;
pub use state::{get_state, modify_state, put_state, with_state};
pub use text::{
    any_char, end_of_input, lexeme, literal, pattern, pattern_with, satisfy, take_while,
    whitespace,
};
pub use then::{ThenExt, then};
