use std::fmt;

/// Read position within the text being parsed
///
/// A cursor is a cheap `Copy` value: the full input plus a byte offset into it.
/// Combinators that need to backtrack simply hold on to an earlier copy.
///
/// Two cursors are equal when they point at the same remaining input at the same
/// position, which is what repetition combinators compare to detect a parser
/// that succeeded without making progress.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cursor<'code> {
    source: &'code str,
    position: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor positioned at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    /// The full input, unaffected by how far parsing has progressed
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// The suffix of the input that has not been consumed yet
    pub fn remaining(&self) -> &'code str {
        &self.source[self.position..]
    }

    /// Number of bytes consumed from the start of the input
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Drop the first `n` bytes of the remaining input
    ///
    /// Callers pass lengths of matched prefixes, so `n` always lands on a char
    /// boundary. Advancing past the end clamps to the end of the input.
    pub fn advance(self, n: usize) -> Self {
        Cursor {
            source: self.source,
            position: (self.position + n).min(self.source.len()),
        }
    }

    /// Compute the human readable location of this cursor
    pub fn locate(&self) -> Location<'code> {
        let mut line = 1;
        let mut line_start = 0;

        for (i, byte) in self.source.bytes().enumerate() {
            if i >= self.position {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        let column = self.position - line_start + 1;

        if self.eos() {
            return Location {
                source_line: "",
                line,
                column,
            };
        }

        let line_end = self.source[line_start..]
            .find('\n')
            .map_or(self.source.len(), |offset| line_start + offset);

        Location {
            source_line: &self.source[line_start..line_end],
            line,
            column,
        }
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("remaining", &self.remaining())
            .finish()
    }
}

/// Line and column of a cursor, derived on demand from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'code> {
    /// Text of the line containing the cursor, without its newline
    ///
    /// Empty when the cursor sits at or past the end of the input.
    pub source_line: &'code str,
    /// 1-based line number
    pub line: usize,
    /// 1-based byte offset within the line
    pub column: usize,
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
