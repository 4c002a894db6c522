/*!
# Source position types (Range, SourceLocation)

Location types shared by the AST model and the bridge. Ranges are byte
offsets into the source text; lines are 1-based.
*/

use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;

/// Half-open byte range `[start, end)` in source text.
///
/// Serializes as a two element array, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether `other` lies fully inside this range.
    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl Serialize for Range {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.start)?;
        tuple.serialize_element(&self.end)?;
        tuple.end()
    }
}

/// Start line of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct LinePosition {
    pub line: usize,
}

/// End position; always emitted as an empty object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct OpenPosition {}

/// `loc` block of an output node: `{"start": {"line": N}, "end": {}}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SourceLocation {
    pub start: LinePosition,
    pub end: OpenPosition,
}

impl SourceLocation {
    pub fn at_line(line: usize) -> Self {
        Self {
            start: LinePosition { line },
            end: OpenPosition {},
        }
    }

    pub fn line(&self) -> usize {
        self.start.line
    }
}
