use std::fmt;

/// Position of a token inside the source text. `line` is the 0-based physical
/// line index and `column` the byte offset into the unstripped line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn offset(self, columns: usize) -> Self {
        Self {
            line: self.line,
            column: self.column + columns,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            text: text.into(),
            location,
        }
    }

    pub fn is_label(&self) -> bool {
        self.text.starts_with(LABEL_SIGIL)
    }

    pub fn is_register(&self) -> bool {
        self.text.starts_with(REGISTER_SIGIL)
    }
}

pub const LABEL_SIGIL: char = '@';
pub const REGISTER_SIGIL: char = '$';
pub const COMMENT_MARKER: char = ';';
pub const ARRAY_SEPARATOR: char = ',';
