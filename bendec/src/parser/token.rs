use std::fmt::Display;
use std::fmt::Formatter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// 42 in `i42e`
    Integer,
    /// spam in `4:spam`
    String,
    /// l
    ListStart,
    /// d
    DictionaryStart,
    /// e, closing whichever container is innermost
    ContainerEnd,
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::ListStart => "LIST_START",
            TokenKind::DictionaryStart => "DICTIONARY_START",
            TokenKind::ContainerEnd => "CONTAINER_END",
            TokenKind::Eof => "END_OF_INPUT",
        };
        write!(f, "{text}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// The line number of the token (1-based).
    line: usize,
    /// The column just past the last character of the token (0-based).
    column: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "loc({}:{})", self.line, self.column)
    }
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
    pub fn line(&self) -> usize {
        self.line
    }
    pub fn column(&self) -> usize {
        self.column
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of token, such as `i42e` (Integer) or `l` (ListStart).
    pub kind: TokenKind,
    pub location: Location,
    /// The decoded value for Integer (the digit run) and String (the text)
    /// tokens; `None` for the structural kinds.
    pub literal: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, location: Location, literal: Option<String>) -> Self {
        Self {
            kind,
            location,
            literal,
        }
    }
    pub fn line(&self) -> usize {
        self.location.line()
    }
    pub fn column(&self) -> usize {
        self.location.column()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} \"{}\" {}", self.kind, literal, self.location),
            None => write!(f, "{} {}", self.kind, self.location),
        }
    }
}
