use crate::parser::token::Location;
use crate::parser::token::Token;
use crate::parser::token::TokenKind;
use crate::report::Report;
use anyhow::Result;
use std::io::BufRead;

/// Converts line-oriented Bencode text into a stream of tokens.
///
/// The scanner reads one line at a time. Whitespace (including line breaks)
/// is insignificant between tokens, and a container body may span multiple
/// lines, but a single string literal never crosses a line boundary.
pub struct Scanner<R> {
    reader: R,
    tokens: Vec<Token>,
    /// The characters of the current line, without the trailing line break.
    line: Vec<char>,
    /// The current line number (1-based; 0 before the first line is read).
    line_no: usize,
    /// The current column on the current line (0-based).
    column: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(reader: R) -> Self {
        Scanner {
            reader,
            tokens: Vec::new(),
            line: Vec::new(),
            line_no: 0,
            column: 0,
        }
    }
    /// Read the next line, returning false when the input is exhausted.
    fn next_line(&mut self) -> Result<bool> {
        let mut text = String::new();
        if self.reader.read_line(&mut text)? == 0 {
            return Ok(false);
        }
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        self.line = text.chars().collect();
        self.line_no += 1;
        self.column = 0;
        Ok(true)
    }
    fn add_token(&mut self, kind: TokenKind, literal: Option<String>) {
        let location = Location::new(self.line_no, self.column);
        self.tokens.push(Token::new(kind, location, literal));
    }
    /// Render a scanner failure: a description, the offending line, and a
    /// caret under the offending column.
    fn fail(&self, description: &str, column: usize) -> anyhow::Error {
        let text: String = self.line.iter().collect();
        let indent = " ".repeat(column);
        anyhow::anyhow!("{description}\n{text}\n{indent}^--- here")
    }
    fn unknown_character(&self) -> anyhow::Error {
        let c = self.line[self.column];
        let description = format!("Unknown char '{}' at line {}:", c, self.line_no);
        self.fail(&description, self.column)
    }
    /// Scan a run of digits up to and including the `end` delimiter.
    ///
    /// Returns the digits without the delimiter, or `None` when a non-digit
    /// character is found or the line runs out before the delimiter. The
    /// cursor is left on the offending character in the `None` case.
    fn digit_run(&mut self, end: char) -> Option<String> {
        let start = self.column;
        while self.column < self.line.len() {
            let c = self.line[self.column];
            if c == end {
                let run: String = self.line[start..self.column].iter().collect();
                self.column += 1;
                return Some(run);
            }
            if !c.is_ascii_digit() {
                return None;
            }
            self.column += 1;
        }
        None
    }
    /// Scan an integer literal. The leading `i` was already consumed.
    ///
    /// The digit run is kept as text; the parser converts it to a number.
    fn integer_literal(&mut self) -> Result<()> {
        let start = self.column;
        let description = format!("Malformed integer literal at line {}:", self.line_no);
        let digits = match self.digit_run('e') {
            Some(digits) => digits,
            None => return Err(self.fail(&description, self.column)),
        };
        if digits.is_empty() {
            return Err(self.fail(&description, start));
        }
        self.add_token(TokenKind::Integer, Some(digits));
        Ok(())
    }
    /// Scan a length-prefixed string literal starting at its first digit.
    ///
    /// The declared number of characters is consumed from the current line;
    /// a string literal never continues onto the next line.
    fn string_literal(&mut self) -> Result<()> {
        let start = self.column;
        let digits = match self.digit_run(':') {
            Some(digits) => digits,
            None => {
                let description = format!("Malformed string length at line {}:", self.line_no);
                return Err(self.fail(&description, self.column));
            }
        };
        let length: usize = match digits.parse() {
            Ok(length) => length,
            Err(_) => {
                let description = format!("Malformed string length at line {}:", self.line_no);
                return Err(self.fail(&description, start));
            }
        };
        let start = self.column;
        if self.line.len() - start < length {
            let description = format!(
                "String is shorter than its declared length at line {}:",
                self.line_no
            );
            return Err(self.fail(&description, self.line.len()));
        }
        self.column += length;
        let value: String = self.line[start..self.column].iter().collect();
        self.add_token(TokenKind::String, Some(value));
        Ok(())
    }
    /// Dispatch on a value marker character (`i`, `l`, or `d`).
    fn value_type(&mut self, c: char) -> Result<()> {
        self.column += 1;
        match c {
            'i' => self.integer_literal(),
            'l' => {
                self.add_token(TokenKind::ListStart, None);
                self.container_body()
            }
            'd' => {
                self.add_token(TokenKind::DictionaryStart, None);
                self.container_body()
            }
            _ => {
                self.column -= 1;
                Err(self.unknown_character())
            }
        }
    }
    /// Scan the contents of a list or dictionary.
    ///
    /// Same dispatch as the top level, plus `e` closes the container. The
    /// body advances across line boundaries. When the input runs out before
    /// the closing `e`, no closing token is emitted and scanning finishes
    /// normally; the parser reports the unterminated container.
    fn container_body(&mut self) -> Result<()> {
        loop {
            while self.column < self.line.len() {
                let c = self.line[self.column];
                if c == 'e' {
                    self.column += 1;
                    self.add_token(TokenKind::ContainerEnd, None);
                    return Ok(());
                }
                if c.is_whitespace() {
                    self.column += 1;
                    continue;
                }
                if c.is_ascii_digit() {
                    self.string_literal()?;
                    continue;
                }
                self.value_type(c)?;
            }
            if !self.next_line()? {
                return Ok(());
            }
        }
    }
    fn scan_tokens(&mut self) -> Result<()> {
        while self.next_line()? {
            while self.column < self.line.len() {
                let c = self.line[self.column];
                if c.is_whitespace() {
                    self.column += 1;
                    continue;
                }
                if c.is_ascii_digit() {
                    self.string_literal()?;
                    continue;
                }
                self.value_type(c)?;
            }
        }
        self.add_token(TokenKind::Eof, None);
        Ok(())
    }
    /// Scan the whole input into a token sequence.
    ///
    /// The sequence always ends with a single [TokenKind::Eof] token. On the
    /// first failure the formatted diagnostic is sent to the reporter and
    /// scanning aborts; no partial token sequence is returned.
    pub fn scan(reader: R, reporter: &mut dyn Report) -> Result<Vec<Token>> {
        let mut scanner = Scanner::new(reader);
        match scanner.scan_tokens() {
            Ok(()) => Ok(scanner.tokens),
            Err(e) => {
                reporter.report(&e.to_string());
                Err(e)
            }
        }
    }
}
