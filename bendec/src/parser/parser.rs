use crate::expr::Expr;
use crate::parser::token::Token;
use crate::parser::token::TokenKind;
use crate::report::Report;
use anyhow::Result;
use indexmap::IndexMap;

/// Turns the scanner's token sequence into a forest of expressions.
///
/// The parser walks the tokens left to right with a single forward cursor
/// and no backtracking. The sequence must end with a [TokenKind::Eof] token,
/// which is what the scanner produces.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

const VALUE_KINDS: [TokenKind; 4] = [
    TokenKind::Integer,
    TokenKind::String,
    TokenKind::ListStart,
    TokenKind::DictionaryStart,
];

impl Parser {
    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }
    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }
    fn is_at_end(&self) -> bool {
        self.tokens
            .get(self.current)
            .map_or(true, |token| token.kind == TokenKind::Eof)
    }
    fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.peek().kind == kind
    }
    /// Render a parser failure: a description, the locator of the token the
    /// failure refers to, and the expected kinds against the actual one.
    fn unexpected_token(
        &self,
        description: &str,
        token: &Token,
        expected: &[TokenKind],
    ) -> anyhow::Error {
        let expected = expected
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        anyhow::anyhow!(
            "{description}\nLine {}, position: {}\nExpected tokens: [{expected}],\nActual: {}",
            token.line(),
            token.column(),
            token.kind
        )
    }
    fn integer(&self, token: &Token) -> Result<Expr> {
        let digits = token.literal.clone().unwrap_or_default();
        match digits.parse::<i64>() {
            Ok(value) => Ok(Expr::Integer(value)),
            Err(_) => Err(anyhow::anyhow!(
                "Malformed integer literal '{digits}'\nLine {}, position: {}",
                token.line(),
                token.column()
            )),
        }
    }
    fn expression(&mut self) -> Result<Expr> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Integer => {
                self.advance();
                self.integer(&token)
            }
            TokenKind::String => {
                self.advance();
                Ok(Expr::Text(token.literal.clone().unwrap_or_default()))
            }
            TokenKind::ListStart => {
                self.advance();
                self.list(&token)
            }
            TokenKind::DictionaryStart => {
                self.advance();
                self.dictionary(&token)
            }
            _ => Err(self.unexpected_token("Expected value", &token, &VALUE_KINDS)),
        }
    }
    /// Parse list elements up to the closing token. `open` is the already
    /// consumed [TokenKind::ListStart] token.
    fn list(&mut self, open: &Token) -> Result<Expr> {
        let mut elements = vec![];
        while !self.is_at_end() {
            if self.check(TokenKind::ContainerEnd) {
                self.advance();
                return Ok(Expr::List(elements));
            }
            elements.push(self.expression()?);
        }
        Err(self.unexpected_token("Unterminated list", open, &[TokenKind::ContainerEnd]))
    }
    /// Parse dictionary entries up to the closing token. `open` is the
    /// already consumed [TokenKind::DictionaryStart] token.
    fn dictionary(&mut self, open: &Token) -> Result<Expr> {
        let mut entries = IndexMap::new();
        while !self.is_at_end() {
            if self.check(TokenKind::ContainerEnd) {
                self.advance();
                return Ok(Expr::Dictionary(entries));
            }
            let key = self.key(&entries)?;
            let value = self.expression()?;
            entries.insert(key, value);
        }
        Err(self.unexpected_token("Unterminated dictionary", open, &[TokenKind::ContainerEnd]))
    }
    /// Parse and validate a dictionary key.
    ///
    /// Keys must be strings, unique, and in strictly ascending order. A
    /// duplicate of the last key trips the duplicate check rather than the
    /// order check, so both diagnostics stay reachable.
    fn key(&mut self, entries: &IndexMap<String, Expr>) -> Result<String> {
        let token = self.peek();
        if token.kind != TokenKind::String {
            return Err(self.unexpected_token("Invalid key", token, &[TokenKind::String]));
        }
        let key = token.literal.clone().unwrap_or_default();
        if entries.contains_key(&key) {
            return Err(self.unexpected_token("Repeating key", token, &[TokenKind::String]));
        }
        if let Some((last, _)) = entries.last() {
            if last.as_str() >= key.as_str() {
                return Err(self.unexpected_token("Wrong key order", token, &[TokenKind::String]));
            }
        }
        self.advance();
        Ok(key)
    }
    fn forest(&mut self) -> Result<Vec<Expr>> {
        let mut expressions = vec![];
        while !self.is_at_end() {
            expressions.push(self.expression()?);
        }
        Ok(expressions)
    }
    /// Parse the token sequence into the ordered top-level expressions.
    ///
    /// Bencode permits multiple concatenated top-level values, so the result
    /// is a forest. On the first failure the formatted diagnostic is sent to
    /// the reporter and parsing aborts; no partial forest is returned.
    pub fn parse(tokens: Vec<Token>, reporter: &mut dyn Report) -> Result<Vec<Expr>> {
        let mut parser = Parser { tokens, current: 0 };
        match parser.forest() {
            Ok(expressions) => Ok(expressions),
            Err(e) => {
                reporter.report(&e.to_string());
                Err(e)
            }
        }
    }
}
