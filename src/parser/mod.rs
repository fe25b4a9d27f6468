mod create_parser;
mod insert_parser;
mod select_parser;
pub mod tokenizer;
mod where_parser;

use crate::errors::parse_error::ParseError;
use crate::types::command_types::{Command, ComparisonOp, DropTableCommand};
use self::tokenizer::Token;

/// Parse one SQL statement into a [`Command`]. Keywords are
/// case-insensitive; a single trailing `;` is allowed.
pub fn parse_sql(input: &str) -> Result<Command, ParseError> {
    let tokens = tokenizer::tokenize(input)?;
    let mut stream = TokenStream::new(tokens);

    let command = if stream.accept_keyword("CREATE") {
        create_parser::parse_create_table(&mut stream)?
    } else if stream.accept_keyword("DROP") {
        stream.expect_keyword("TABLE")?;
        let table_name = stream.expect_identifier()?;
        Command::DropTable(DropTableCommand { table_name })
    } else if stream.accept_keyword("SHOW") {
        stream.expect_keyword("TABLES")?;
        Command::ShowTables
    } else if stream.accept_keyword("INSERT") {
        insert_parser::parse_insert(&mut stream)?
    } else if stream.accept_keyword("SELECT") {
        select_parser::parse_select(&mut stream)?
    } else {
        return Err(ParseError::UnrecognizedCommand);
    };

    stream.expect_end()?;
    Ok(command)
}

/// Token cursor shared by the per-statement parsers.
pub(crate) struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn found(&self) -> String {
        match self.peek() {
            Some(token) => token.describe(),
            None => "end of input".to_string(),
        }
    }

    pub fn accept_keyword(&mut self, keyword: &str) -> bool {
        if matches!(self.peek(), Some(token) if token.is_keyword(keyword)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        if self.accept_keyword(keyword) {
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected: format!("'{keyword}'"),
                found: self.found(),
            })
        }
    }

    pub fn accept_symbol(&mut self, symbol: char) -> bool {
        if matches!(self.peek(), Some(Token::Symbol(s)) if *s == symbol) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect_symbol(&mut self, symbol: char) -> Result<(), ParseError> {
        if self.accept_symbol(symbol) {
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected: format!("'{symbol}'"),
                found: self.found(),
            })
        }
    }

    /// An unquoted or double-quoted identifier.
    pub fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(Token::Ident(word) | Token::QuotedIdent(word)) => {
                let word = word.clone();
                self.pos += 1;
                Ok(word)
            }
            _ => Err(ParseError::Expected {
                expected: "identifier".to_string(),
                found: self.found(),
            }),
        }
    }

    /// A string or integer literal, as its string value.
    pub fn expect_literal(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(Token::StringLit(value) | Token::IntLit(value)) => {
                let value = value.clone();
                self.pos += 1;
                Ok(value)
            }
            _ => Err(ParseError::Expected {
                expected: "literal".to_string(),
                found: self.found(),
            }),
        }
    }

    pub fn expect_comparison_op(&mut self) -> Result<ComparisonOp, ParseError> {
        match self.peek() {
            Some(Token::Op(op)) => {
                let op = *op;
                self.pos += 1;
                Ok(op)
            }
            _ => Err(ParseError::Expected {
                expected: "comparison operator".to_string(),
                found: self.found(),
            }),
        }
    }

    /// Consume an optional trailing `;` and require the end of input.
    pub fn expect_end(&mut self) -> Result<(), ParseError> {
        self.accept_symbol(';');
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::TrailingInput(token.describe())),
        }
    }
}
