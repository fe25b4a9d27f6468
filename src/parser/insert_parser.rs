use super::TokenStream;
use crate::errors::parse_error::ParseError;
use crate::types::command_types::{Command, InsertCommand};

/// `INSERT INTO <ident> [( <ident> [, ...] )] VALUES ( <literal> [, ...] )`
/// The leading INSERT has already been consumed. An absent column list
/// means the values are positional; a listed column may appear only once.
pub fn parse_insert(stream: &mut TokenStream) -> Result<Command, ParseError> {
    stream.expect_keyword("INTO")?;
    let table_name = stream.expect_identifier()?;

    let mut columns = Vec::new();
    if stream.accept_symbol('(') {
        loop {
            let column = stream.expect_identifier()?;
            if columns.contains(&column) {
                return Err(ParseError::DuplicateColumn(column));
            }
            columns.push(column);
            if !stream.accept_symbol(',') {
                break;
            }
        }
        stream.expect_symbol(')')?;
    }

    stream.expect_keyword("VALUES")?;
    stream.expect_symbol('(')?;
    let mut values = Vec::new();
    loop {
        values.push(stream.expect_literal()?);
        if !stream.accept_symbol(',') {
            break;
        }
    }
    stream.expect_symbol(')')?;

    Ok(Command::Insert(InsertCommand {
        table_name,
        columns,
        values,
    }))
}
