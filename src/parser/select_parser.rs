use super::{where_parser, TokenStream};
use crate::errors::parse_error::ParseError;
use crate::types::command_types::{Command, SelectCommand};

/// `SELECT (*|<ident> [, ...]) FROM <ident> [WHERE ...]`
/// The leading SELECT has already been consumed. `*` becomes an empty
/// projection list.
pub fn parse_select(stream: &mut TokenStream) -> Result<Command, ParseError> {
    let mut projection = Vec::new();
    if !stream.accept_symbol('*') {
        loop {
            projection.push(stream.expect_identifier()?);
            if !stream.accept_symbol(',') {
                break;
            }
        }
    }

    stream.expect_keyword("FROM")?;
    let table_name = stream.expect_identifier()?;

    let where_clause = if stream.accept_keyword("WHERE") {
        Some(where_parser::parse_where(stream)?)
    } else {
        None
    };

    Ok(Command::Select(SelectCommand {
        table_name,
        projection,
        where_clause,
    }))
}
