use super::TokenStream;
use crate::errors::parse_error::ParseError;
use crate::types::catalog_types::{ColumnDefinition, Datatype};
use crate::types::command_types::{Command, CreateTableCommand};

/// `CREATE TABLE <ident> ( <ident> <INT|TEXT> [, ...] )`
/// The leading CREATE has already been consumed.
pub fn parse_create_table(stream: &mut TokenStream) -> Result<Command, ParseError> {
    stream.expect_keyword("TABLE")?;
    let table_name = stream.expect_identifier()?;
    stream.expect_symbol('(')?;

    let mut column_definitions = Vec::new();
    loop {
        let column_name = stream.expect_identifier()?;
        let type_name = stream.expect_identifier()?;
        let datatype = if type_name.eq_ignore_ascii_case("INT") {
            Datatype::Int
        } else if type_name.eq_ignore_ascii_case("TEXT") {
            Datatype::Text
        } else {
            return Err(ParseError::UnknownDatatype(type_name));
        };
        column_definitions.push(ColumnDefinition {
            column_name,
            datatype,
        });

        if !stream.accept_symbol(',') {
            break;
        }
    }
    stream.expect_symbol(')')?;

    Ok(Command::CreateTable(CreateTableCommand {
        table_name,
        column_definitions,
    }))
}
