use super::TokenStream;
use crate::errors::parse_error::ParseError;
use crate::types::command_types::WhereClause;

/// `<ident> <op> <literal>` with `op` one of `= != < <= > >=`.
pub fn parse_where(stream: &mut TokenStream) -> Result<WhereClause, ParseError> {
    let column_name = stream.expect_identifier()?;
    let op = stream.expect_comparison_op()?;
    let value = stream.expect_literal()?;
    Ok(WhereClause {
        column_name,
        op,
        value,
    })
}
