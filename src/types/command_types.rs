use crate::types::catalog_types::ColumnDefinition;
use std::fmt;

/// A parsed statement, ready for the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateTable(CreateTableCommand),
    DropTable(DropTableCommand),
    Insert(InsertCommand),
    ShowTables,
    Select(SelectCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableCommand {
    pub table_name: String,
    pub column_definitions: Vec<ColumnDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTableCommand {
    pub table_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertCommand {
    pub table_name: String,
    /// Target columns; empty means the values are positional in schema order.
    pub columns: Vec<String>,
    pub values: Vec<String>,
}

/// Root of the SELECT AST: the planner turns this into the operator tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCommand {
    pub table_name: String,
    /// Projection list; empty signifies `SELECT *`.
    pub projection: Vec<String>,
    pub where_clause: Option<WhereClause>,
}

/// `WHERE column op literal`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    pub column_name: String,
    pub op: ComparisonOp,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ComparisonOp::Equals => "=",
            ComparisonOp::NotEquals => "!=",
            ComparisonOp::LessThan => "<",
            ComparisonOp::LessThanOrEqual => "<=",
            ComparisonOp::GreaterThan => ">",
            ComparisonOp::GreaterThanOrEqual => ">=",
        })
    }
}
