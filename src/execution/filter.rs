use crate::catalog::Catalog;
use crate::errors::execution_error::ExecutionError;
use crate::execution::operator::Operator;
use crate::types::catalog_types::Datatype;
use crate::types::command_types::{ComparisonOp, WhereClause};
use crate::types::storage_types::Row;
use tracing::error;

// Comparisons are lexicographic over the stored strings for every
// operator; the declared column type only gates literal validation at
// construction. Under `<`, "10" sorts before "2".
fn evaluate(op: ComparisonOp, lhs: &str, rhs: &str) -> bool {
    match op {
        ComparisonOp::Equals => lhs == rhs,
        ComparisonOp::NotEquals => lhs != rhs,
        ComparisonOp::LessThan => lhs < rhs,
        ComparisonOp::LessThanOrEqual => lhs <= rhs,
        ComparisonOp::GreaterThan => lhs > rhs,
        ComparisonOp::GreaterThanOrEqual => lhs >= rhs,
    }
}

/// Emits the child's rows that satisfy a `WHERE column op literal`
/// predicate, preserving the child's order. The column is resolved and the
/// literal validated when the operator is built, so `next` cannot fail.
pub struct Filter {
    child: Box<dyn Operator>,
    where_clause: WhereClause,
    column_index: usize,
}

impl Filter {
    pub fn new(
        catalog: &Catalog,
        table_name: &str,
        child: Box<dyn Operator>,
        where_clause: WhereClause,
    ) -> Result<Self, ExecutionError> {
        let schema = catalog
            .get_schema(table_name)
            .ok_or_else(|| ExecutionError::TableNotFound(table_name.to_string()))?;

        let column_index = schema.column_index(&where_clause.column_name).ok_or_else(|| {
            ExecutionError::ColumnNotFound {
                table: table_name.to_string(),
                column: where_clause.column_name.clone(),
            }
        })?;

        let column = &schema.column_definitions[column_index];
        if column.datatype == Datatype::Int && where_clause.value.parse::<i64>().is_err() {
            return Err(ExecutionError::NotAnInteger {
                column: where_clause.column_name.clone(),
                value: where_clause.value.clone(),
            });
        }

        Ok(Self {
            child,
            where_clause,
            column_index,
        })
    }
}

impl Operator for Filter {
    fn next(&mut self) -> Option<Row> {
        loop {
            let row = self.child.next()?;
            let Some(value) = row.get(self.column_index) else {
                error!(
                    "row has {} fields but the filter column is at index {}",
                    row.len(),
                    self.column_index
                );
                return None;
            };
            if evaluate(self.where_clause.op, value, &self.where_clause.value) {
                return Some(row);
            }
        }
    }
}
