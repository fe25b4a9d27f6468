use crate::catalog::Catalog;
use crate::errors::execution_error::ExecutionError;
use crate::execution::operator::Operator;
use crate::types::storage_types::Row;
use tracing::error;

/// Rebuilds each child row with only the requested columns, in the
/// requested order. An empty column list means "project all": the row is
/// passed through unchanged. Duplicate column names are allowed and
/// produce repeated columns.
pub struct Projection {
    child: Box<dyn Operator>,
    column_indices: Vec<usize>,
}

impl Projection {
    pub fn new(
        catalog: &Catalog,
        table_name: &str,
        child: Box<dyn Operator>,
        projection_columns: &[String],
    ) -> Result<Self, ExecutionError> {
        let schema = catalog
            .get_schema(table_name)
            .ok_or_else(|| ExecutionError::TableNotFound(table_name.to_string()))?;

        let mut column_indices = Vec::with_capacity(projection_columns.len());
        for column in projection_columns {
            let index =
                schema
                    .column_index(column)
                    .ok_or_else(|| ExecutionError::ColumnNotFound {
                        table: table_name.to_string(),
                        column: column.clone(),
                    })?;
            column_indices.push(index);
        }

        Ok(Self {
            child,
            column_indices,
        })
    }
}

impl Operator for Projection {
    fn next(&mut self) -> Option<Row> {
        let row = self.child.next()?;
        if self.column_indices.is_empty() {
            // SELECT *: identity pass-through
            return Some(row);
        }

        let mut projected = Vec::with_capacity(self.column_indices.len());
        for &index in &self.column_indices {
            let Some(value) = row.get(index) else {
                error!(
                    "row has {} fields but the projection wants index {}",
                    row.len(),
                    index
                );
                return None;
            };
            projected.push(value.clone());
        }
        Some(projected)
    }
}
