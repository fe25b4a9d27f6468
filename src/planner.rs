use crate::catalog::Catalog;
use crate::errors::execution_error::ExecutionError;
use crate::execution::{Filter, Operator, Projection, TableScan};
use crate::types::command_types::SelectCommand;
use std::path::Path;

/// Translate a SELECT into its operator tree: a table scan at the bottom,
/// a filter when there is a WHERE clause, and a projection on top (an
/// empty projection list passes rows through unchanged). Ownership of the
/// tree transfers to the caller, which drives iteration from the root.
///
/// Predicates are not pushed into the scan; the filter always runs as its
/// own operator above it.
pub fn plan_select(
    catalog: &Catalog,
    data_dir: &Path,
    cmd: &SelectCommand,
) -> Result<Box<dyn Operator>, ExecutionError> {
    let mut plan: Box<dyn Operator> = Box::new(TableScan::new(&cmd.table_name, data_dir)?);

    if let Some(where_clause) = &cmd.where_clause {
        plan = Box::new(Filter::new(
            catalog,
            &cmd.table_name,
            plan,
            where_clause.clone(),
        )?);
    }

    plan = Box::new(Projection::new(
        catalog,
        &cmd.table_name,
        plan,
        &cmd.projection,
    )?);

    Ok(plan)
}
