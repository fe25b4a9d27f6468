use crate::catalog::Catalog;
use crate::planner;
use crate::types::command_types::SelectCommand;
use crate::types::result_types::{ExecutionResult, ResultSet};
use std::path::Path;

pub fn execute_select(catalog: &Catalog, data_dir: &Path, cmd: &SelectCommand) -> ExecutionResult {
    // resolved up front: headers need the schema, and rejecting an unknown
    // table here keeps the scan from creating a stray heap file for it
    let Some(schema) = catalog.get_schema(&cmd.table_name) else {
        return ExecutionResult::error(format!(
            "ERROR: Table '{}' does not exist.",
            cmd.table_name
        ));
    };

    let mut plan = match planner::plan_select(catalog, data_dir, cmd) {
        Ok(plan) => plan,
        Err(err) => return ExecutionResult::error(format!("ERROR: {err}.")),
    };

    let headers = if cmd.projection.is_empty() {
        schema.column_names()
    } else {
        cmd.projection.clone()
    };

    let mut rows = Vec::new();
    while let Some(row) = plan.next() {
        rows.push(row);
    }

    ExecutionResult::success_with_data(ResultSet { headers, rows })
}
