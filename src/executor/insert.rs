use crate::catalog::Catalog;
use crate::storage::record;
use crate::storage::table_data_path;
use crate::storage::table_heap::TableHeap;
use crate::types::catalog_types::Datatype;
use crate::types::command_types::InsertCommand;
use crate::types::result_types::ExecutionResult;
use std::path::Path;
use tracing::info;

/// INSERT comes in two shapes: positional (`VALUES (v1, v2, ...)`, one
/// value per schema column in order) and named (`(c1, c2) VALUES (v1,
/// v2)`, where unassigned columns default to the empty string). Named
/// columns must exist and may appear at most once.
pub fn execute_insert(catalog: &Catalog, data_dir: &Path, cmd: &InsertCommand) -> ExecutionResult {
    let Some(schema) = catalog.get_schema(&cmd.table_name) else {
        return ExecutionResult::error(format!(
            "ERROR: Table '{}' does not exist.",
            cmd.table_name
        ));
    };
    info!("inserting into table '{}'", cmd.table_name);

    let column_count = schema.column_definitions.len();
    let ordered_values: Vec<String> = if cmd.columns.is_empty() {
        if cmd.values.len() != column_count {
            return ExecutionResult::error(format!(
                "ERROR: Number of values does not match number of columns in table '{}'.",
                cmd.table_name
            ));
        }
        cmd.values.clone()
    } else {
        if cmd.columns.len() != cmd.values.len() {
            return ExecutionResult::error(format!(
                "ERROR: Number of columns does not match number of values in INSERT command \
                 for table '{}'.",
                cmd.table_name
            ));
        }

        let mut values = vec![String::new(); column_count];
        let mut assigned = vec![false; column_count];
        for (column, value) in cmd.columns.iter().zip(&cmd.values) {
            let Some(index) = schema.column_index(column) else {
                return ExecutionResult::error(format!(
                    "ERROR: Column '{column}' does not exist in table '{}'.",
                    cmd.table_name
                ));
            };
            // the parser rejects duplicate column lists, but guard anyway
            if assigned[index] {
                return ExecutionResult::error(format!(
                    "ERROR: Column '{column}' specified more than once in INSERT command \
                     for table '{}'.",
                    cmd.table_name
                ));
            }
            assigned[index] = true;
            values[index] = value.clone();
        }
        values
    };

    for (value, column_def) in ordered_values.iter().zip(&schema.column_definitions) {
        if column_def.datatype == Datatype::Int && value.parse::<i64>().is_err() {
            return ExecutionResult::error(format!(
                "ERROR: Value '{value}' for column '{}' is not a valid integer.",
                column_def.column_name
            ));
        }
    }

    let record = match record::encode(&ordered_values) {
        Ok(record) => record,
        Err(err) => return ExecutionResult::error(format!("ERROR: {err}.")),
    };

    let heap = match TableHeap::open(table_data_path(data_dir, &cmd.table_name)) {
        Ok(heap) => heap,
        Err(err) => return ExecutionResult::error(format!("ERROR: {err}.")),
    };
    match heap.insert_record(&record) {
        Ok(true) => ExecutionResult::ok("1 row inserted."),
        Ok(false) => ExecutionResult::error(
            "ERROR: Failed to insert row. The record may be too large for a page.",
        ),
        Err(err) => ExecutionResult::error(format!("ERROR: {err}.")),
    }
}
