use crate::catalog::Catalog;
use crate::storage::table_data_path;
use crate::types::catalog_types::TableSchema;
use crate::types::command_types::CreateTableCommand;
use crate::types::result_types::ExecutionResult;
use std::fs::{self, File};
use std::path::Path;
use tracing::{error, info};

/// CREATE TABLE touches two artifacts: the catalog and the table's data
/// file. If the data file cannot be created the catalog entry is rolled
/// back, so a failed create leaves nothing behind.
pub fn execute_create_table(
    catalog: &mut Catalog,
    data_dir: &Path,
    cmd: &CreateTableCommand,
) -> ExecutionResult {
    if catalog.table_exists(&cmd.table_name) {
        error!("table '{}' already exists in the catalog", cmd.table_name);
        return ExecutionResult::error(format!("ERROR: Table {} already exists.", cmd.table_name));
    }

    let schema = TableSchema {
        table_name: cmd.table_name.clone(),
        column_definitions: cmd.column_definitions.clone(),
    };

    // step 1: add the table to the catalog, in memory and on disk
    if let Err(err) = catalog.add_table(schema) {
        error!("failed to add table '{}' to catalog: {err}", cmd.table_name);
        return ExecutionResult::error(format!("ERROR: {err}. Table creation aborted."));
    }

    // step 2: create the empty data file
    let data_path = table_data_path(data_dir, &cmd.table_name);
    if let Err(err) = File::create(&data_path) {
        error!(
            "failed to create data file {}: {err}",
            data_path.display()
        );

        if let Err(rollback_err) = catalog.remove_table(&cmd.table_name) {
            error!(
                "failed to roll back catalog update for table '{}': {rollback_err}",
                cmd.table_name
            );
        } else {
            info!("rolled back catalog update for table '{}'", cmd.table_name);
        }
        if data_path.exists() {
            if let Err(remove_err) = fs::remove_file(&data_path) {
                error!(
                    "failed to remove partial data file {}: {remove_err}",
                    data_path.display()
                );
            }
        }

        return ExecutionResult::error(format!("ERROR: {err}. Table creation aborted."));
    }

    info!(
        "data file created for table '{}' at {}",
        cmd.table_name,
        data_path.display()
    );
    ExecutionResult::ok(format!(
        "OK (Table '{}' created successfully)",
        cmd.table_name
    ))
}
