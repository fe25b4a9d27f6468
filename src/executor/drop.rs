use crate::catalog::Catalog;
use crate::storage::table_data_path;
use crate::types::command_types::DropTableCommand;
use crate::types::result_types::ExecutionResult;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

pub fn execute_drop_table(
    catalog: &mut Catalog,
    data_dir: &Path,
    cmd: &DropTableCommand,
) -> ExecutionResult {
    let table_name = &cmd.table_name;
    if !catalog.table_exists(table_name) {
        return ExecutionResult::error(format!("ERROR: Table '{table_name}' does not exist."));
    }
    info!("attempting to drop table '{table_name}'");
    let data_path = table_data_path(data_dir, table_name);

    // step 1: remove the table from the catalog, in memory and on disk
    if let Err(err) = catalog.remove_table(table_name) {
        return ExecutionResult::error(format!(
            "ERROR: DROP TABLE failed for table '{table_name}'. Reason: {err}"
        ));
    }

    // step 2: remove the data file. A missing file is not fatal: the
    // catalog no longer knows the table, which is what the user asked for.
    if data_path.exists() {
        if let Err(err) = fs::remove_file(&data_path) {
            error!(
                "table '{table_name}' removed from catalog, but the data file {} could not \
                 be deleted and may be orphaned: {err}",
                data_path.display()
            );
            return ExecutionResult::error(format!(
                "ERROR: DROP TABLE failed for table '{table_name}'. Reason: {err}"
            ));
        }
        info!(
            "data file for table '{table_name}' removed at {}",
            data_path.display()
        );
    } else {
        warn!(
            "data file for table '{table_name}' does not exist at {}",
            data_path.display()
        );
    }

    ExecutionResult::ok(format!("OK (Table '{table_name}' dropped successfully)"))
}
