use crate::catalog::Catalog;
use crate::types::result_types::{ExecutionResult, ResultSet};

pub fn execute_show_tables(catalog: &Catalog) -> ExecutionResult {
    let headers = vec!["Table Name".to_string()];
    let rows = catalog
        .get_all_schemas()
        .iter()
        .map(|schema| vec![schema.table_name.clone()])
        .collect();
    ExecutionResult::success_with_data(ResultSet { headers, rows })
}
