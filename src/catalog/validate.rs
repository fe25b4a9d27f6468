use crate::errors::catalog_error::CatalogError;
use crate::types::catalog_types::TableSchema;
use std::collections::HashSet;

pub fn validate_tables(tables: &[TableSchema]) -> Result<(), CatalogError> {
    let mut names = HashSet::new();
    for schema in tables {
        if !names.insert(schema.table_name.as_str()) {
            return Err(CatalogError::Corrupt(format!(
                "duplicate table '{}'",
                schema.table_name
            )));
        }
        validate_schema(schema)?;
    }
    Ok(())
}

pub fn validate_schema(schema: &TableSchema) -> Result<(), CatalogError> {
    if schema.table_name.is_empty() {
        return Err(CatalogError::Corrupt("empty table name".into()));
    }
    if schema.column_definitions.is_empty() {
        return Err(CatalogError::Corrupt(format!(
            "table '{}' has no columns",
            schema.table_name
        )));
    }

    let mut columns = HashSet::new();
    for column in &schema.column_definitions {
        if column.column_name.is_empty() {
            return Err(CatalogError::Corrupt(format!(
                "empty column name in table '{}'",
                schema.table_name
            )));
        }
        if !columns.insert(column.column_name.as_str()) {
            return Err(CatalogError::Corrupt(format!(
                "duplicate column '{}' in table '{}'",
                column.column_name, schema.table_name
            )));
        }
    }
    Ok(())
}
