mod io;
mod validate;

use crate::consts::catalog_consts::CATALOG_FILE;
use crate::errors::catalog_error::CatalogError;
use crate::types::catalog_types::TableSchema;
use std::path::{Path, PathBuf};
use tracing::info;

/// The set of table schemas, mirrored in memory and persisted as a JSON
/// document at `<data_dir>/catalog.json`. Schemas keep their creation
/// order. Owned by the engine and threaded through all handlers.
pub struct Catalog {
    catalog_path: PathBuf,
    tables: Vec<TableSchema>,
}

impl Catalog {
    /// Load the catalog under `data_dir`. An absent file is an empty
    /// catalog; an unreadable or structurally invalid file is an error the
    /// caller must treat as fatal, since proceeding would mean operating on
    /// a partial view of the database.
    pub fn initialize<P: AsRef<Path>>(data_dir: P) -> Result<Self, CatalogError> {
        let catalog_path = data_dir.as_ref().join(CATALOG_FILE);
        let tables = io::load_catalog(&catalog_path)?;
        validate::validate_tables(&tables)?;
        Ok(Self {
            catalog_path,
            tables,
        })
    }

    /// Re-run initialization against `data_dir`. Pointing at the path the
    /// catalog is already bound to is a no-op; a different path replaces
    /// the in-memory state wholesale.
    pub fn reinitialize<P: AsRef<Path>>(&mut self, data_dir: P) -> Result<(), CatalogError> {
        let catalog_path = data_dir.as_ref().join(CATALOG_FILE);
        if catalog_path == self.catalog_path {
            return Ok(());
        }
        *self = Self::initialize(data_dir)?;
        Ok(())
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn table_exists(&self, table_name: &str) -> bool {
        self.tables.iter().any(|t| t.table_name == table_name)
    }

    pub fn get_schema(&self, table_name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.table_name == table_name)
    }

    /// All schemas in creation order.
    pub fn get_all_schemas(&self) -> &[TableSchema] {
        &self.tables
    }

    /// Register a new table and rewrite the catalog file. If the rewrite
    /// fails the in-memory append is undone, so both views stay consistent.
    pub fn add_table(&mut self, schema: TableSchema) -> Result<(), CatalogError> {
        if self.table_exists(&schema.table_name) {
            return Err(CatalogError::DuplicateTable(schema.table_name));
        }
        validate::validate_schema(&schema)?;

        let table_name = schema.table_name.clone();
        self.tables.push(schema);
        if let Err(err) = self.save() {
            self.tables.pop();
            return Err(err);
        }
        info!("table '{table_name}' added to catalog");
        Ok(())
    }

    /// Remove a table and rewrite the catalog file. Symmetric to
    /// `add_table`: the removed entry is restored if the rewrite fails.
    pub fn remove_table(&mut self, table_name: &str) -> Result<(), CatalogError> {
        let index = self
            .tables
            .iter()
            .position(|t| t.table_name == table_name)
            .ok_or_else(|| CatalogError::UnknownTable(table_name.to_string()))?;

        let removed = self.tables.remove(index);
        if let Err(err) = self.save() {
            self.tables.insert(index, removed);
            return Err(err);
        }
        info!("table '{table_name}' removed from catalog");
        Ok(())
    }

    fn save(&self) -> Result<(), CatalogError> {
        io::save_catalog(&self.catalog_path, &self.tables)
    }
}
