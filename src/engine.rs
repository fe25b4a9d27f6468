use crate::catalog::Catalog;
use crate::errors::catalog_error::CatalogError;
use crate::executor;
use crate::parser;
use crate::types::command_types::Command;
use crate::types::result_types::ExecutionResult;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The engine owns the catalog and the data directory, and fronts the
/// whole parse → plan → execute path. One engine per process.
pub struct Engine {
    data_dir: PathBuf,
    catalog: Catalog,
}

impl Engine {
    /// Open the database under `data_dir`. A corrupt catalog is fatal:
    /// the error propagates instead of proceeding with a partial view.
    pub fn open<P: Into<PathBuf>>(data_dir: P) -> Result<Self, CatalogError> {
        let data_dir = data_dir.into();
        let catalog = Catalog::initialize(&data_dir)?;
        Ok(Self { data_dir, catalog })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Parse and execute one statement. Never panics and never returns an
    /// error type: every outcome, including a syntax error, is an
    /// [`ExecutionResult`] for the caller to display.
    pub fn run_query(&mut self, query: &str) -> ExecutionResult {
        let command = match parser::parse_sql(query) {
            Ok(command) => command,
            Err(err) => {
                debug!("rejected query: {err}");
                return ExecutionResult::error("Invalid SQL syntax.");
            }
        };

        match command {
            Command::CreateTable(cmd) => {
                executor::execute_create_table(&mut self.catalog, &self.data_dir, &cmd)
            }
            Command::DropTable(cmd) => {
                executor::execute_drop_table(&mut self.catalog, &self.data_dir, &cmd)
            }
            Command::Insert(cmd) => executor::execute_insert(&self.catalog, &self.data_dir, &cmd),
            Command::ShowTables => executor::execute_show_tables(&self.catalog),
            Command::Select(cmd) => executor::execute_select(&self.catalog, &self.data_dir, &cmd),
        }
    }
}
