use crate::errors::catalog_error::CatalogError;
use crate::types::catalog_types::TableSchema;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

pub fn load_catalog(catalog_path: &Path) -> Result<Vec<TableSchema>, CatalogError> {
    if !catalog_path.exists() {
        warn!("catalog file does not exist: {}", catalog_path.display());
        return Ok(Vec::new());
    }

    let file = File::open(catalog_path)?;
    let reader = BufReader::new(file);
    let tables: Vec<TableSchema> = serde_json::from_reader(reader)?;
    Ok(tables)
}

pub fn save_catalog(catalog_path: &Path, tables: &[TableSchema]) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(tables)?;
    let dir = catalog_path
        .parent()
        .ok_or_else(|| CatalogError::Corrupt("catalog path has no parent directory".into()))?;
    fs::create_dir_all(dir)?;

    // write to a temp file in the same directory for an atomic replace
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut f = tmp.as_file();
        f.write_all(json.as_bytes())?;
        f.sync_all()?;
    }
    tmp.persist(catalog_path)
        .map_err(|err| CatalogError::Io(err.error))?;

    // on unix: also sync directory metadata
    #[cfg(unix)]
    {
        let dirfd = File::open(dir)?;
        dirfd.sync_all()?;
    }

    info!("catalog file written: {}", catalog_path.display());
    Ok(())
}
