pub mod page;
pub mod record;
pub mod table_heap;

use std::path::{Path, PathBuf};

/// Path of the heap file backing `table_name` under `data_dir`.
pub fn table_data_path(data_dir: &Path, table_name: &str) -> PathBuf {
    data_dir.join(format!("{table_name}.data"))
}
