use crate::errors::execution_error::ExecutionError;
use crate::execution::operator::Operator;
use crate::storage::record;
use crate::storage::table_data_path;
use crate::storage::table_heap::{TableHeap, TableIter};
use crate::types::storage_types::{PageId, Row};
use std::path::Path;
use tracing::error;

/// Leaf operator: reads every record of a table's heap in (page, slot)
/// order and decodes it into a row. Owns the heap for its lifetime, along
/// with the scan cursor.
pub struct TableScan {
    heap: TableHeap,
    current_page_id: PageId,
    current_slot_num: u16,
}

impl TableScan {
    pub fn new(table_name: &str, data_dir: &Path) -> Result<Self, ExecutionError> {
        let heap = TableHeap::open(table_data_path(data_dir, table_name))?;
        Ok(Self {
            heap,
            current_page_id: 0,
            current_slot_num: 0,
        })
    }
}

impl Operator for TableScan {
    fn next(&mut self) -> Option<Row> {
        let mut iter = TableIter::resume(&self.heap, self.current_page_id, self.current_slot_num);
        let record = iter.next();
        (self.current_page_id, self.current_slot_num) = iter.position();

        let bytes = record?;
        match record::decode(&bytes) {
            Ok(row) => Some(row),
            Err(err) => {
                error!(
                    "corrupt record in {} near page {}: {err}",
                    self.heap.path().display(),
                    self.current_page_id
                );
                None
            }
        }
    }
}
