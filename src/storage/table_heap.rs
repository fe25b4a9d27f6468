use crate::consts::page_consts::PAGE_SIZE;
use crate::errors::storage_error::StorageError;
use crate::storage::page::Page;
use crate::types::storage_types::PageId;
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// One table's heap file: an unordered sequence of slotted pages. The heap
/// exclusively owns the file handle; all page I/O goes through it.
///
/// Methods take `&self` and route reads and writes through `&File`, so a
/// scan iterator can borrow the heap while further inserts land through the
/// same handle. A scan interleaved with inserts observes the new records.
pub struct TableHeap {
    file: std::fs::File,
    path: PathBuf,
}

impl TableHeap {
    /// Open the heap file at `path` for read+write, creating it empty first
    /// if it does not exist. Two attempts: plain open, then create+open.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StorageError> {
        let path = path.into();
        let file = match OpenOptions::new().read(true).write(true).open(&path) {
            Ok(file) => file,
            Err(_) => OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .open(&path)
                .map_err(|source| StorageError::Open {
                    path: path.clone(),
                    source,
                })?,
        };
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of pages, derived from the current file length. The file is
    /// always a whole multiple of the page size.
    pub fn num_pages(&self) -> u32 {
        match self.file.metadata() {
            Ok(metadata) => (metadata.len() / PAGE_SIZE as u64) as u32,
            Err(err) => {
                warn!("failed to stat {}: {err}", self.path.display());
                0
            }
        }
    }

    /// Append a record to the last page, allocating a fresh page when it
    /// does not fit. Returns Ok(false) when the record cannot fit even an
    /// empty page. A successful insert is flushed before returning.
    pub fn insert_record(&self, record: &[u8]) -> Result<bool, StorageError> {
        let num_pages = self.num_pages();
        if num_pages > 0 {
            let last_page_id = num_pages - 1;
            let mut last_page = self.read_page(last_page_id)?;
            if last_page.add_record(record) {
                self.write_page(last_page_id, &last_page)?;
                return Ok(true);
            }
        }

        debug!("allocating a new page for the record");
        let mut new_page = Page::new();
        new_page.initialize();
        if !new_page.add_record(record) {
            error!(
                "record of {} bytes does not fit an empty page",
                record.len()
            );
            return Ok(false);
        }
        self.write_page(num_pages, &new_page)?;
        Ok(true)
    }

    pub fn read_page(&self, page_id: PageId) -> Result<Page, StorageError> {
        let num_pages = self.num_pages();
        if page_id >= num_pages {
            return Err(StorageError::PageOutOfRange { page_id, num_pages });
        }

        let mut file = &self.file;
        file.seek(SeekFrom::Start(page_id as u64 * PAGE_SIZE as u64))?;
        let mut buf = [0u8; PAGE_SIZE];
        file.read_exact(&mut buf)?;
        Ok(Page::from_bytes(buf))
    }

    /// Write a page at `page_id` and flush. Writing at `num_pages` is the
    /// legal way to append a new page; anything beyond is out of range.
    pub fn write_page(&self, page_id: PageId, page: &Page) -> Result<(), StorageError> {
        let num_pages = self.num_pages();
        if page_id > num_pages {
            return Err(StorageError::PageOutOfRange { page_id, num_pages });
        }
        if page_id == num_pages {
            debug!("appending page {page_id} to {}", self.path.display());
        }

        let mut file = &self.file;
        file.seek(SeekFrom::Start(page_id as u64 * PAGE_SIZE as u64))?;
        file.write_all(page.as_bytes())?;
        self.file.sync_all()?;
        Ok(())
    }

    /// Sequential iterator over every record in the heap, starting at
    /// page 0, slot 0.
    pub fn iter(&self) -> TableIter<'_> {
        TableIter::resume(self, 0, 0)
    }
}

/// Cursor over a heap: visits records in (page, slot) order, silently
/// skipping pages with no records. The page count is re-derived on every
/// step, so records inserted mid-scan are picked up.
pub struct TableIter<'a> {
    heap: &'a TableHeap,
    current_page_id: PageId,
    current_slot_num: u16,
}

impl<'a> TableIter<'a> {
    /// Continue a scan from a saved (page, slot) position.
    pub fn resume(heap: &'a TableHeap, page_id: PageId, slot_num: u16) -> Self {
        Self {
            heap,
            current_page_id: page_id,
            current_slot_num: slot_num,
        }
    }

    pub fn position(&self) -> (PageId, u16) {
        (self.current_page_id, self.current_slot_num)
    }
}

impl Iterator for TableIter<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        loop {
            if self.current_page_id >= self.heap.num_pages() {
                return None;
            }

            let page = match self.heap.read_page(self.current_page_id) {
                Ok(page) => page,
                Err(err) => {
                    error!(
                        "failed to read page {} of {}: {err}",
                        self.current_page_id,
                        self.heap.path().display()
                    );
                    return None;
                }
            };

            if self.current_slot_num >= page.num_records() {
                self.current_slot_num = 0;
                self.current_page_id += 1;
                continue;
            }

            let record = page.record(&page.slot(self.current_slot_num)).to_vec();
            self.current_slot_num += 1;
            return Some(record);
        }
    }
}
