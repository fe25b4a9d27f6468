use crate::types::storage_types::PageId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not open or create table heap file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("page {page_id} is out of range (heap has {num_pages} pages)")]
    PageOutOfRange { page_id: PageId, num_pages: u32 },
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("field of {len} bytes exceeds the {max} byte per-field limit", max = u16::MAX)]
    FieldTooLong { len: usize },
    #[error("record truncated at byte {offset}")]
    Truncated { offset: usize },
    #[error("record field is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
