/// An ordered sequence of column values, one per column in schema order.
pub type Row = Vec<String>;

/// Zero-based index of a page within a heap file.
pub type PageId = u32;
