use crate::types::storage_types::Row;

/// A pull-based ("Volcano") query operator. Each call to `next` produces
/// the next output row, or `None` once the stream is exhausted. Operators
/// compose into a tree by owning their children and pulling from them;
/// the caller drives iteration from the root and simply stops pulling to
/// abandon a scan.
pub trait Operator {
    fn next(&mut self) -> Option<Row>;
}
