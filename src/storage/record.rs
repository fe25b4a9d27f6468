use crate::errors::storage_error::RecordError;
use crate::types::storage_types::Row;

/// Encode a row as a byte sequence: each value becomes a 2-byte
/// little-endian length followed by the raw bytes. No type tags, no
/// terminator.
pub fn encode(values: &[String]) -> Result<Vec<u8>, RecordError> {
    let mut record = Vec::new();
    for value in values {
        let len = value.len();
        if len > u16::MAX as usize {
            return Err(RecordError::FieldTooLong { len });
        }
        record.extend_from_slice(&(len as u16).to_le_bytes());
        record.extend_from_slice(value.as_bytes());
    }
    Ok(record)
}

/// Inverse of [`encode`]: read length-prefixed chunks until the buffer is
/// exhausted. A prefix that runs off the end of the buffer is an error.
pub fn decode(bytes: &[u8]) -> Result<Row, RecordError> {
    let mut values = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        if pos + 2 > bytes.len() {
            return Err(RecordError::Truncated { offset: pos });
        }
        let len = u16::from_le_bytes([bytes[pos], bytes[pos + 1]]) as usize;
        pos += 2;
        if pos + len > bytes.len() {
            return Err(RecordError::Truncated { offset: pos });
        }
        values.push(String::from_utf8(bytes[pos..pos + len].to_vec())?);
        pos += len;
    }
    Ok(values)
}
