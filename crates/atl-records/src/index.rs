//! Composite index keys for prefix-range queries.
//!
//! An index entry is a normal key-value pair whose key concatenates an
//! index name and the attribute values to range over, each terminated by a
//! `U+0000` separator (the host ledger's composite-key format). Only the
//! key matters; the stored value is a one-byte sentinel so the entry is
//! queryable without duplicating the record. There is no deletion path and
//! a colliding write simply overwrites the sentinel.
//!
//! No query path uses these entries yet; the repository exposes the writer
//! as an optional capability for future range queries.

use crate::error::{RecordError, RecordResult};

/// Sentinel value stored under every index key.
pub const INDEX_SENTINEL: [u8; 1] = [0x00];

const SEPARATOR: char = '\u{0000}';

/// Build a composite key from an index name and attribute values.
///
/// Layout: `\u{0000}` + index name + `\u{0000}` + each attribute +
/// `\u{0000}`. The index name must be non-empty, and no component may
/// itself contain the separator.
pub fn composite_key(index_name: &str, attributes: &[&str]) -> RecordResult<String> {
    if index_name.is_empty() {
        return Err(RecordError::Validation(
            "index name must be a non-empty string".to_string(),
        ));
    }
    if index_name.contains(SEPARATOR) {
        return Err(RecordError::Validation(
            "index name must not contain U+0000".to_string(),
        ));
    }
    let mut key = String::with_capacity(index_name.len() + attributes.len() * 8 + 2);
    key.push(SEPARATOR);
    key.push_str(index_name);
    key.push(SEPARATOR);
    for attribute in attributes {
        if attribute.contains(SEPARATOR) {
            return Err(RecordError::Validation(
                "index attribute must not contain U+0000".to_string(),
            ));
        }
        key.push_str(attribute);
        key.push(SEPARATOR);
    }
    Ok(key)
}
