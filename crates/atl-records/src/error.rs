use atl_store::StoreError;

/// Errors produced by record operations.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// An input failed structural validation.
    #[error("invalid input: {0}")]
    Validation(String),

    /// No record is stored under the given tail number.
    #[error("Flight Record does not exist: {0}")]
    RecordNotFound(String),

    /// Insert collision: the asset id is already present in the record.
    #[error("AssetID already exists: {0}")]
    DuplicateAsset(String),

    /// The stored bytes for a record are malformed.
    #[error("failed to decode record {tail}: {reason}")]
    Decode { tail: String, reason: String },

    /// A record or projection could not be serialized.
    #[error("failed to encode record: {0}")]
    Encode(String),

    /// Underlying key-value store failure, surfaced verbatim.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result alias for record operations.
pub type RecordResult<T> = Result<T, RecordError>;
