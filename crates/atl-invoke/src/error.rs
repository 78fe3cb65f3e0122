use atl_records::RecordError;

/// Errors produced while parsing or executing an invocation.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// Wrong number of positional arguments for the named function.
    #[error("incorrect number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// A required positional argument was the empty string.
    #[error("argument {position} must be a non-empty string")]
    EmptyArgument { position: usize },

    /// The warranty flag did not parse as a boolean.
    #[error("argument {position} must be \"true\" or \"false\", got {value:?}")]
    InvalidBoolean { position: usize, value: String },

    /// The function name matched no known operation.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Failure from the record core, surfaced with its own message.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Result alias for invocation operations.
pub type InvokeResult<T> = Result<T, InvokeError>;
