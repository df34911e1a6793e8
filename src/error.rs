use thiserror::Error;

/// Failure modes of the generation pipeline.
///
/// `SchemaLoad` is fatal and aborts a batch before any record is built;
/// the remaining variants are per-record and must not stop the batch.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Base schema missing, unreadable, or not a JSON object.
    #[error("base schema error: {0}")]
    SchemaLoad(String),

    /// Malformed catalogue entry (empty learner/title, missing pre-assigned ID).
    #[error("invalid catalogue entry: {0}")]
    InvalidInput(String),

    /// A record lacks fields required for layout, or PDF assembly failed.
    #[error("certificate render error: {0}")]
    Render(String),

    /// Filesystem write or directory creation failed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}
