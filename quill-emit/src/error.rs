use thiserror::Error;

/// Result type for emission operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A line classifier pointed outside the line it was given.
    ///
    /// This is a defect in the classifier, never in the emitted content.
    #[error("line classifier returned content range {start}..{end} for a {len}-byte line {line:?}")]
    Classifier {
        line: String,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error(
        "cannot declare namespace '{name}' inside a document already wrapped in namespace '{current}'"
    )]
    NestedNamespace { name: String, current: String },
}
