//! Error taxonomy shared by the resolution, parsing, and rendering stages.
use thiserror::Error;

/// Failures raised by the core. Every variant carries the offending input so
/// batch callers can report each reference on its own line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown Bible book: '{0}'")]
    UnknownBook(String),
    #[error("Reference '{0}' has no book context")]
    MissingBookContext(String),
    #[error("Reference '{0}' has no book/chapter context")]
    MissingBookOrChapterContext(String),
    #[error("Malformed reference: '{0}'")]
    MalformedReference(String),
    #[error("No input received")]
    EmptyPayload,
    #[error("No verses found in input")]
    NoVersesFound,
    #[error("Unknown output format: '{0}'")]
    UnknownOutputFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
