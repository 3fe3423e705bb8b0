/// Error types for search and replace operations.
use thiserror::Error;

/// Result type for search and replace operations.
pub type Result<T> = std::result::Result<T, AtoError>;

/// Error types for search and replace operations.
#[derive(Error, Debug)]
pub enum AtoError {
    /// IO error (unreadable file, inaccessible directory, failed write)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The container could not be read or written as a ZIP archive
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML tokenizing error inside a text entry
    #[error("XML error: {0}")]
    Xml(String),

    /// An entry the document type requires is absent
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// File extension is neither .docx nor .pptx
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Search text was empty
    #[error("Search text must not be empty")]
    EmptySearch,

    /// Search pattern could not be compiled
    #[error("Invalid search: {0}")]
    InvalidSearch(String),

    /// Root folder of a batch does not exist or is not a directory
    #[error("Root folder not found: {0}")]
    RootNotFound(String),
}

/// Broad classification of an [`AtoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading or writing bytes failed.
    Io,
    /// The bytes were readable but not the document we expected.
    Format,
    /// The operation was refused before any work started.
    Rejected,
}

impl AtoError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AtoError::Io(_) | AtoError::Zip(_) => ErrorKind::Io,
            AtoError::Xml(_)
            | AtoError::EntryNotFound(_)
            | AtoError::InvalidFormat(_)
            | AtoError::UnsupportedFileType(_) => ErrorKind::Format,
            AtoError::EmptySearch | AtoError::InvalidSearch(_) | AtoError::RootNotFound(_) => {
                ErrorKind::Rejected
            },
        }
    }
}

impl From<quick_xml::Error> for AtoError {
    fn from(err: quick_xml::Error) -> Self {
        AtoError::Xml(err.to_string())
    }
}

impl From<quick_xml::escape::EscapeError> for AtoError {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        AtoError::Xml(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AtoError {
    fn from(err: tokio::task::JoinError) -> Self {
        AtoError::Io(std::io::Error::other(err))
    }
}
