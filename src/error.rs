use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::decode::DecodeError;

/// Main error type for tmx operations
#[derive(Error, Diagnostic, Debug)]
pub enum TmxError {
    #[error("allocation failure: {message}")]
    #[diagnostic(code(tmx::alloc))]
    Allocation { message: String },

    #[error("access denied: {}", path.display())]
    #[diagnostic(code(tmx::access))]
    AccessDenied { path: PathBuf },

    #[error("file not found: {}", path.display())]
    #[diagnostic(code(tmx::not_found))]
    FileNotFound { path: PathBuf },

    #[error("unsupported format: {message}")]
    #[diagnostic(code(tmx::format))]
    UnsupportedFormat {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("missing '{attribute}' attribute in the '{element}' element")]
    #[diagnostic(code(tmx::missing_attribute))]
    MissingAttribute { attribute: String, element: String },

    #[error("invalid content in the '{element}' element: {message}")]
    #[diagnostic(code(tmx::content))]
    InvalidContent { element: String, message: String },

    #[error("invalid content in the 'data' element: {0}")]
    #[diagnostic(code(tmx::data))]
    Data(#[from] DecodeError),

    #[error("xml parser: {message} (byte {position})")]
    #[diagnostic(code(tmx::xml))]
    Xml { position: u64, message: String },

    #[error("unsupported encoding: {message}")]
    #[diagnostic(code(tmx::encoding))]
    UnsupportedEncoding {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("unsupported functionality: {message}")]
    #[diagnostic(code(tmx::unsupported))]
    Unsupported {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{}: {message}", path.display())]
    #[diagnostic(code(tmx::unknown))]
    Unknown { path: PathBuf, message: String },
}

/// Coarse classification of a [`TmxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AllocationFailure,
    AccessDenied,
    FileNotFound,
    UnsupportedFormat,
    MissingAttribute,
    InvalidElementContent,
    UnsupportedEncoding,
    UnsupportedFunctionality,
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::AllocationFailure => "allocation failure",
            ErrorKind::AccessDenied => "access denied",
            ErrorKind::FileNotFound => "file not found",
            ErrorKind::UnsupportedFormat => "unsupported format",
            ErrorKind::MissingAttribute => "missing attribute",
            ErrorKind::InvalidElementContent => "invalid element content",
            ErrorKind::UnsupportedEncoding => "unsupported encoding",
            ErrorKind::UnsupportedFunctionality => "unsupported functionality",
            ErrorKind::Unknown => "unknown error",
        };
        f.write_str(label)
    }
}

impl TmxError {
    /// The kind of failure, independent of its message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TmxError::Allocation { .. } => ErrorKind::AllocationFailure,
            TmxError::AccessDenied { .. } => ErrorKind::AccessDenied,
            TmxError::FileNotFound { .. } => ErrorKind::FileNotFound,
            TmxError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            TmxError::MissingAttribute { .. } => ErrorKind::MissingAttribute,
            TmxError::InvalidContent { .. } | TmxError::Xml { .. } => {
                ErrorKind::InvalidElementContent
            }
            TmxError::Data(DecodeError::Allocation { .. }) => ErrorKind::AllocationFailure,
            TmxError::Data(_) => ErrorKind::InvalidElementContent,
            TmxError::UnsupportedEncoding { .. } => ErrorKind::UnsupportedEncoding,
            TmxError::Unsupported { .. } => ErrorKind::UnsupportedFunctionality,
            TmxError::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    pub(crate) fn missing(attribute: &str, element: &str) -> Self {
        TmxError::MissingAttribute {
            attribute: attribute.to_string(),
            element: element.to_string(),
        }
    }

    pub(crate) fn content(element: &str, message: impl Into<String>) -> Self {
        TmxError::InvalidContent {
            element: element.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn unsupported(message: impl Into<String>, help: Option<&str>) -> Self {
        TmxError::Unsupported {
            message: message.into(),
            help: help.map(str::to_string),
        }
    }

    /// Map a failure to open `path` onto the matching error kind.
    pub(crate) fn from_open(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => TmxError::AccessDenied { path },
            std::io::ErrorKind::NotFound => TmxError::FileNotFound { path },
            _ => TmxError::Unknown {
                path,
                message: err.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, TmxError>;
