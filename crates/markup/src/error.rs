// ABOUTME: Error types for postpress transforms: ErrorCode enum and TransformError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing different categories of transform failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    FileNotFound,
    Read,
    Parse,
    Write,
    NoContentWrapper,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::FileNotFound => "file not found",
            ErrorCode::Read => "read error",
            ErrorCode::Parse => "parse error",
            ErrorCode::Write => "write error",
            ErrorCode::NoContentWrapper => "no content wrapper",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for document transforms.
#[derive(Debug, thiserror::Error)]
pub struct TransformError {
    pub code: ErrorCode,
    pub path: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "postpress: {} {}: {}", self.op, self.path, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl TransformError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::FileNotFound,
            path: path.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a Read error.
    pub fn read(
        path: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Read,
            path: path.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Parse error.
    pub fn parse(
        path: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Parse,
            path: path.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Write error.
    pub fn write(
        path: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Write,
            path: path.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a NoContentWrapper error.
    pub fn no_content_wrapper(path: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NoContentWrapper,
            path: path.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Returns true if this is a FileNotFound error.
    pub fn is_file_not_found(&self) -> bool {
        self.code == ErrorCode::FileNotFound
    }

    /// Returns true if this is a Read error.
    pub fn is_read(&self) -> bool {
        self.code == ErrorCode::Read
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        self.code == ErrorCode::Parse
    }

    /// Returns true if this is a Write error.
    pub fn is_write(&self) -> bool {
        self.code == ErrorCode::Write
    }

    /// Returns true if this is a NoContentWrapper error.
    pub fn is_no_content_wrapper(&self) -> bool {
        self.code == ErrorCode::NoContentWrapper
    }
}
