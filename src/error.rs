//! Error types for XML marshaling.
//!
//! Every failure is terminal for the encode call that produced it and is
//! returned to the caller verbatim. Nothing already handed to a writer is
//! rolled back.
//!
//! ## Error Categories
//!
//! - **Delegation Errors**: a value's own text marshaling refused the value
//!   (for example a timestamp whose year has more than four digits)
//! - **Writer Errors**: the underlying byte stream failed on write or flush
//! - **Structure Errors**: a token would break element nesting or carries an
//!   invalid name
//!
//! ## Examples
//!
//! ```rust
//! use xml_marshal::Error;
//!
//! let err = Error::unexpected_end(Some("User"), "Admin");
//! assert!(err.to_string().contains("</Admin>"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while marshaling a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while writing or flushing
    #[error("IO error: {0}")]
    Io(String),

    /// A value's text marshaling failed
    #[error("cannot marshal {type_name} as text: {msg}")]
    Marshal {
        type_name: &'static str,
        msg: String,
    },

    /// Element or attribute name that XML cannot carry
    #[error("invalid XML name {0:?}")]
    InvalidName(String),

    /// End tag that does not close the innermost open element
    #[error("end tag </{}> {}", .found, describe_open(.expected))]
    UnexpectedEnd {
        expected: Option<String>,
        found: String,
    },

    /// Output finished while an element was still open
    #[error("unclosed tag <{0}>")]
    Unclosed(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for write or flush failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a delegation error for a value whose text form cannot be produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xml_marshal::Error;
    ///
    /// let err = Error::marshal("DateTime", "year outside of range [0,9999]");
    /// assert!(err.to_string().contains("DateTime"));
    /// ```
    pub fn marshal<T: fmt::Display>(type_name: &'static str, msg: T) -> Self {
        Error::Marshal {
            type_name,
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid name error.
    pub fn invalid_name(name: &str) -> Self {
        Error::InvalidName(name.to_string())
    }

    /// Creates a nesting error for an end tag. `expected` is the innermost
    /// open element, if any.
    pub fn unexpected_end(expected: Option<&str>, found: &str) -> Self {
        Error::UnexpectedEnd {
            expected: expected.map(str::to_string),
            found: found.to_string(),
        }
    }

    /// Creates an unclosed element error.
    pub fn unclosed(name: &str) -> Self {
        Error::Unclosed(name.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// Intended for [`TokenWriter`](crate::TokenWriter) implementations outside
    /// this crate.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Whether the error came from a value's own text marshaling rather than
    /// from the writer.
    #[must_use]
    pub fn is_marshal(&self) -> bool {
        matches!(self, Error::Marshal { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

fn describe_open(expected: &Option<String>) -> String {
    match expected {
        Some(open) => format!("does not match start tag <{open}>"),
        None => "without start tag".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
