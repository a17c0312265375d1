//! Configuration options for the XML writer.
//!
//! - [`XmlOptions`]: controls the document prologue and output buffering
//!
//! ## Examples
//!
//! ```rust
//! use xml_marshal::{to_string_with_options, User, XmlOptions};
//!
//! let options = XmlOptions::new().with_declaration(true);
//! let xml = to_string_with_options(&User::default(), options).unwrap();
//! assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<User>"));
//! ```

/// The XML declaration written by [`XmlOptions::with_declaration`].
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Configuration for [`XmlWriter`](crate::XmlWriter).
///
/// # Examples
///
/// ```rust
/// use xml_marshal::XmlOptions;
///
/// let options = XmlOptions::new().with_capacity(512);
/// assert_eq!(options.buffer_capacity, 512);
/// assert!(!options.declaration);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlOptions {
    /// Write [`XML_HEADER`] before the first token.
    pub declaration: bool,
    /// Size of the output buffer in bytes. Tokens reach the inner writer when
    /// the buffer fills or on flush.
    pub buffer_capacity: usize,
}

impl Default for XmlOptions {
    fn default() -> Self {
        XmlOptions {
            declaration: false,
            buffer_capacity: 8 * 1024,
        }
    }
}

impl XmlOptions {
    /// Creates default options (no declaration, 8 KiB buffer).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the XML declaration.
    #[must_use]
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    /// Sets the output buffer size. Zero is raised to one byte.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }
}
