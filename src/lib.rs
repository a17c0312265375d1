//! # xml_marshal
//!
//! Hand-controlled XML marshaling: a record decides, field by field, which
//! tokens it produces and in what order, and streams them into a token writer.
//!
//! ## Why not reflection?
//!
//! Derived encoders map every field the same way. Real documents rarely do:
//!
//! - one field is renamed (`first_name`) and always present, even when empty
//! - another (`LastName`) disappears entirely when it has no text
//! - a nullable field (`Bio`) becomes an empty element instead of vanishing
//! - a timestamp (`CreatedAt`) renders itself through its own text form
//!
//! Here each record carries a field table of [`Field`]s, each tagged with an
//! [`EmissionRule`], and the encoder walks that table in order.
//!
//! ## Quick Start
//!
//! ```rust
//! use xml_marshal::{to_string, User};
//!
//! let xml = to_string(&User::default()).unwrap();
//! assert_eq!(
//!     xml,
//!     "<User><first_name></first_name><Admin>false</Admin><Bio></Bio>\
//!      <CreatedAt>0001-01-01T00:00:00Z</CreatedAt></User>"
//! );
//! ```
//!
//! ### Nesting inside a larger document
//!
//! The caller owns the outer tag, so a record can be written anywhere in a
//! stream that is already open:
//!
//! ```rust
//! use xml_marshal::token::{StartElement, Token};
//! use xml_marshal::{encode, TokenWriter, User, XmlWriter};
//!
//! let mut writer = XmlWriter::new(Vec::new());
//! writer.write_token(&Token::start("Users")).unwrap();
//! encode(&mut writer, &User::new("Mary", "Jane"), StartElement::new("Author")).unwrap();
//! writer.write_token(&Token::end("Users")).unwrap();
//!
//! let xml = String::from_utf8(writer.into_inner().unwrap()).unwrap();
//! assert!(xml.starts_with("<Users><Author><first_name>Mary</first_name>"));
//! assert!(xml.ends_with("</Author></Users>"));
//! ```
//!
//! ## Failure
//!
//! Encoding stops at the first error: a value that cannot render itself, a
//! token the writer rejects, or a failed flush. Tokens already forwarded stay
//! forwarded.
//!
//! ## Logging
//!
//! The encoder emits `tracing` events at `debug` and `trace` level. Install a
//! subscriber to see them.

pub mod encoder;
pub mod error;
pub mod json;
pub mod options;
pub mod record;
pub mod rule;
pub mod text;
pub mod token;
pub mod writer;

pub use encoder::{encode, encode_fields, MarshalXml};
pub use error::{Error, Result};
pub use options::XmlOptions;
pub use record::{User, USER_FIELDS};
pub use rule::{Emission, EmissionRule, Field};
pub use text::{zero_time, MarshalText};
pub use token::{StartElement, Token};
pub use writer::{TokenWriter, XmlWriter};

use std::io;

/// Serialize a record to an XML string under its default element name.
///
/// # Examples
///
/// ```rust
/// use xml_marshal::{to_string, User};
///
/// let xml = to_string(&User::new("Ada", "")).unwrap();
/// assert!(xml.contains("<first_name>Ada</first_name><Admin>"));
/// ```
///
/// # Errors
///
/// Returns an error if a field cannot be rendered as text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + MarshalXml,
{
    to_string_with_options(value, XmlOptions::default())
}

/// Serialize a record to an XML string with custom writer options.
///
/// # Errors
///
/// Returns an error if a field cannot be rendered as text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: XmlOptions) -> Result<String>
where
    T: ?Sized + MarshalXml,
{
    let mut buffer = Vec::with_capacity(256);
    to_writer_with_options(&mut buffer, value, options)?;
    String::from_utf8(buffer).map_err(Error::custom)
}

/// Serialize a record as XML onto an I/O stream.
///
/// The record is wrapped in its default element ([`MarshalXml::ELEMENT`]).
///
/// # Examples
///
/// ```rust
/// use xml_marshal::{to_writer, User};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &User::default()).unwrap();
/// assert!(buffer.starts_with(b"<User>"));
/// ```
///
/// # Errors
///
/// Returns an error if a field cannot be rendered or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + MarshalXml,
{
    to_writer_with_options(writer, value, XmlOptions::default())
}

/// Serialize a record as XML onto an I/O stream with custom writer options.
///
/// # Errors
///
/// Returns an error if a field cannot be rendered or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: XmlOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + MarshalXml,
{
    let mut xml = XmlWriter::with_options(writer, options);
    encode(&mut xml, value, StartElement::new(T::ELEMENT))?;
    xml.into_inner()?;
    Ok(())
}

/// Collect the tokens a record produces under its default element name.
///
/// # Examples
///
/// ```rust
/// use xml_marshal::{to_tokens, Token, User};
///
/// let tokens = to_tokens(&User::default()).unwrap();
/// assert_eq!(tokens.len(), 13);
/// assert_eq!(tokens[0], Token::start("User"));
/// ```
///
/// # Errors
///
/// Returns an error if a field cannot be rendered as text.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_tokens<T>(value: &T) -> Result<Vec<Token<'static>>>
where
    T: ?Sized + MarshalXml,
{
    let mut tokens = Vec::new();
    encode(&mut tokens, value, StartElement::new(T::ELEMENT))?;
    Ok(tokens)
}
