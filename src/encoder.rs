//! The record encoder.
//!
//! [`encode_fields`] turns one record into tokens by walking its field table
//! in order, forwarding each token to the writer as soon as it is built:
//!
//! 1. the caller's start tag, unchanged
//! 2. one element per field, as the field's [`EmissionRule`](crate::EmissionRule) dictates
//! 3. the end tag matching the caller's start tag
//! 4. a flush
//!
//! The first failure ends the call. That can be a field whose content cannot
//! be rendered, a rejected token, or a failed flush. Nothing after it is
//! attempted and nothing already forwarded is taken back.
//!
//! The encoder keeps no state between calls. Two calls on distinct writers are
//! independent.

use crate::rule::{Emission, Field};
use crate::token::{element, empty_element, EndElement, StartElement, Token};
use crate::{Result, TokenWriter};
use tracing::{debug, trace};

/// A record that controls its own XML form.
pub trait MarshalXml {
    /// Element name used when no start tag is supplied by the caller.
    const ELEMENT: &'static str;

    /// Writes the record nested under `start`, closes `start` and flushes.
    fn marshal_xml<W>(&self, writer: &mut W, start: StartElement<'_>) -> Result<()>
    where
        W: TokenWriter + ?Sized;
}

/// Encodes `record` under `start` onto `writer`.
///
/// # Examples
///
/// ```rust
/// use xml_marshal::token::{StartElement, Token};
/// use xml_marshal::{encode, User};
///
/// let mut tokens: Vec<Token<'static>> = Vec::new();
/// encode(&mut tokens, &User::default(), StartElement::new("Person")).unwrap();
/// assert_eq!(tokens.first(), Some(&Token::start("Person")));
/// assert_eq!(tokens.last(), Some(&Token::end("Person")));
/// ```
///
/// # Errors
///
/// Returns the first error raised by the record's text marshaling or by the
/// writer.
pub fn encode<T, W>(writer: &mut W, record: &T, start: StartElement<'_>) -> Result<()>
where
    T: MarshalXml + ?Sized,
    W: TokenWriter + ?Sized,
{
    record.marshal_xml(writer, start)
}

/// Walks `fields` over `record`, forwarding tokens to `writer` one by one.
///
/// # Errors
///
/// Returns the first content error, write error or flush error.
pub fn encode_fields<R, W>(
    writer: &mut W,
    record: &R,
    fields: &[Field<R>],
    start: StartElement<'_>,
) -> Result<()>
where
    W: TokenWriter + ?Sized,
{
    debug!(element = %start.name, fields = fields.len(), "encoding record");
    let end = start.end();

    let result = write_record(writer, record, fields, start, &end);
    match &result {
        Ok(()) => debug!(element = %end.name, "record encoded"),
        Err(err) => debug!(element = %end.name, error = %err, "record encoding failed"),
    }
    result
}

fn write_record<R, W>(
    writer: &mut W,
    record: &R,
    fields: &[Field<R>],
    start: StartElement<'_>,
    end: &EndElement<'_>,
) -> Result<()>
where
    W: TokenWriter + ?Sized,
{
    writer.write_token(&Token::Start(start))?;
    for field in fields {
        match field.emission(record)? {
            Emission::Omitted => trace!(tag = field.tag, "omitting empty field"),
            Emission::Empty => {
                for token in &empty_element(field.tag) {
                    writer.write_token(token)?;
                }
            }
            Emission::Text(text) => {
                for token in &element(field.tag, text) {
                    writer.write_token(token)?;
                }
            }
        }
    }
    writer.write_token(&Token::End(end.clone()))?;
    writer.flush()
}
