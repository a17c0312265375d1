//! Token sinks.
//!
//! The encoder talks to its output only through [`TokenWriter`]: one token at
//! a time, then a flush. Two sinks ship with the crate:
//!
//! - [`XmlWriter`] renders tokens as XML text onto any [`std::io::Write`]
//! - `Vec<Token<'static>>` records the tokens themselves
//!
//! ## Examples
//!
//! ```rust
//! use xml_marshal::token::{element, StartElement, Token};
//! use xml_marshal::{TokenWriter, XmlWriter};
//!
//! let mut writer = XmlWriter::new(Vec::new());
//! writer.write_token(&Token::Start(StartElement::new("Note"))).unwrap();
//! for token in element("Body", "fish & chips") {
//!     writer.write_token(&token).unwrap();
//! }
//! writer.write_token(&Token::end("Note")).unwrap();
//!
//! let bytes = writer.into_inner().unwrap();
//! assert_eq!(
//!     String::from_utf8(bytes).unwrap(),
//!     "<Note><Body>fish &amp; chips</Body></Note>"
//! );
//! ```

use crate::token::{Attr, StartElement, Token};
use crate::{Error, Result, XmlOptions};
use std::io::{BufWriter, Write};
use tracing::trace;

/// A sink for markup tokens.
///
/// Implementations may buffer; tokens are only guaranteed to be delivered once
/// [`flush`](TokenWriter::flush) returns `Ok`.
pub trait TokenWriter {
    /// Accepts one token.
    fn write_token(&mut self, token: &Token<'_>) -> Result<()>;

    /// Delivers everything accepted so far.
    fn flush(&mut self) -> Result<()>;
}

impl<W: TokenWriter + ?Sized> TokenWriter for &mut W {
    fn write_token(&mut self, token: &Token<'_>) -> Result<()> {
        (**self).write_token(token)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

impl TokenWriter for Vec<Token<'static>> {
    fn write_token(&mut self, token: &Token<'_>) -> Result<()> {
        self.push(token.clone().into_owned());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Renders tokens as XML text.
///
/// The writer checks that end tags close the innermost open element and that
/// names are valid XML names. Character data is escaped. Empty elements are
/// written as a start/end pair, never self-closed.
pub struct XmlWriter<W: Write> {
    out: BufWriter<W>,
    open: Vec<String>,
    options: XmlOptions,
    started: bool,
    scratch: String,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, XmlOptions::default())
    }

    pub fn with_options(writer: W, options: XmlOptions) -> Self {
        XmlWriter {
            out: BufWriter::with_capacity(options.buffer_capacity, writer),
            open: Vec::new(),
            options,
            started: false,
            scratch: String::with_capacity(64),
        }
    }

    /// Names of the elements currently open, outermost first.
    pub fn open_elements(&self) -> &[String] {
        &self.open
    }

    /// Flushes and returns the inner writer.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Unclosed`] if an element is still open, or with
    /// [`Error::Io`] if the final flush fails.
    pub fn into_inner(mut self) -> Result<W> {
        if let Some(name) = self.open.last() {
            return Err(Error::unclosed(name));
        }
        self.flush()?;
        self.out.into_inner().map_err(|e| Error::io(&e.error().to_string()))
    }

    fn render_start(&mut self, start: &StartElement<'_>) -> Result<()> {
        check_name(&start.name)?;
        self.scratch.push('<');
        self.scratch.push_str(&start.name);
        for Attr { name, value } in &start.attrs {
            check_name(name)?;
            self.scratch.push(' ');
            self.scratch.push_str(name);
            self.scratch.push_str("=\"");
            escape_into(&mut self.scratch, value, true);
            self.scratch.push('"');
        }
        self.scratch.push('>');
        self.open.push(start.name.to_string());
        Ok(())
    }

    fn render_end(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::invalid_name(name));
        }
        match self.open.last() {
            Some(open) if open == name => {}
            other => return Err(Error::unexpected_end(other.map(String::as_str), name)),
        }
        self.open.pop();
        self.scratch.push_str("</");
        self.scratch.push_str(name);
        self.scratch.push('>');
        Ok(())
    }
}

impl<W: Write> TokenWriter for XmlWriter<W> {
    fn write_token(&mut self, token: &Token<'_>) -> Result<()> {
        self.scratch.clear();
        if !self.started && self.options.declaration {
            self.scratch.push_str(crate::options::XML_HEADER);
        }

        match token {
            Token::Start(start) => self.render_start(start)?,
            Token::Text(text) => escape_into(&mut self.scratch, text, false),
            Token::End(end) => self.render_end(&end.name)?,
        }

        self.out.write_all(self.scratch.as_bytes())?;
        self.started = true;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        trace!(buffered = self.out.buffer().len(), "flushing xml writer");
        self.out.flush()?;
        Ok(())
    }
}

/// Whether `name` can stand as an element or attribute name.
fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

fn check_name(name: &str) -> Result<()> {
    if is_name(name) {
        Ok(())
    } else {
        Err(Error::invalid_name(name))
    }
}

#[inline]
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{09}' | '\u{0A}' | '\u{0D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Appends `s` to `out` with markup characters escaped. Newlines are escaped
/// only inside attribute values.
fn escape_into(out: &mut String, s: &str, escape_newline: bool) {
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\t' => out.push_str("&#x9;"),
            '\r' => out.push_str("&#xD;"),
            '\n' if escape_newline => out.push_str("&#xA;"),
            c if !is_xml_char(c) => out.push('\u{FFFD}'),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::element;

    fn render(tokens: &[Token<'_>]) -> Result<String> {
        let mut writer = XmlWriter::new(Vec::new());
        for token in tokens {
            writer.write_token(token)?;
        }
        let bytes = writer.into_inner()?;
        Ok(String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn test_escapes_text() {
        let mut tokens = vec![Token::start("Bio")];
        tokens.push(Token::text("<b>\"Tom\" & 'Jerry'</b>\t\r\n"));
        tokens.push(Token::end("Bio"));
        assert_eq!(
            render(&tokens).unwrap(),
            "<Bio>&lt;b&gt;&#34;Tom&#34; &amp; &#39;Jerry&#39;&lt;/b&gt;&#x9;&#xD;\n</Bio>"
        );
    }

    #[test]
    fn test_replaces_invalid_chars() {
        let tokens = element("Bio", "a\u{0}b");
        assert_eq!(render(&tokens).unwrap(), "<Bio>a\u{FFFD}b</Bio>");
    }

    #[test]
    fn test_attributes() {
        let start = StartElement::new("User").with_attr("note", "a\nb");
        let tokens = [Token::Start(start), Token::end("User")];
        assert_eq!(render(&tokens).unwrap(), "<User note=\"a&#xA;b\"></User>");
    }

    #[test]
    fn test_mismatched_end() {
        let tokens = [Token::start("User"), Token::end("Admin")];
        assert_eq!(
            render(&tokens).unwrap_err(),
            Error::unexpected_end(Some("User"), "Admin")
        );
    }

    #[test]
    fn test_end_without_start() {
        let tokens = [Token::end("User")];
        assert_eq!(
            render(&tokens).unwrap_err(),
            Error::unexpected_end(None, "User")
        );
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(
            render(&[Token::start("")]).unwrap_err(),
            Error::invalid_name("")
        );
        assert_eq!(
            render(&[Token::start("1st")]).unwrap_err(),
            Error::invalid_name("1st")
        );
        assert!(is_name("first_name"));
        assert!(is_name("x:LastName"));
    }

    #[test]
    fn test_unclosed_on_into_inner() {
        let mut writer = XmlWriter::new(Vec::new());
        writer.write_token(&Token::start("User")).unwrap();
        assert_eq!(writer.open_elements(), ["User".to_string()]);
        assert_eq!(writer.into_inner().unwrap_err(), Error::unclosed("User"));
    }

    #[test]
    fn test_declaration_written_once() {
        let options = XmlOptions::new().with_declaration(true);
        let mut writer = XmlWriter::with_options(Vec::new(), options);
        for token in element("Admin", "true") {
            writer.write_token(&token).unwrap();
        }
        let xml = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Admin>true</Admin>"
        );
    }

    #[test]
    fn test_token_log() {
        let mut log: Vec<Token<'static>> = Vec::new();
        for token in element("Admin", "false") {
            log.write_token(&token).unwrap();
        }
        log.flush().unwrap();
        assert_eq!(log.len(), 3);
    }
}
