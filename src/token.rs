//! Markup tokens.
//!
//! A document is a flat stream of [`Token`]s: start tags, character data and
//! end tags. Start and end tags must nest strictly; every [`StartElement`] is
//! closed by exactly one [`EndElement`] of the same name.
//!
//! Tokens borrow their text where they can, so building them for a record
//! does not copy field contents. Use [`Token::into_owned`] to keep one past the
//! lifetime of the record it came from.
//!
//! ## Examples
//!
//! ```rust
//! use xml_marshal::token::{element, StartElement, Token};
//!
//! let start = StartElement::new("User");
//! let end = start.end();
//! assert_eq!(end.name, "User");
//!
//! let [open, text, close] = element("Admin", "false");
//! assert_eq!(open, Token::start("Admin"));
//! assert_eq!(text, Token::text("false"));
//! assert_eq!(close, Token::end("Admin"));
//! ```

use std::borrow::Cow;

/// An attribute on a start tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attr<'a> {
    pub name: Cow<'a, str>,
    pub value: Cow<'a, str>,
}

impl<'a> Attr<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        Attr {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn into_owned(self) -> Attr<'static> {
        Attr {
            name: Cow::Owned(self.name.into_owned()),
            value: Cow::Owned(self.value.into_owned()),
        }
    }
}

/// An opening tag, with its attributes in output order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartElement<'a> {
    pub name: Cow<'a, str>,
    pub attrs: Vec<Attr<'a>>,
}

impl<'a> StartElement<'a> {
    /// Creates a start tag without attributes.
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        StartElement {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    /// Appends an attribute.
    #[must_use]
    pub fn with_attr(
        mut self,
        name: impl Into<Cow<'a, str>>,
        value: impl Into<Cow<'a, str>>,
    ) -> Self {
        self.attrs.push(Attr::new(name, value));
        self
    }

    /// The end tag that closes this element.
    #[must_use]
    pub fn end(&self) -> EndElement<'a> {
        EndElement {
            name: self.name.clone(),
        }
    }

    pub fn into_owned(self) -> StartElement<'static> {
        StartElement {
            name: Cow::Owned(self.name.into_owned()),
            attrs: self.attrs.into_iter().map(Attr::into_owned).collect(),
        }
    }
}

/// A closing tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndElement<'a> {
    pub name: Cow<'a, str>,
}

impl<'a> EndElement<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        EndElement { name: name.into() }
    }
}

/// The atomic unit of output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Start(StartElement<'a>),
    Text(Cow<'a, str>),
    End(EndElement<'a>),
}

impl<'a> Token<'a> {
    /// Shorthand for a start token without attributes.
    pub fn start(name: impl Into<Cow<'a, str>>) -> Self {
        Token::Start(StartElement::new(name))
    }

    pub fn text(content: impl Into<Cow<'a, str>>) -> Self {
        Token::Text(content.into())
    }

    pub fn end(name: impl Into<Cow<'a, str>>) -> Self {
        Token::End(EndElement::new(name))
    }

    /// The element name of a start or end token.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Start(start) => Some(&start.name),
            Token::End(end) => Some(&end.name),
            Token::Text(_) => None,
        }
    }

    pub fn into_owned(self) -> Token<'static> {
        match self {
            Token::Start(start) => Token::Start(start.into_owned()),
            Token::Text(text) => Token::Text(Cow::Owned(text.into_owned())),
            Token::End(end) => Token::End(EndElement::new(end.name.into_owned())),
        }
    }
}

/// Builds the three tokens of a text-only element: start, content, end.
///
/// The content token is produced even when `content` is empty.
pub fn element<'a>(
    name: impl Into<Cow<'a, str>>,
    content: impl Into<Cow<'a, str>>,
) -> [Token<'a>; 3] {
    let start = StartElement::new(name);
    let end = start.end();
    [Token::Start(start), Token::Text(content.into()), Token::End(end)]
}

/// Builds an element with no content token at all.
pub fn empty_element<'a>(name: impl Into<Cow<'a, str>>) -> [Token<'a>; 2] {
    let start = StartElement::new(name);
    let end = start.end();
    [Token::Start(start), Token::End(end)]
}
