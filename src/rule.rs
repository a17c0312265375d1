//! Per-field emission policies.
//!
//! A record type describes its output as a table of [`Field`]s. Each entry
//! names the tag, picks an [`EmissionRule`] and supplies a function that reads
//! the field's content from the record. The encoder walks the table in order,
//! so the table *is* the output contract: reordering entries reorders the
//! document.
//!
//! | Rule | Content present | Content absent |
//! |------|-----------------|----------------|
//! | [`Always`](EmissionRule::Always) | start, text, end | start, empty text, end |
//! | [`IfNonEmpty`](EmissionRule::IfNonEmpty) | start, text, end (omitted when the text is empty) | nothing |
//! | [`EmptyWhenAbsent`](EmissionRule::EmptyWhenAbsent) | start, text, end | start, end |

use crate::Result;
use std::borrow::Cow;

/// Whether and how a field produces tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmissionRule {
    /// Always emitted, with its text even when that text is empty.
    Always,
    /// Emitted only when the text is non-empty. Otherwise no tokens at all.
    IfNonEmpty,
    /// Nullable field: an empty element stands in for a missing value.
    EmptyWhenAbsent,
}

/// What a field contributes to the output once its rule has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Emission<'a> {
    Omitted,
    Empty,
    Text(Cow<'a, str>),
}

impl EmissionRule {
    /// Applies the rule to a field's content. `None` means the value is absent.
    #[must_use]
    pub fn apply(self, content: Option<Cow<'_, str>>) -> Emission<'_> {
        match (self, content) {
            (EmissionRule::Always, Some(text)) => Emission::Text(text),
            (EmissionRule::Always, None) => Emission::Text(Cow::Borrowed("")),
            (EmissionRule::IfNonEmpty, Some(text)) if !text.is_empty() => Emission::Text(text),
            (EmissionRule::IfNonEmpty, _) => Emission::Omitted,
            (EmissionRule::EmptyWhenAbsent, Some(text)) => Emission::Text(text),
            (EmissionRule::EmptyWhenAbsent, None) => Emission::Empty,
        }
    }
}

/// Reads a field's content from a record. `Ok(None)` marks an absent value;
/// an error aborts the encode.
pub type ContentFn<R> = for<'a> fn(&'a R) -> Result<Option<Cow<'a, str>>>;

/// One row of a record's field table.
pub struct Field<R> {
    pub tag: &'static str,
    pub rule: EmissionRule,
    pub content: ContentFn<R>,
}

impl<R> Field<R> {
    pub const fn new(tag: &'static str, rule: EmissionRule, content: ContentFn<R>) -> Self {
        Field { tag, rule, content }
    }

    /// Reads the field from `record` and applies the rule.
    pub fn emission<'a>(&self, record: &'a R) -> Result<Emission<'a>> {
        Ok(self.rule.apply((self.content)(record)?))
    }
}

// Manual impls: `R` itself need not be `Clone`/`Debug`.
impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

impl<R> std::fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("tag", &self.tag)
            .field("rule", &self.rule)
            .finish()
    }
}
