//! The `User` record and its XML form.
//!
//! Fields are emitted in this order, each under its own policy:
//!
//! | Tag | Field | Rule |
//! |-----|-------|------|
//! | `first_name` | [`User::first_name`] | always, even when empty |
//! | `LastName` | [`User::last_name`] | only when non-empty |
//! | `Admin` | [`User::admin`] | always, `true` or `false` |
//! | `Bio` | [`User::bio`] | always, empty element when `None` |
//! | `CreatedAt` | [`User::created_at`] | always, via [`MarshalText`] |
//!
//! ```rust
//! use xml_marshal::{to_string, User};
//!
//! let user = User::new("Mary", "Jane");
//! assert_eq!(
//!     to_string(&user).unwrap(),
//!     "<User><first_name>Mary</first_name><LastName>Jane</LastName>\
//!      <Admin>false</Admin><Bio></Bio>\
//!      <CreatedAt>0001-01-01T00:00:00Z</CreatedAt></User>"
//! );
//! ```

use crate::encoder::{encode_fields, MarshalXml};
use crate::rule::{EmissionRule, Field};
use crate::text::{zero_time, MarshalText};
use crate::token::StartElement;
use crate::{Result, TokenWriter};
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// A user in the system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub admin: bool,
    pub bio: Option<String>,
}

impl Default for User {
    fn default() -> Self {
        User {
            first_name: String::new(),
            last_name: String::new(),
            created_at: zero_time(),
            admin: false,
            bio: None,
        }
    }
}

impl User {
    /// Creates a non-admin user with no bio, created at the zero time.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        User {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    #[must_use]
    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

fn first_name(user: &User) -> Result<Option<Cow<'_, str>>> {
    user.first_name.marshal_text().map(Some)
}

fn last_name(user: &User) -> Result<Option<Cow<'_, str>>> {
    user.last_name.marshal_text().map(Some)
}

fn admin(user: &User) -> Result<Option<Cow<'_, str>>> {
    user.admin.marshal_text().map(Some)
}

fn bio(user: &User) -> Result<Option<Cow<'_, str>>> {
    user.bio.as_deref().map(str::marshal_text).transpose()
}

fn created_at(user: &User) -> Result<Option<Cow<'_, str>>> {
    user.created_at.marshal_text().map(Some)
}

/// Output order of a [`User`]. Downstream consumers rely on it.
pub const USER_FIELDS: &[Field<User>] = &[
    Field::new("first_name", EmissionRule::Always, first_name),
    Field::new("LastName", EmissionRule::IfNonEmpty, last_name),
    Field::new("Admin", EmissionRule::Always, admin),
    Field::new("Bio", EmissionRule::EmptyWhenAbsent, bio),
    Field::new("CreatedAt", EmissionRule::Always, created_at),
];

impl MarshalXml for User {
    const ELEMENT: &'static str = "User";

    fn marshal_xml<W>(&self, writer: &mut W, start: StartElement<'_>) -> Result<()>
    where
        W: TokenWriter + ?Sized,
    {
        encode_fields(writer, self, USER_FIELDS, start)
    }
}
