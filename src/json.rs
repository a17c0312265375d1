//! JSON form of [`User`].
//!
//! `User` implements [`Serialize`] by hand so that field names, order and
//! omission match the XML form's conventions for a JSON consumer:
//!
//! - `first_name` always present
//! - `LastName` skipped when empty
//! - `CreatedAt` rendered through [`MarshalText`]
//! - `Admin` as a JSON boolean
//! - `Bio` as `null` when absent
//!
//! ```rust
//! use xml_marshal::User;
//!
//! let json = serde_json::to_string(&User::default()).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"first_name":"","CreatedAt":"0001-01-01T00:00:00Z","Admin":false,"Bio":null}"#
//! );
//! ```

use crate::text::MarshalText;
use crate::User;
use serde::ser::{self, SerializeStruct};
use serde::{Serialize, Serializer};

impl Serialize for User {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let created_at = self
            .created_at
            .marshal_text()
            .map_err(<S::Error as ser::Error>::custom)?;

        let mut state = serializer.serialize_struct("User", 5)?;
        state.serialize_field("first_name", &self.first_name)?;
        if self.last_name.is_empty() {
            state.skip_field("LastName")?;
        } else {
            state.serialize_field("LastName", &self.last_name)?;
        }
        state.serialize_field("CreatedAt", &*created_at)?;
        state.serialize_field("Admin", &self.admin)?;
        state.serialize_field("Bio", &self.bio)?;
        state.end()
    }
}
