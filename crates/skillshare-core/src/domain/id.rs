//! Entity Identifiers
//!
//! The backend hands out opaque ids. Some deployments send them as JSON
//! strings, others as integers; both decode to the same textual id.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
            }
        }
    };
}

entity_id!(
    /// Identifier of a feed post
    PostId
);

entity_id!(
    /// Identifier of a comment, unique within its post
    CommentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_string_and_number() {
        let from_text: PostId = serde_json::from_str(r#""665f1c""#).unwrap();
        let from_number: PostId = serde_json::from_str("42").unwrap();
        assert_eq!(from_text.as_str(), "665f1c");
        assert_eq!(from_number, PostId::new("42"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CommentId::new("c-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""c-1""#);
    }
}
