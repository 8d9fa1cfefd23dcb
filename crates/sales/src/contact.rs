//! Contact data attached to an order.
//!
//! Upstream writes the `contact_data` cell either as one JSON object or as a
//! list of objects. The shape is resolved once, at load time, into
//! [`ContactData`]; consumers only ever ask for the primary contact.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// One contact person.
///
/// Each field decodes on its own: a field of the wrong JSON type reads as
/// absent and does not discard its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient")]
    pub contact_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_surname: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
    /// Postal code.
    #[serde(default, deserialize_with = "lenient")]
    pub cp: Option<PostalCode>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Postal codes arrive as text (`"10001"`) or as bare numbers (`2000`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostalCode {
    Text(String),
    Number(serde_json::Number),
}

impl core::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PostalCode::Text(s) => f.write_str(s),
            PostalCode::Number(n) => core::fmt::Display::fmt(n, f),
        }
    }
}

/// The two shapes a `contact_data` cell can take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactData {
    List(Vec<Contact>),
    Single(Contact),
}

impl ContactData {
    /// Parse a raw `contact_data` cell.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The contact the order is attributed to: the object itself, or the
    /// first element of a list. An empty list has none.
    pub fn primary(&self) -> Option<&Contact> {
        match self {
            ContactData::Single(c) => Some(c),
            ContactData::List(list) => list.first(),
        }
    }
}
