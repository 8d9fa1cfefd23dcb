use serde::{Deserialize, Serialize};

/// Ordered list of sales owner names attached to one order.
///
/// Position is significant: index 0 is the primary owner, 1 the first
/// co-owner and so on. Entries are whitespace-trimmed but otherwise kept as
/// given, including empty names and repeated names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesOwners(Vec<String>);

impl SalesOwners {
    /// Split a comma-delimited owner cell.
    ///
    /// An empty cell yields one empty name, the same as splitting `""` on `,`.
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(',').map(|s| s.trim().to_string()).collect())
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(position, name)` pairs in list order.
    pub fn positioned(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().enumerate().map(|(i, s)| (i, s.as_str()))
    }

    /// The primary (position 0) owner, if any.
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }
}
