use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Boolean attributes of a book, kept in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Details(Vec<(String, bool)>);

impl Details {
    #[must_use]
    pub fn new(pairs: Vec<(String, bool)>) -> Self {
        Self(pairs)
    }

    /// Value of an attribute, `None` when the book does not carry it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    /// True only when the attribute is present and set.
    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        self.get(name).unwrap_or(false)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, bool); N]> for Details {
    fn from(pairs: [(&str, bool); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }
}

struct DetailsVisitor;

impl<'de> Visitor<'de> for DetailsVisitor {
    type Value = Details;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of attribute names to booleans")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs: Vec<(String, bool)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, bool>()? {
            // Later keys win, matching object-literal semantics
            if let Some(existing) = pairs.iter_mut().find(|(k, _)| *k == key) {
                existing.1 = value;
            } else {
                pairs.push((key, value));
            }
        }
        Ok(Details(pairs))
    }
}

impl<'de> Deserialize<'de> for Details {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DetailsVisitor)
    }
}

impl Serialize for Details {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

/// One record of the catalog as it arrives from the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub details: Details,
}

/// Top-level shape of a data file: `{ "books": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    #[serde(default)]
    pub books: Vec<CatalogEntry>,
}

impl DataSource {
    /// Attribute names across all books, in first-seen order.
    #[must_use]
    pub fn detail_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in &self.books {
            for name in entry.details.names() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }
}
