//! Wire shapes of the Content Store's REST responses.
//!
//! Collections come back as `{ data: [{ id, attributes }] }` and relations as
//! `{ data: null | {id, attributes} | [{id, attributes}] }`. Relations decode
//! into [`Relation`], unwrapped with [`Relation::into_entries`]. Top-level
//! responses go through [`Envelope`], which decodes entries one at a time so
//! a single broken record does not take the rest of the collection with it.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// One stored record: CMS id plus its attribute object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry<T> {
    pub id: u64,
    pub attributes: T,
}

/// A value the Content Store may send either bare or inside an array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// `{ data: ... }` wrapper used for top-level responses and populated relations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Relation<T> {
    pub data: Option<OneOrMany<Entry<T>>>,
}

/// Top-level response with its entries still undecoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    pub data: Option<OneOrMany<serde_json::Value>>,
}

impl Envelope {
    /// Decode every entry on its own. Entries that fail are reported next to
    /// the ones that decoded, in response order.
    pub fn decode_entries<T>(self) -> (Vec<Entry<T>>, Vec<serde_json::Error>)
    where
        T: DeserializeOwned,
    {
        let mut entries = Vec::new();
        let mut errors = Vec::new();
        for raw in self.data.map(OneOrMany::into_vec).unwrap_or_default() {
            match serde_json::from_value::<Entry<T>>(raw) {
                Ok(entry) => entries.push(entry),
                Err(e) => errors.push(e),
            }
        }
        (entries, errors)
    }
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

impl<T> Relation<T> {
    /// Every entry, whether the payload was null, one object or an array.
    pub fn into_entries(self) -> Vec<Entry<T>> {
        self.data.map(OneOrMany::into_vec).unwrap_or_default()
    }

    /// Unwrap and convert every entry into its normalized record.
    pub fn normalize<U>(self) -> Vec<U>
    where
        U: From<Entry<T>>,
    {
        self.into_entries().into_iter().map(U::from).collect()
    }
}

/// Normalize an optional relation field; a missing field behaves like `null`.
pub fn normalize_relation<T, U>(rel: Option<Relation<T>>) -> Vec<U>
where
    U: From<Entry<T>>,
{
    rel.map(Relation::normalize).unwrap_or_default()
}
