//! Query string encoding.
//!
//! A query source is anything implementing [`QueryParams`]. Two ready-made
//! sources are provided: [`SimpleParams`] (one value per key) and
//! [`MultiParams`] (an ordered list of values per key). Both emit
//! `key=value` pairs with keys in ascending order, joined by `&`. Keys and
//! values are percent-encoded as RFC 3986 query components: only
//! alphanumerics and `-_.~` stay literal, and a space becomes `+`.

use std::collections::{BTreeMap, HashMap};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but the RFC 3986 unreserved characters.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Something that can render itself as a query string (without the leading `?`).
///
/// An empty return value means "no query"; the URL builder then omits the `?`.
pub trait QueryParams {
    fn encode(&self) -> String;
}

fn escape_into(out: &mut String, component: &str) {
    for (i, part) in component.split(' ').enumerate() {
        if i > 0 {
            out.push('+');
        }
        out.extend(utf8_percent_encode(part, QUERY_COMPONENT));
    }
}

/// Serializes pairs in the order given.
fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    for (key, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        escape_into(&mut out, key);
        out.push('=');
        escape_into(&mut out, value);
    }
    out
}

/// Query parameters with exactly one value per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleParams(BTreeMap<String, String>);

impl SimpleParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl QueryParams for SimpleParams {
    fn encode(&self) -> String {
        self.0.encode()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SimpleParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for SimpleParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Query parameters allowing several values per key.
///
/// Values keep their insertion order within a key; keys are still sorted on encode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiParams(BTreeMap<String, Vec<String>>);

impl MultiParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the list for `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(key, value);
        self
    }

    /// Replaces all values of `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

impl QueryParams for MultiParams {
    fn encode(&self) -> String {
        self.0.encode()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MultiParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.add(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for MultiParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl QueryParams for BTreeMap<String, String> {
    fn encode(&self) -> String {
        encode_pairs(self.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl QueryParams for BTreeMap<String, Vec<String>> {
    fn encode(&self) -> String {
        encode_pairs(
            self.iter()
                .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str()))),
        )
    }
}

impl QueryParams for HashMap<String, String> {
    fn encode(&self) -> String {
        let mut pairs: Vec<_> = self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        encode_pairs(pairs)
    }
}

impl QueryParams for HashMap<String, Vec<String>> {
    fn encode(&self) -> String {
        let mut keys: Vec<&String> = self.keys().collect();
        keys.sort();
        encode_pairs(
            keys.into_iter()
                .flat_map(|k| self[k].iter().map(move |v| (k.as_str(), v.as_str()))),
        )
    }
}
