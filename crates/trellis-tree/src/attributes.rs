use indexmap::IndexMap;
use thisisplural::Plural;

/// Insertion-ordered attribute map of a node.
///
/// Keys keep the order in which they were inserted, so serialization is
/// deterministic and mirrors the call site.
#[derive(Debug, Clone, Plural)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref, new)]
pub struct Attributes(IndexMap<String, String>);

impl Eq for Attributes {}
impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Attributes {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts a key/value pair, returning the previous value for the key.
    /// Re-inserting an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Ordered removal, shifting later attributes down.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Builds an [`Attributes`] map in insertion order.
///
/// ```
/// use trellis_tree::attrs;
///
/// let attrs = attrs! { "href" => "https://example.com", "rel" => "nofollow" };
/// assert_eq!(attrs.get("href"), Some("https://example.com"));
/// ```
#[macro_export]
macro_rules! attrs {
    () => { $crate::Attributes::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attributes = $crate::Attributes::new();
        $(attributes.insert($key, $value);)+
        attributes
    }};
}
