use url::Url;
use url::form_urlencoded;

/// Ordered multimap of query parameters.
///
/// Keys keep their first-insertion order and the values under one key keep
/// their insertion order, so `a=1&b=2` plus `b=3` encodes as `a=1&b=2&b=3`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut params = Self::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            params.append(&key, value.into_owned());
        }
        params
    }

    /// Decode the query of `url`
    pub fn from_url(url: &Url) -> Self {
        url.query().map(Self::parse).unwrap_or_default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Append `value` to the values of `key`
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.position(key) {
            Some(i) => self.entries[i].1.push(value),
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    /// Set `key` to a single value, discarding its previous values.
    /// A new key goes to the end; an existing key keeps its position.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.position(key) {
            Some(i) => self.entries[i].1 = vec![value],
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    /// Remove every value of `key`, returning them
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        let i = self.position(key)?;
        Some(self.entries.remove(i).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(String::as_str)
    }

    /// Get all values for a key, in insertion order.
    pub fn get_all(&self, key: &str) -> &[String] {
        match self.position(key) {
            Some(i) => &self.entries[i].1,
            None => &[],
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Number of key/value pairs
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all key/value pairs in encoding order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Encode as `application/x-www-form-urlencoded`, or `None` if empty
    pub fn encode(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(self.iter());
        Some(serializer.finish())
    }

    /// Replace the query of `url`, dropping the `?` entirely when empty
    pub fn apply_to(&self, url: &mut Url) {
        url.set_query(self.encode().as_deref());
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.append(key.as_ref(), value);
        }
        params
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.encode().as_deref().unwrap_or_default())
    }
}
