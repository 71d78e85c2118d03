//! `{name}` placeholder expansion for paths.

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

use percent_encoding::utf8_percent_encode;

use crate::encode::{SEGMENT_SET, decode_segment, is_dot_segment};
use crate::error::{Error, Result};
use crate::log::debug;
use crate::path;

/// Source of values for template placeholders
pub trait TemplateValues {
    /// Stringified value bound to `name`, if any
    fn lookup(&self, name: &str) -> Option<String>;
}

impl<T: TemplateValues + ?Sized> TemplateValues for &T {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

impl<K, V, S> TemplateValues for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: Display,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

impl<K, V> TemplateValues for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Display,
{
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

impl<V: Display> TemplateValues for [(&str, V)] {
    fn lookup(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

impl<V: Display, const N: usize> TemplateValues for [(&str, V); N] {
    fn lookup(&self, name: &str) -> Option<String> {
        self.as_slice().lookup(name)
    }
}

/// Owned placeholder map with values stringified on insertion.
///
/// Lets values of different types share one map:
///
/// ```
/// use httpurl::ExpandMap;
///
/// let values = ExpandMap::new().with("a", "foo").with("b", 123);
/// assert_eq!(values.get("b"), Some("123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandMap {
    values: HashMap<String, String>,
}

impl ExpandMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) -> &mut Self {
        self.values.insert(name.into(), value.to_string());
        self
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TemplateValues for ExpandMap {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

impl<N: Into<String>, V: Display> FromIterator<(N, V)> for ExpandMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Name of the placeholder a raw path segment holds, if it is one.
///
/// URL serialization escapes braces, so the segment is decoded first.
pub fn placeholder(segment: &str) -> Option<Cow<'_, str>> {
    match decode_segment(segment) {
        Cow::Borrowed(decoded) => strip_braces(decoded).map(Cow::Borrowed),
        Cow::Owned(decoded) => strip_braces(&decoded).map(|name| Cow::Owned(name.to_string())),
    }
}

fn strip_braces(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

/// Expand every `{name}` segment of `path`.
///
/// All placeholders are resolved before the new path is assembled, so an
/// error means nothing was written. Bound values become single literal
/// segments; other segments are copied verbatim.
pub fn expand(path: &str, values: &(impl TemplateValues + ?Sized)) -> Result<String> {
    let mut resolved = Vec::new();
    for segment in path::segments(path) {
        let Some(name) = placeholder(segment) else {
            resolved.push(Cow::Borrowed(segment));
            continue;
        };
        let Some(value) = values.lookup(&name) else {
            debug!("no template value for {name:?} in {path:?}");
            return Err(Error::MissingTemplateValue {
                name: name.into_owned(),
            });
        };
        if is_dot_segment(&value) {
            debug!("template value {value:?} for {name:?} is not a segment");
            return Err(Error::InvalidTemplateValue {
                name: name.into_owned(),
                value,
            });
        }
        resolved.push(Cow::Owned(
            utf8_percent_encode(&value, SEGMENT_SET).to_string(),
        ));
    }
    Ok(path::join(resolved.iter().map(|segment| &**segment)))
}
