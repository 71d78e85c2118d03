//! In-place edits of a [`Url`].
//!
//! Every function takes the URL exclusively for the duration of the call.
//! Segment and parameter text is always escaped as data, so no input can
//! change the scheme, the host, or unrelated parts of the path and query.

use std::fmt::Display;

use url::Url;

use crate::error::Result;
use crate::path;
use crate::query::QueryParams;
use crate::template::{self, TemplateValues};

/// Append `value` to the values of query parameter `key`.
///
/// `http://example.com/?a=1&b=2` plus `("b", 3)` gives `?a=1&b=2&b=3`.
pub fn add_query_param(url: &mut Url, key: &str, value: impl Display) {
    let mut params = QueryParams::from_url(url);
    params.append(key, value.to_string());
    params.apply_to(url);
}

/// Replace every value of query parameter `key` with `value`.
///
/// `http://example.com/?a=1&b=2` plus `("b", 3)` gives `?a=1&b=3`.
pub fn set_query_param(url: &mut Url, key: &str, value: impl Display) {
    let mut params = QueryParams::from_url(url);
    params.set(key, value.to_string());
    params.apply_to(url);
}

/// Drop every value of query parameter `key`.
/// The `?` goes away with the last parameter.
pub fn remove_query_param(url: &mut Url, key: &str) {
    let mut params = QueryParams::from_url(url);
    if params.remove(key).is_some() {
        params.apply_to(url);
    }
}

/// Append one literal path segment.
///
/// Safe with externally controlled data: `/`, `\`, `%` and friends are
/// percent-encoded, so `"../baz/meh"` becomes the single segment
/// `..%2Fbaz%2Fmeh`. An empty segment is ignored.
///
/// A segment that is exactly `.` or `..` is also ignored and the URL is left
/// unchanged: URL serialization resolves dot segments, so no escaping can
/// carry them. Any other text containing `..` or `/` adds exactly one segment.
pub fn add_path_segment(url: &mut Url, segment: &str) {
    let mut new_path = url.path().to_string();
    if path::push_segment(&mut new_path, segment) {
        url.set_path(&new_path);
    }
}

/// Remove the path segment at `index`, counting from 0.
///
/// `http://example.com/foo/bar/xyz` with index 1 gives
/// `http://example.com/foo/xyz`. Out of range indices are ignored.
pub fn remove_path_segment(url: &mut Url, index: usize) {
    let mut new_path = url.path().to_string();
    if path::remove_segment(&mut new_path, index) {
        url.set_path(&new_path);
    }
}

/// Replace `{name}` path segments with values from `values`.
///
/// `http://example.com/{a}/xyz/{b}` with `a = "foo"` and `b = 123` gives
/// `http://example.com/foo/xyz/123`.
///
/// # Errors
///
/// Fails with [`Error::MissingTemplateValue`](crate::Error::MissingTemplateValue)
/// when a placeholder has no value, or
/// [`Error::InvalidTemplateValue`](crate::Error::InvalidTemplateValue) when a
/// value is `.` or `..`. `url` is left untouched on error.
pub fn expand_path(url: &mut Url, values: &(impl TemplateValues + ?Sized)) -> Result<()> {
    let new_path = template::expand(url.path(), values)?;
    url.set_path(&new_path);
    Ok(())
}
