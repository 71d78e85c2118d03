//! Segment operations on an absolute, already-encoded path string.
//!
//! The root path `/` has no segments. A trailing `/` yields a final empty
//! segment, so `/foo/` has two: `foo` and an empty one.

use crate::encode::encode_segment;
use crate::log::trace;

/// Strip the leading separator; `None` for the root or an empty path
fn segments_str(path: &str) -> Option<&str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

/// Iterate over the raw (still encoded) segments of `path`
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    segments_str(path)
        .into_iter()
        .flat_map(|rest| rest.split('/'))
}

/// Number of segments in `path`
pub fn segment_count(path: &str) -> usize {
    segments_str(path).map_or(0, |rest| {
        memchr::memchr_iter(b'/', rest.as_bytes()).count() + 1
    })
}

/// Join raw segments back into an absolute path
pub fn join<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

/// Append `segment` as one literal segment.
///
/// A trailing separator is reused, so `/` becomes `/foo` rather than `//foo`.
/// Returns `false` and leaves `path` untouched when `segment` is empty or a
/// dot segment.
pub fn push_segment(path: &mut String, segment: &str) -> bool {
    let Some(encoded) = encode_segment(segment) else {
        trace!("ignoring path segment {segment:?}");
        return false;
    };
    if !path.ends_with('/') {
        path.push('/');
    }
    path.push_str(&encoded);
    true
}

/// Remove the segment at `index`, counting from 0.
///
/// Out of range indices leave `path` untouched and return `false`.
pub fn remove_segment(path: &mut String, index: usize) -> bool {
    if index >= segment_count(path.as_str()) {
        return false;
    }
    let joined = join(
        segments(path.as_str())
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, segment)| segment),
    );
    *path = joined;
    true
}
