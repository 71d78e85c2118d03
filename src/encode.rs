use std::borrow::Cow;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

// Encode sets follow the WHATWG URL spec
// https://url.spec.whatwg.org/#percent-encoded-bytes

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
const FRAGMENT_SET: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// Path percent-encode set
/// Fragment + #, ?, {, }
pub const PATH_SET: &AsciiSet = &FRAGMENT_SET.add(b'#').add(b'?').add(b'{').add(b'}');

/// Path segment set for literal data
/// Path + /, \ (a separator in special schemes), % and ;
///
/// `%` is escaped so a decoded segment equals its input byte for byte.
pub const SEGMENT_SET: &AsciiSet = &PATH_SET.add(b'/').add(b'\\').add(b'%').add(b';');

/// Check if a segment is `.` or `..`
///
/// URL parsers resolve these (and their `%2e` spellings) while serializing,
/// so they can never survive as literal data.
pub fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Percent-encode `segment` as a single opaque path segment.
///
/// Returns `None` for segments that cannot be carried literally: the empty
/// string and the dot segments.
pub fn encode_segment(segment: &str) -> Option<Cow<'_, str>> {
    if segment.is_empty() || is_dot_segment(segment) {
        return None;
    }
    Some(utf8_percent_encode(segment, SEGMENT_SET).into())
}

/// Decode a percent-encoded segment, replacing invalid UTF-8 lossily
pub fn decode_segment(segment: &str) -> Cow<'_, str> {
    percent_decode_str(segment).decode_utf8_lossy()
}
