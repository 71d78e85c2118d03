use url::Url;

use crate::error::Result;

/// Parse an absolute URI.
///
/// # Examples
///
/// ```
/// assert!(httpurl::parse("http://example.com/foo?a=1").is_ok());
/// assert!(httpurl::parse("not a url").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`](crate::Error::Parse) if `input` is not a valid
/// absolute URI.
pub fn parse(input: &str) -> Result<Url> {
    Ok(Url::parse(input)?)
}

/// Parse a URL literal known to be valid.
///
/// Meant for constants; untrusted input belongs in [`parse`].
///
/// # Panics
///
/// Panics if `input` is not a valid absolute URI.
#[allow(clippy::panic)]
pub fn must_parse(input: &str) -> Url {
    match Url::parse(input) {
        Ok(url) => url,
        Err(err) => panic!("invalid URL literal {input:?}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_parse() {
        let url = must_parse("http://example.com/foo/bar?a=1&b=2");
        assert_eq!(url.as_str(), "http://example.com/foo/bar?a=1&b=2");
    }

    #[test]
    #[should_panic(expected = "invalid URL literal")]
    fn test_must_parse_panics() {
        let _ = must_parse("not a url");
    }

    #[test]
    fn test_parse_rejects_relative() {
        assert_eq!(
            parse("/foo/bar"),
            Err(crate::Error::Parse(url::ParseError::RelativeUrlWithoutBase))
        );
    }
}
