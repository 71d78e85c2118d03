//! Safe construction and mutation of absolute HTTP(S) URLs.
//!
//! Parsing and serialization are handled by [`url::Url`]; this crate adds
//! the edits on top of it: path segments that stay literal whatever they
//! contain, multivalued query parameters, `{name}` path templates, domain
//! checks, and a [`Builder`] that validates only when asked to.
//!
//! ```
//! let mut url = httpurl::parse("http://example.com/foo/bar?a=1&b=2").unwrap();
//! httpurl::set_query_param(&mut url, "b", 3);
//! assert_eq!(url.as_str(), "http://example.com/foo/bar?a=1&b=3");
//! ```

// Logging macros, no-ops without the `log` feature
mod log;

// Internal modules (not public API)
mod encode;
mod path;
mod scheme;

mod builder;
mod domain;
mod error;
mod mutate;
mod parse;
mod query;
mod template;

// Public API
pub use builder::Builder;
pub use domain::{is_domain, is_domain_or_subdomain_of, is_subdomain_of};
pub use error::{Error, Result};
pub use mutate::{
    add_path_segment, add_query_param, expand_path, remove_path_segment, remove_query_param,
    set_query_param,
};
pub use parse::{must_parse, parse};
pub use query::QueryParams;
pub use scheme::HttpScheme;
pub use template::{ExpandMap, TemplateValues};
pub use url::Url;
