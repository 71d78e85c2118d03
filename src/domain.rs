//! Hostname classification against a reference domain.
//!
//! All predicates compare the hostname only (no port) and are
//! case-sensitive. A URL without a host matches nothing.

use url::Url;

/// Split a `host[:port]` string into hostname and optional port.
/// IPv6 literals keep their brackets.
///
/// Returns `None` when a bracketed literal is followed by anything other
/// than `:port`.
pub(crate) fn split_host_port(host: &str) -> Option<(&str, Option<&str>)> {
    if host.starts_with('[') {
        let Some(bracket_end) = host.find(']') else {
            return Some((host, None));
        };
        let rest = &host[bracket_end + 1..];
        if rest.is_empty() {
            return Some((&host[..=bracket_end], None));
        }
        let port = rest.strip_prefix(':')?;
        return Some((&host[..=bracket_end], Some(port)));
    }

    match host.find(':') {
        Some(colon_pos) => Some((&host[..colon_pos], Some(&host[colon_pos + 1..]))),
        None => Some((host, None)),
    }
}

fn hostname_is_subdomain(hostname: &str, domain: &str) -> bool {
    hostname
        .strip_suffix(domain)
        .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Check if the hostname of `url` is exactly `domain`.
///
/// Given `http://www.example.com/`, only `"www.example.com"` matches.
pub fn is_domain(url: &Url, domain: &str) -> bool {
    url.host_str().is_some_and(|hostname| hostname == domain)
}

/// Check if the hostname of `url` ends with `"." + domain`.
///
/// Given `http://www.example.com/`, both `"example.com"` and `"com"` match,
/// but `"www.example.com"` itself and `"example"` do not.
pub fn is_subdomain_of(url: &Url, domain: &str) -> bool {
    url.host_str()
        .is_some_and(|hostname| hostname_is_subdomain(hostname, domain))
}

/// Check if `url` is `domain` or one of its subdomains.
pub fn is_domain_or_subdomain_of(url: &Url, domain: &str) -> bool {
    is_domain(url, domain) || is_subdomain_of(url, domain)
}
