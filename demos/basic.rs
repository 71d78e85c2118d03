use httpurl::{Builder, ExpandMap};

fn main() {
    // Edit a parsed URL in place
    let mut url = httpurl::parse("http://example.com/foo/bar?a=1&b=2").expect("Failed to parse URL");
    httpurl::set_query_param(&mut url, "b", 3);
    httpurl::add_path_segment(&mut url, "../baz/meh");
    println!("URL: {url}"); // http://example.com/foo/bar/..%2Fbaz%2Fmeh?a=1&b=3

    // Domain checks
    let www = httpurl::must_parse("https://www.example.com/");
    println!("is_domain: {}", httpurl::is_domain(&www, "www.example.com")); // true
    println!("is_subdomain_of: {}", httpurl::is_subdomain_of(&www, "example.com")); // true

    // Expand a template
    let mut template = httpurl::must_parse("https://api.example.com/users/{id}/posts/{post}");
    let values = ExpandMap::new().with("id", 42).with("post", "hello world");
    httpurl::expand_path(&mut template, &values).expect("Failed to expand");
    println!("Expanded: {template}"); // https://api.example.com/users/42/posts/hello%20world

    // Build from scratch
    let built = Builder::new()
        .scheme("https")
        .host("example.com:8443")
        .add_path_segment("search")
        .add_query_param("q", "rust url")
        .build();
    match built {
        Ok(url) => println!("Built: {url}"), // https://example.com:8443/search?q=rust+url
        Err(err) => println!("Build failed: {err}"),
    }

    // Validation happens at build time
    let invalid = Builder::new().scheme("ftp").host("example.com").build();
    println!("Invalid: {invalid:?}");
}
