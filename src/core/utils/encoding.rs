use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in query components.
///
/// https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set
/// minus the RFC 3986 unreserved marks.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `percent_encoding` crate recommends you to create your own set for encoding.
/// To be consistent in the whole codebase - we created a function that can be used
/// for encoding related stuff.
pub fn url_encode(data: &str) -> String {
    utf8_percent_encode(data, QUERY_COMPONENT).to_string()
}

/// Render query parameters as `key=value` pairs joined with `&`.
///
/// Pairs are sorted by key so the same set always renders the same way.
pub fn encode_query(query_parameters: &std::collections::HashMap<String, String>) -> String {
    let mut pairs = query_parameters
        .iter()
        .map(|(key, value)| format!("{}={}", url_encode(key), url_encode(value)))
        .collect::<Vec<String>>();
    pairs.sort();
    pairs.join("&")
}
