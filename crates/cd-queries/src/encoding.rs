//! Value encoding
//!
//! Two distinct transformations are applied to user values before they reach
//! the wire: percent-encoding (URI component rules) for everything stored in
//! `fq`/`sort`, and backslash escaping of Solr query syntax for free text.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is by URI component encoding
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Characters with special meaning in Solr query syntax
const RESERVED: &[char] = &[
    '!', '*', '+', '-', '&', '|', '(', ')', '[', ']', '{', '}', '^', '"', '~', '?', ':', '/',
];

/// Percent-encode a value with URI component rules (spaces become `%20`)
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Prefix every Solr-reserved character with a backslash
///
/// ```
/// use cd_queries::encoding::escape_value;
///
/// assert_eq!(escape_value("(1+1):2"), r"\(1\+1\)\:2");
/// assert_eq!(escape_value(""), "");
/// ```
pub fn escape_value(source: &str) -> String {
    let mut escaped = String::with_capacity(source.len() * 2);
    for ch in source.chars() {
        if RESERVED.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
