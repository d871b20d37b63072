//! `application/x-www-form-urlencoded` encoding shared by bodies and queries.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

use crate::har::HarNameValue;

/// Everything but ASCII alphanumerics and `-_.~` is escaped.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Name to values, iterated in ascending name order.
pub(crate) type FormValues = BTreeMap<String, Vec<String>>;

/// Collects pairs, keeping every value of a repeated name in recorded order.
pub(crate) fn collect_pairs<'a, I>(pairs: I) -> FormValues
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut values = FormValues::new();
    for (name, value) in pairs {
        values
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }
    values
}

/// Escapes one name or value; space becomes `+`.
fn escape(s: &str) -> String {
    // A literal `%` is escaped to `%25`, so every `%20` here is a space.
    utf8_percent_encode(s, QUERY_ESCAPE)
        .to_string()
        .replace("%20", "+")
}

/// Encodes `name=value` pairs joined by `&`, sorted by name.
pub(crate) fn encode(values: &FormValues) -> String {
    let mut out = String::new();
    for (name, vs) in values {
        let name = escape(name);
        for v in vs {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&name);
            out.push('=');
            out.push_str(&escape(v));
        }
    }
    out
}

/// Form body for the given params.
pub(crate) fn encode_params(params: &[HarNameValue]) -> String {
    encode(&collect_pairs(
        params.iter().map(|p| (p.name.as_str(), p.value.as_str())),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_sorts_names_and_keeps_value_order() {
        let params = [
            HarNameValue::new("b", "2"),
            HarNameValue::new("a", "1"),
            HarNameValue::new("b", "3"),
        ];
        assert_eq!(encode_params(&params), "a=1&b=2&b=3");
    }

    #[test]
    fn encode_percent_encodes() {
        let params = [
            HarNameValue::new("q", "hello world"),
            HarNameValue::new("x&y", "a=b/c"),
        ];
        assert_eq!(encode_params(&params), "q=hello+world&x%26y=a%3Db%2Fc");
    }

    #[test]
    fn encode_escapes_like_a_query_component() {
        let params = [
            HarNameValue::new("t", "a~b*c"),
            HarNameValue::new("u", "-_.!'()"),
            HarNameValue::new("v", "100% caf\u{e9}+"),
        ];
        assert_eq!(
            encode_params(&params),
            "t=a~b%2Ac&u=-_.%21%27%28%29&v=100%25+caf%C3%A9%2B"
        );
    }

    #[test]
    fn encode_empty_is_empty() {
        assert_eq!(encode_params(&[]), "");
    }
}
