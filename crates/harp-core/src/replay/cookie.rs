//! Cookies attached to a rebuilt request.

use crate::har::HarCookie;

/// A recorded cookie carried over to the outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    /// Always `false`: captures do not record this attribute reliably.
    pub http_only: bool,
}

impl From<&HarCookie> for ReplayCookie {
    fn from(c: &HarCookie) -> Self {
        Self {
            name: c.name.clone(),
            value: c.value.clone(),
            domain: c.domain.clone(),
            http_only: false,
        }
    }
}

impl ReplayCookie {
    /// `name=value` as sent in a request `Cookie` header.
    pub fn to_pair(&self) -> String {
        format!(
            "{}={}",
            sanitize_name(&self.name),
            sanitize_value(&self.value)
        )
    }
}

/// Request `Cookie` header value for `cookies`, or `None` when there are none.
pub fn cookie_header(cookies: &[ReplayCookie]) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    Some(
        cookies
            .iter()
            .map(ReplayCookie::to_pair)
            .collect::<Vec<_>>()
            .join("; "),
    )
}

fn sanitize_name(name: &str) -> String {
    name.replace(&['\r', '\n'][..], "-")
}

/// cookie-octet from RFC 6265, plus space and comma which force quoting.
fn valid_value_byte(b: u8) -> bool {
    (0x20..0x7f).contains(&b) && b != b'"' && b != b';' && b != b'\\'
}

fn sanitize_value(value: &str) -> String {
    let v: String = value
        .chars()
        .filter(|c| c.is_ascii() && valid_value_byte(*c as u8))
        .collect();
    if v.contains(&[' ', ','][..]) {
        format!("\"{}\"", v)
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie(name: &str, value: &str) -> ReplayCookie {
        ReplayCookie {
            name: name.to_string(),
            value: value.to_string(),
            domain: "example.com".to_string(),
            http_only: false,
        }
    }

    #[test]
    fn from_har_cookie_clears_http_only() {
        let c = ReplayCookie::from(&HarCookie {
            name: "sid".to_string(),
            value: "abc".to_string(),
            domain: ".example.com".to_string(),
        });
        assert_eq!(c.domain, ".example.com");
        assert!(!c.http_only);
    }

    #[test]
    fn header_joins_pairs() {
        let cookies = [cookie("a", "1"), cookie("b", "2")];
        assert_eq!(cookie_header(&cookies).as_deref(), Some("a=1; b=2"));
        assert_eq!(cookie_header(&[]), None);
    }

    #[test]
    fn values_are_sanitized_and_quoted() {
        assert_eq!(cookie("a", "x;y\"z").to_pair(), "a=xyz");
        assert_eq!(cookie("a", "two words").to_pair(), "a=\"two words\"");
        assert_eq!(cookie("a", "1,2").to_pair(), "a=\"1,2\"");
        assert_eq!(cookie("a", "caf\u{e9}").to_pair(), "a=caf");
        assert_eq!(cookie("bad\r\nname", "v").to_pair(), "bad--name=v");
    }
}
