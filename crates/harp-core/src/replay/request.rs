//! Rebuilt request value and its hand-off to an HTTP transport.

use http::header::{HeaderValue, COOKIE};
use http::HeaderMap;
use url::Url;

use super::cookie::{cookie_header, ReplayCookie};

/// Outbound request rebuilt from one HAR entry.
#[derive(Debug, Clone)]
pub struct ReplayRequest {
    /// Method as recorded; empty means `GET`.
    pub method: String,
    /// URL with the recorded query parameters merged in.
    pub url: Url,
    /// Headers that passed validation. Values of one name stay together in
    /// recorded order; names iterate in first-seen order.
    pub headers: HeaderMap,
    pub cookies: Vec<ReplayCookie>,
    pub body: Vec<u8>,
}

impl ReplayRequest {
    pub fn method(&self) -> &str {
        if self.method.is_empty() {
            "GET"
        } else {
            &self.method
        }
    }

    /// Value for the request `Cookie` header built from `cookies`.
    pub fn cookie_header(&self) -> Option<String> {
        cookie_header(&self.cookies)
    }

    /// Converts into an [`http::Request`] ready for a client.
    ///
    /// Cookies are folded into the `cookie` header, after any value that came
    /// through the header list. The URL fragment is not sent. Fails when the
    /// method or URI is not acceptable to `http`.
    pub fn into_http_request(self) -> Result<http::Request<Vec<u8>>, http::Error> {
        let cookies = self.cookie_header();
        let mut target = self.url.clone();
        target.set_fragment(None);
        let mut builder = http::Request::builder()
            .method(self.method())
            .uri(target.as_str());

        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers);
            if let Some(cookies) = cookies {
                let value = match headers.get(COOKIE) {
                    Some(existing) if !existing.is_empty() => {
                        let mut joined = existing.as_bytes().to_vec();
                        joined.extend_from_slice(b"; ");
                        joined.extend_from_slice(cookies.as_bytes());
                        joined
                    }
                    _ => cookies.into_bytes(),
                };
                headers.insert(COOKIE, HeaderValue::from_bytes(&value)?);
            }
        }

        builder.body(self.body)
    }
}
