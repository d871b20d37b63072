//! HAR entry to [`ReplayRequest`].

use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use url::Url;

use crate::error::{UrlError, UrlErrorKind};
use crate::har::{HarEntry, HarNameValue, HarPostData};

use super::cookie::ReplayCookie;
use super::form;
use super::request::ReplayRequest;

/// Rebuilds the request recorded in `entry`.
///
/// Only an unparsable URL fails; invalid headers are dropped and a body with
/// both text and form params uses the params. With `ignore_har_cookies` no
/// recorded cookie is attached. The entry is not modified.
pub fn entry_to_request(
    entry: &HarEntry,
    ignore_har_cookies: bool,
) -> Result<ReplayRequest, UrlError> {
    let request = &entry.request;
    let body = resolve_body(&request.post_data);
    let url = resolve_url(&request.url, &request.query_string)?;
    let headers = select_headers(&request.headers);
    let cookies = if ignore_har_cookies {
        Vec::new()
    } else {
        request.cookies.iter().map(ReplayCookie::from).collect()
    };

    Ok(ReplayRequest {
        method: request.method.clone(),
        url,
        headers,
        cookies,
        body: body.into_bytes(),
    })
}

/// Form params when there are any, else the raw text.
fn resolve_body(post_data: &HarPostData) -> String {
    if post_data.params.is_empty() {
        post_data.text.clone()
    } else {
        form::encode_params(&post_data.params)
    }
}

/// Parses `raw` and sets each recorded query param over the URL's own query.
///
/// A URL holding an ASCII control byte anywhere is rejected before parsing;
/// the WHATWG parser would otherwise strip tabs and newlines or escape the
/// rest. The query is re-encoded from a name-sorted map, so a repeated
/// recorded name keeps only its last value and the original parameter order
/// is lost.
fn resolve_url(raw: &str, query: &[HarNameValue]) -> Result<Url, UrlError> {
    let url_error = |source: UrlErrorKind| UrlError {
        url: raw.to_string(),
        source,
    };
    if let Some(b) = raw.bytes().find(|b| b.is_ascii_control()) {
        return Err(url_error(UrlErrorKind::ControlCharacter(b)));
    }
    let mut url = Url::parse(raw).map_err(|e| url_error(e.into()))?;

    if !query.is_empty() {
        let existing: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let mut values =
            form::collect_pairs(existing.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        for p in query {
            values.insert(p.name.clone(), vec![p.value.clone()]);
        }
        url.set_query(Some(&form::encode(&values)));
    }

    Ok(url)
}

/// Keeps headers with a valid name and value, except `Cookie` (exact match).
fn select_headers(recorded: &[HarNameValue]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for h in recorded {
        if h.name == "Cookie" {
            continue;
        }
        match (
            HeaderName::from_bytes(h.name.as_bytes()),
            HeaderValue::from_str(&h.value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.append(name, value);
            }
            _ => tracing::debug!("dropping invalid header {:?}", h.name),
        }
    }
    headers
}
