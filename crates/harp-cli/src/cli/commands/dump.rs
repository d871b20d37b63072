//! `harp dump <path>` – print every rebuilt request.

use anyhow::Result;
use harp_core::config::OutputFormat;
use harp_core::replay::{entry_to_request, ReplayRequest};
use std::io::{self, Write};
use std::path::Path;

use super::load_har;

/// Rebuilds each entry and writes it to stdout. Entries with a bad URL are
/// reported on stderr and skipped.
pub fn run_dump(path: &Path, ignore_har_cookies: bool, format: OutputFormat) -> Result<()> {
    let har = load_har(path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut skipped = 0usize;
    for (index, entry) in har.log.entries.iter().enumerate() {
        let request = match entry_to_request(entry, ignore_har_cookies) {
            Ok(r) => r,
            Err(e) => {
                skipped += 1;
                tracing::warn!("entry {}: {}", index, e);
                eprintln!("skipping entry {}: {}", index, e);
                continue;
            }
        };
        match format {
            OutputFormat::Text => write_text(&mut out, &request)?,
            OutputFormat::Curl => write_curl(&mut out, &request)?,
        }
    }
    out.flush()?;

    tracing::info!(
        "dumped {} of {} entries from {}",
        har.log.entries.len() - skipped,
        har.log.entries.len(),
        path.display()
    );
    Ok(())
}

fn header_lines(request: &ReplayRequest) -> Vec<(String, String)> {
    let mut lines: Vec<(String, String)> = request
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    if let Some(cookies) = request.cookie_header() {
        lines.push(("cookie".to_string(), cookies));
    }
    lines
}

/// Request line, one line per header, then the body; a blank line separates requests.
fn write_text<W: Write>(out: &mut W, request: &ReplayRequest) -> io::Result<()> {
    writeln!(out, "{} {}", request.method(), request.url)?;
    for (name, value) in header_lines(request) {
        writeln!(out, "{}: {}", name, value)?;
    }
    if !request.body.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", String::from_utf8_lossy(&request.body))?;
    }
    writeln!(out)
}

fn write_curl<W: Write>(out: &mut W, request: &ReplayRequest) -> io::Result<()> {
    write!(
        out,
        "curl -X {} {}",
        shell_quote(request.method()),
        shell_quote(request.url.as_str())
    )?;
    for (name, value) in header_lines(request) {
        write!(out, " -H {}", shell_quote(&format!("{}: {}", name, value)))?;
    }
    if !request.body.is_empty() {
        write!(
            out,
            " --data-raw {}",
            shell_quote(&String::from_utf8_lossy(&request.body))
        )?;
    }
    writeln!(out)
}

/// Single-quotes `s` for a POSIX shell.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use harp_core::har::{HarCookie, HarEntry, HarNameValue};

    fn sample(ignore_har_cookies: bool) -> ReplayRequest {
        let mut e = HarEntry::default();
        e.request.method = "POST".to_string();
        e.request.url = "https://x.test/login?next=%2F".to_string();
        e.request.headers = vec![HarNameValue::new("Accept", "*/*")];
        e.request.cookies = vec![HarCookie {
            name: "sid".to_string(),
            value: "abc".to_string(),
            domain: "x.test".to_string(),
        }];
        e.request.post_data.text = "it's".to_string();
        entry_to_request(&e, ignore_har_cookies).unwrap()
    }

    fn render<F>(f: F, request: &ReplayRequest) -> String
    where
        F: Fn(&mut Vec<u8>, &ReplayRequest) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf, request).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_format() {
        let text = render(write_text::<Vec<u8>>, &sample(false));
        assert_eq!(
            text,
            "POST https://x.test/login?next=%2F\naccept: */*\ncookie: sid=abc\n\nit's\n\n"
        );
    }

    #[test]
    fn text_format_without_cookies_or_body() {
        let mut request = sample(true);
        request.body.clear();
        let text = render(write_text::<Vec<u8>>, &request);
        assert_eq!(text, "POST https://x.test/login?next=%2F\naccept: */*\n\n");
    }

    #[test]
    fn curl_format() {
        let line = render(write_curl::<Vec<u8>>, &sample(false));
        assert_eq!(
            line,
            "curl -X 'POST' 'https://x.test/login?next=%2F' -H 'accept: */*' \
             -H 'cookie: sid=abc' --data-raw 'it'\\''s'\n"
        );
    }

    #[test]
    fn shell_quote_escapes_single_quotes() {
        assert_eq!(shell_quote("plain"), "'plain'");
        assert_eq!(shell_quote("a'b"), r"'a'\''b'");
    }
}
