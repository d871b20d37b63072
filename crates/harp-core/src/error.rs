//! Error types surfaced by the decoder and the request reconstructor.
//!
//! Everything else that can go wrong with a capture (bad header syntax, mixed
//! body fields, a missing BOM) is normalized away and never reported here.

use std::io;

/// The byte stream does not hold a usable HAR document.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Reading the underlying stream failed.
    #[error("read HAR stream: {0}")]
    Io(#[from] io::Error),
    /// The stream ended before any JSON value started.
    #[error("HAR stream is empty")]
    Empty,
    /// Malformed JSON.
    #[error("parse HAR JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    /// The root, `log` or `log.entries` does not have the expected shape.
    #[error("HAR document does not match the expected schema: {0}")]
    Schema(#[source] serde_json::Error),
    /// One entry has a field of the wrong type. The entry is kept with that
    /// field left empty; `index` counts entries as recorded.
    #[error("HAR entry {index} does not match the expected schema: {source}")]
    Entry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// An entry's URL could not be parsed; reconstruction of that entry is aborted.
#[derive(Debug, thiserror::Error)]
#[error("invalid request URL {url:?}: {source}")]
pub struct UrlError {
    pub url: String,
    #[source]
    pub source: UrlErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlErrorKind {
    #[error(transparent)]
    Parse(#[from] url::ParseError),
    /// Raw control bytes are rejected rather than stripped or escaped.
    #[error("contains ASCII control character {0:#04x}")]
    ControlCharacter(u8),
}
