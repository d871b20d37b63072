//! Decode a HAR byte stream into a normalized [`Har`].

use serde_json::Value;
use std::io::Read;

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::DecodeError;

use super::bom::strip_bom;
use super::fields::FieldReader;
use super::normalize::{drop_websocket_entries, sort_by_start_time};
use super::parse::{Har, HarEntry, HarLog};

/// Outcome of a decode: the (possibly partial) capture and the first error, if any.
///
/// A failed decode can still carry entries, so check `error` rather than
/// whether `har` is empty.
#[derive(Debug)]
#[must_use]
pub struct Decoded {
    pub har: Har,
    pub error: Option<DecodeError>,
}

impl Decoded {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Drops the partial capture when decoding failed.
    pub fn into_result(self) -> Result<Har, DecodeError> {
        match self.error {
            None => Ok(self.har),
            Some(e) => Err(e),
        }
    }
}

/// Decodes with diagnostics sent to `tracing`.
pub fn decode<R: Read>(reader: R) -> Decoded {
    decode_with(reader, &mut TracingSink)
}

/// Decodes `reader` as a HAR document.
///
/// A leading UTF-8 BOM is skipped. Only the first JSON value is read; anything
/// after it is ignored. After parsing, `ws://` entries are dropped and the rest
/// are sorted by `startedDateTime`.
pub fn decode_with<R: Read>(reader: R, sink: &mut dyn DiagnosticSink) -> Decoded {
    let (mut entries, error) = match read_entries(reader, sink) {
        Ok(parsed) => parsed,
        Err(e) => (Vec::new(), Some(e)),
    };
    if let Some(e) = &error {
        sink.error(e);
    }

    let dropped = drop_websocket_entries(&mut entries);
    if dropped > 0 {
        tracing::debug!("dropped {} websocket entries", dropped);
    }
    sort_by_start_time(&mut entries);

    Decoded {
        har: Har {
            log: HarLog { entries },
        },
        error,
    }
}

/// Parses the stream into entries.
///
/// A root, `log` or `entries` of the wrong JSON type fails the whole capture.
/// Inside an entry a mistyped field is left empty and the entry is kept; the
/// first such error is returned next to the entries.
fn read_entries<R: Read>(
    reader: R,
    sink: &mut dyn DiagnosticSink,
) -> Result<(Vec<HarEntry>, Option<DecodeError>), DecodeError> {
    let reader = strip_bom(reader, sink)?;

    let root = serde_json::Deserializer::from_reader(reader)
        .into_iter::<Value>()
        .next()
        .ok_or(DecodeError::Empty)?
        .map_err(|e| {
            if e.is_io() {
                DecodeError::Io(e.into())
            } else {
                DecodeError::Syntax(e)
            }
        })?;

    let mut shape = FieldReader::default();
    let mut root = shape.object(Some(root));
    let mut log = shape.object(root.remove("log"));
    let values: Vec<Value> = shape.value(log.remove("entries"));
    if let Some(e) = shape.take_error() {
        return Err(DecodeError::Schema(e));
    }

    let mut entries = Vec::with_capacity(values.len());
    let mut first_error = None;
    for (index, value) in values.into_iter().enumerate() {
        let mut fields = FieldReader::default();
        entries.push(fields.nested::<HarEntry>(Some(value)));
        if let Some(source) = fields.take_error() {
            tracing::debug!("HAR entry {} has a mistyped field: {}", index, source);
            if first_error.is_none() {
                first_error = Some(DecodeError::Entry { index, source });
            }
        }
    }

    Ok((entries, first_error))
}
