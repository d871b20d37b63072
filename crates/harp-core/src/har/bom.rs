//! UTF-8 byte-order mark handling ahead of JSON parsing.
//!
//! JSON text must not start with a BOM (RFC 8259 section 8.1), but HAR files
//! saved by some tools carry one.

use std::io::{self, Chain, Cursor, Read};

use crate::diagnostics::DiagnosticSink;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Reader over the stream with a leading UTF-8 BOM removed.
pub type BomStripped<R> = Chain<Cursor<Vec<u8>>, R>;

/// Reads up to three bytes; skips them when they are a UTF-8 BOM, otherwise
/// replays them in front of the rest of the stream.
///
/// A stream shorter than three bytes is passed through unchanged.
pub fn strip_bom<R: Read>(
    mut reader: R,
    sink: &mut dyn DiagnosticSink,
) -> io::Result<BomStripped<R>> {
    let mut head = [0u8; 3];
    let mut filled = 0;
    while filled < head.len() {
        match reader.read(&mut head[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    let prefix = if filled == UTF8_BOM.len() && head == UTF8_BOM {
        sink.warn(
            "BOM detected. Skipping first 3 bytes of the HAR stream. Consider removing the BOM \
             from this file. See https://www.rfc-editor.org/rfc/rfc8259#section-8.1 for details.",
        );
        Vec::new()
    } else {
        head[..filled].to_vec()
    };

    Ok(Cursor::new(prefix).chain(reader))
}
