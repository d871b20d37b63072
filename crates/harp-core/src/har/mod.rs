//! HAR (HTTP Archive) capture decoding.
//!
//! Turns a byte stream into a [`Har`] that is safe to replay: a leading UTF-8
//! BOM is skipped, WebSocket (`ws://`) entries are dropped, and the remaining
//! entries are ordered by their `startedDateTime` text.

mod bom;
mod decode;
mod fields;
mod normalize;
mod parse;

pub use bom::{strip_bom, BomStripped};
pub use decode::{decode, decode_with, Decoded};
pub use normalize::{drop_websocket_entries, sort_by_start_time};
pub use parse::{Har, HarCookie, HarEntry, HarLog, HarNameValue, HarPostData, HarRequest};
