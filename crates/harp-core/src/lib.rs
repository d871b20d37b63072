//! harp core: decode HAR captures and rebuild their requests for replay.
//!
//! [`har::decode`] turns a byte stream into a normalized [`har::Har`];
//! [`replay::entry_to_request`] turns one entry into a [`replay::ReplayRequest`].

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod har;
pub mod logging;
pub mod replay;

pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, TracingSink};
pub use error::{DecodeError, UrlError, UrlErrorKind};
