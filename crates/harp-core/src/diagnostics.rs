//! Diagnostics sink handed to the decoder.
//!
//! The decoder reports two kinds of events: a stripped byte-order mark
//! (warning) and a decode failure (error). Callers choose where they go by
//! passing a [`DiagnosticSink`]; [`TracingSink`] forwards them to `tracing`,
//! [`Diagnostics`] keeps them as data.

use crate::error::DecodeError;

pub trait DiagnosticSink {
    fn warn(&mut self, message: &str);
    fn error(&mut self, error: &DecodeError);
}

/// Forwards events to the active `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&mut self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&mut self, error: &DecodeError) {
        tracing::error!("{}", error);
    }
}

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Warning(String),
    Error(String),
}

/// Collects events in order.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    pub events: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            Diagnostic::Warning(m) => Some(m.as_str()),
            Diagnostic::Error(_) => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            Diagnostic::Error(m) => Some(m.as_str()),
            Diagnostic::Warning(_) => None,
        })
    }
}

impl DiagnosticSink for Diagnostics {
    fn warn(&mut self, message: &str) {
        self.events.push(Diagnostic::Warning(message.to_string()));
    }

    fn error(&mut self, error: &DecodeError) {
        self.events.push(Diagnostic::Error(error.to_string()));
    }
}
