//! CLI command handlers. Each command is in its own file.

mod dump;
mod validate;

pub use dump::run_dump;
pub use validate::run_validate;

use anyhow::{Context, Result};
use harp_core::har::{self, Decoded, Har};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn decode_file(path: &Path) -> Result<Decoded> {
    let file = File::open(path).with_context(|| format!("open HAR file: {}", path.display()))?;
    Ok(har::decode(BufReader::new(file)))
}

/// Decodes `path`, failing on any decode error.
fn load_har(path: &Path) -> Result<Har> {
    decode_file(path)?
        .into_result()
        .with_context(|| format!("decode HAR file: {}", path.display()))
}
