//! `harp validate <path>` – decode a HAR file and report the outcome.

use anyhow::{Context, Result};
use std::path::Path;

use super::decode_file;

pub fn run_validate(path: &Path) -> Result<()> {
    let decoded = decode_file(path)?;
    let count = decoded.har.log.entries.len();
    match decoded.error {
        None => {
            println!("{}: ok, {} replayable entries", path.display(), count);
            Ok(())
        }
        Some(err) => {
            println!("{}: invalid, {} entries decoded", path.display(), count);
            Err(err).with_context(|| format!("decode HAR file: {}", path.display()))
        }
    }
}
