//! JSON file repositories.
//!
//! Every write goes to a temporary file first and is renamed into place, so
//! a crash never leaves a half-written document behind.

mod agents;
mod history;

pub use agents::FileAgentRepository;
pub use history::FileGameHistory;

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::repository::error::Result;

fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
