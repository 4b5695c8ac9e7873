use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One historical draw: the contest that produced it and the numbers drawn.
/// Records are immutable once ingested; the engine only ever reads a
/// snapshot of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRecord {
    pub contest_number: u32,
    pub numbers: Vec<u8>,
}

/// Load a history snapshot from a JSON file and normalize it newest-first.
pub fn load_history_file(path: &Path) -> Result<Vec<DrawRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read history snapshot {}", path.display()))?;
    let mut records: Vec<DrawRecord> =
        serde_json::from_str(raw.trim()).context("invalid history snapshot json")?;
    normalize_history(&mut records);
    Ok(records)
}

/// Sort descending by contest number. Exporters do not all agree on order.
pub fn normalize_history(records: &mut [DrawRecord]) {
    records.sort_by(|a, b| b.contest_number.cmp(&a.contest_number));
}

/// Trim a normalized snapshot to its most recent `limit` draws.
pub fn most_recent(records: &mut Vec<DrawRecord>, limit: usize) {
    records.truncate(limit);
}
