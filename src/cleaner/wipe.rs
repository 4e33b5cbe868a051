//! Multi-pass overwrite before removal, for files whose contents
//! should not be recoverable from the free list.

use anyhow::{Context, Result};
use rand::RngCore;
use std::fs::{self, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

const WIPE_CHUNK: usize = 4096;

/// Overwrite a file's contents with random data `passes` times, then
/// remove it. Each pass is flushed to disk before the next starts.
/// The overwrite covers the file's logical length; filesystem copies
/// (journals, snapshots) are out of reach and out of scope.
pub fn secure_delete(path: &Path, passes: u32) -> Result<()> {
    let len = fs::metadata(path)
        .with_context(|| format!("stat {}", path.display()))?
        .len();

    if len > 0 {
        let mut file = OpenOptions::new()
            .write(true)
            .open(path)
            .with_context(|| format!("open {} for overwrite", path.display()))?;

        let mut rng = rand::thread_rng();
        let mut chunk = [0u8; WIPE_CHUNK];

        for _ in 0..passes.max(1) {
            file.seek(SeekFrom::Start(0))?;
            let mut remaining = len;
            while remaining > 0 {
                let n = remaining.min(WIPE_CHUNK as u64) as usize;
                rng.fill_bytes(&mut chunk[..n]);
                file.write_all(&chunk[..n])?;
                remaining -= n as u64;
            }
            file.sync_all()
                .with_context(|| format!("flush overwrite of {}", path.display()))?;
        }
    }

    fs::remove_file(path).with_context(|| format!("remove {}", path.display()))?;
    Ok(())
}
