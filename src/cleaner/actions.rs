//! Special actions that shell out instead of walking the filesystem.
//! Both fail closed: a missing tool or nonzero exit is an error, never
//! a silent success.

use anyhow::{bail, Context, Result};
use std::process::Command;

use super::CleanMode;

/// Empty the recycle bin. Dry run reports the intent without running
/// anything; the bin's size is not enumerable through this interface.
pub fn empty_recycle_bin(mode: CleanMode) -> Result<String> {
    if mode == CleanMode::DryRun {
        return Ok("would empty the recycle bin".into());
    }

    #[cfg(windows)]
    {
        let status = Command::new("powershell")
            .args([
                "-NoProfile",
                "-Command",
                "Clear-RecycleBin -Force -ErrorAction Stop",
            ])
            .status()
            .context("running Clear-RecycleBin")?;
        if !status.success() {
            bail!("Clear-RecycleBin exited with {}", status);
        }
        Ok("recycle bin emptied".into())
    }

    #[cfg(not(windows))]
    {
        bail!("emptying the recycle bin is only supported on Windows");
    }
}

/// Flush the DNS resolver cache
pub fn flush_dns(mode: CleanMode) -> Result<String> {
    if mode == CleanMode::DryRun {
        return Ok("would flush the DNS resolver cache".into());
    }

    #[cfg(windows)]
    {
        let output = Command::new("ipconfig")
            .arg("/flushdns")
            .output()
            .context("running ipconfig /flushdns")?;
        if !output.status.success() {
            bail!("ipconfig /flushdns exited with {}", output.status);
        }
        Ok("DNS resolver cache flushed".into())
    }

    #[cfg(not(windows))]
    {
        bail!("flushing the DNS cache is only supported on Windows");
    }
}
