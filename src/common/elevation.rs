//! Elevation detection. Admin-required categories are refused by the
//! cleaner when this returns false (fail closed); analysis still runs
//! and records per-item permission errors.

#[cfg(unix)]
pub fn is_elevated() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail
    unsafe { libc::geteuid() == 0 }
}

#[cfg(windows)]
pub fn is_elevated() -> bool {
    // Write probe into the system temp directory; only elevated
    // processes can create files there.
    let probe = std::path::Path::new("C:\\Windows\\Temp").join(format!(
        ".winsweep-elevation-{}",
        std::process::id()
    ));
    match std::fs::File::create(&probe) {
        Ok(_) => {
            let _ = std::fs::remove_file(&probe);
            true
        }
        Err(_) => false,
    }
}

#[cfg(not(any(unix, windows)))]
pub fn is_elevated() -> bool {
    false
}
