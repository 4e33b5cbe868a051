use std::path::Path;

/// Paths that must NEVER be deleted under any circumstances.
/// This is a critical safety net against bugs in category location rules.
const PROTECTED_ROOTS: &[&str] = &[
    "/",
    "/bin",
    "/boot",
    "/etc",
    "/home",
    "/opt",
    "/root",
    "/sbin",
    "/usr",
    "/var",
    "C:\\",
    "C:\\Windows",
    "C:\\Windows\\System32",
    "C:\\Program Files",
    "C:\\Program Files (x86)",
    "C:\\Users",
    "C:\\ProgramData",
];

/// Directories under the user profile that must never be deleted entirely
const PROTECTED_HOME_DIRS: &[&str] = &[
    "", // the profile itself
    "Desktop",
    "Documents",
    "Downloads",
    "Pictures",
    "Music",
    "Videos",
    ".ssh",
    ".gnupg",
];

/// Check if a path is protected and should NEVER be deleted
pub fn is_protected(path: &Path) -> bool {
    let path_str = path.to_string_lossy();

    for protected in PROTECTED_ROOTS {
        if path_str.eq_ignore_ascii_case(protected) {
            return true;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for dir in PROTECTED_HOME_DIRS {
            let protected_path = if dir.is_empty() {
                home.clone()
            } else {
                home.join(dir)
            };
            if path == protected_path {
                return true;
            }
        }
    }

    false
}

/// Maximum number of files to delete in a single operation.
/// A safety limit to prevent runaway deletion bugs.
pub const MAX_FILES_PER_OPERATION: usize = 500_000;

/// Total-bytes threshold above which a clean needs explicit confirmation (50 GB).
pub const MAX_BYTES_WARNING_THRESHOLD: u64 = 50 * 1024 * 1024 * 1024;

/// Validate a cleaning operation before execution
pub fn validate_clean_operation(file_count: usize, total_bytes: u64) -> Result<(), String> {
    if file_count > MAX_FILES_PER_OPERATION {
        return Err(format!(
            "Operation would affect {} files (limit: {}).",
            file_count, MAX_FILES_PER_OPERATION
        ));
    }

    if total_bytes > MAX_BYTES_WARNING_THRESHOLD {
        return Err(format!(
            "Operation would delete {} (limit: {}). Tighten the category selection or exclusions.",
            crate::common::format::format_size(total_bytes),
            crate::common::format::format_size(MAX_BYTES_WARNING_THRESHOLD),
        ));
    }

    Ok(())
}
