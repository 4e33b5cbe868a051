use std::path::{Path, PathBuf};
use std::time::SystemTime;

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::common::config::Config;
use crate::common::runtime::CancelToken;
use crate::registry::LocationRule;

use super::FileEntry;

const SECS_PER_DAY: u64 = 86_400;

fn case_insensitive() -> MatchOptions {
    MatchOptions {
        case_sensitive: false,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    }
}

/// Filters shared by every location in a pass: compiled once from
/// the config so the per-file checks stay cheap.
#[derive(Debug, Clone, Default)]
pub struct ScanFilters {
    exclusions: Vec<Pattern>,
    global_min_age_days: u32,
}

impl ScanFilters {
    pub fn from_config(config: &Config) -> Self {
        let exclusions = config
            .exclusions
            .iter()
            .filter_map(|raw| match Pattern::new(raw) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!(pattern = %raw, error = %e, "skipping bad exclusion pattern");
                    None
                }
            })
            .collect();

        Self {
            exclusions,
            global_min_age_days: config.min_file_age_days,
        }
    }

    /// Exclusion patterns match anywhere in the full path, ignoring case
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.exclusions.is_empty() {
            return false;
        }
        let text = path.to_string_lossy();
        self.exclusions
            .iter()
            .any(|p| p.matches_with(&text, case_insensitive()))
    }

    /// The stricter of the rule's own minimum age and the global one
    fn effective_min_age(&self, rule: &LocationRule) -> u32 {
        rule.min_age_days
            .unwrap_or(0)
            .max(self.global_min_age_days)
    }
}

/// What one location rule matched
#[derive(Debug, Default)]
pub struct LocationScan {
    pub files: Vec<FileEntry>,
    pub size_bytes: u64,
    pub file_count: usize,
    /// Directories visited, for empty-directory pruning after deletion
    pub directories: Vec<PathBuf>,
    pub errors: Vec<String>,
}

/// Walk every directory a rule's template resolves to and collect the
/// files passing the rule's pattern and the shared filters. Nonexistent
/// directories are silently skipped; per-entry read failures are
/// recorded, not fatal. Cancellation is checked between entries.
pub fn walk_location(
    roots: &[PathBuf],
    rule: &LocationRule,
    filters: &ScanFilters,
    cancel: &CancelToken,
) -> LocationScan {
    let mut scan = LocationScan::default();

    let name_pattern = match Pattern::new(&rule.pattern) {
        Ok(p) => p,
        Err(e) => {
            scan.errors
                .push(format!("bad pattern '{}': {}", rule.pattern, e));
            return scan;
        }
    };
    let match_all = rule.pattern == "*";
    let min_age_days = filters.effective_min_age(rule);
    let now = SystemTime::now();

    for root in roots {
        if !root.exists() {
            continue;
        }

        let walker = if rule.recursive {
            WalkDir::new(root).follow_links(false)
        } else {
            WalkDir::new(root).follow_links(false).max_depth(1)
        };

        for entry in walker {
            if cancel.is_cancelled() {
                return scan;
            }

            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    scan.errors.push(format!("read error: {}", e));
                    continue;
                }
            };
            let path = entry.path();

            if entry.file_type().is_dir() {
                // The roots themselves are never pruned, only what's below
                if entry.depth() > 0 && !filters.is_excluded(path) {
                    scan.directories.push(path.to_path_buf());
                }
                continue;
            }

            if !match_all {
                let name = entry.file_name().to_string_lossy();
                if !name_pattern.matches_with(&name, case_insensitive()) {
                    continue;
                }
            }

            if filters.is_excluded(path) {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    scan.errors.push(format!("{}: {}", path.display(), e));
                    continue;
                }
            };

            if min_age_days > 0 {
                if let Ok(modified) = metadata.modified() {
                    let age = now.duration_since(modified).unwrap_or_default();
                    if age.as_secs() < min_age_days as u64 * SECS_PER_DAY {
                        continue;
                    }
                }
            }

            let size = metadata.len();
            if let Some(min_size) = rule.min_size_bytes {
                if size < min_size {
                    continue;
                }
            }

            scan.size_bytes += size;
            scan.file_count += 1;
            scan.files.push(FileEntry {
                path: path.to_path_buf(),
                size_bytes: size,
                modified: metadata.modified().ok(),
            });
        }
    }

    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path, bytes: usize) {
        fs::write(path, vec![b'x'; bytes]).unwrap();
    }

    fn filters(exclusions: &[&str], min_age: u32) -> ScanFilters {
        let mut config = Config::default();
        config.exclusions = exclusions.iter().map(|s| s.to_string()).collect();
        config.min_file_age_days = min_age;
        ScanFilters::from_config(&config)
    }

    #[test]
    fn test_walk_collects_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.tmp"), 10);
        touch(&dir.path().join("b.tmp"), 20);
        touch(&dir.path().join("keep.txt"), 5);

        let rule = LocationRule::flat(dir.path().to_str().unwrap(), "*.tmp");
        let scan = walk_location(
            &[dir.path().to_path_buf()],
            &rule,
            &ScanFilters::default(),
            &CancelToken::new(),
        );

        assert_eq!(scan.file_count, 2);
        assert_eq!(scan.size_bytes, 30);
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("REPORT.TMP"), 1);

        let rule = LocationRule::flat(dir.path().to_str().unwrap(), "*.tmp");
        let scan = walk_location(
            &[dir.path().to_path_buf()],
            &rule,
            &ScanFilters::default(),
            &CancelToken::new(),
        );
        assert_eq!(scan.file_count, 1);
    }

    #[test]
    fn test_flat_rule_ignores_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub/deep.tmp"), 1);
        touch(&dir.path().join("top.tmp"), 1);

        let rule = LocationRule::flat(dir.path().to_str().unwrap(), "*.tmp");
        let scan = walk_location(
            &[dir.path().to_path_buf()],
            &rule,
            &ScanFilters::default(),
            &CancelToken::new(),
        );
        assert_eq!(scan.file_count, 1);
    }

    #[test]
    fn test_recursive_rule_records_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        touch(&dir.path().join("a/b/x.log"), 1);

        let rule = LocationRule::tree(dir.path().to_str().unwrap());
        let scan = walk_location(
            &[dir.path().to_path_buf()],
            &rule,
            &ScanFilters::default(),
            &CancelToken::new(),
        );
        assert_eq!(scan.file_count, 1);
        assert_eq!(scan.directories.len(), 2);
    }

    #[test]
    fn test_exclusions_filter_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("Important.tmp"), 1);
        touch(&dir.path().join("junk.tmp"), 1);

        let rule = LocationRule::tree(dir.path().to_str().unwrap());
        let scan = walk_location(
            &[dir.path().to_path_buf()],
            &rule,
            &filters(&["*important*"], 0),
            &CancelToken::new(),
        );
        assert_eq!(scan.file_count, 1);
        assert!(scan.files[0].path.ends_with("junk.tmp"));
    }

    #[test]
    fn test_min_age_skips_fresh_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("fresh.tmp"), 1);

        let rule = LocationRule::tree(dir.path().to_str().unwrap());
        let scan = walk_location(
            &[dir.path().to_path_buf()],
            &rule,
            &filters(&[], 7),
            &CancelToken::new(),
        );
        assert_eq!(scan.file_count, 0);
    }

    #[test]
    fn test_rule_min_age_wins_over_weaker_global() {
        let rule = LocationRule::tree("/unused").with_min_age(30);
        let f = filters(&[], 7);
        assert_eq!(f.effective_min_age(&rule), 30);
        let f = filters(&[], 90);
        assert_eq!(f.effective_min_age(&rule), 90);
    }

    #[test]
    fn test_missing_root_is_empty_scan() {
        let rule = LocationRule::tree("/no/such/dir");
        let scan = walk_location(
            &[PathBuf::from("/no/such/dir")],
            &rule,
            &ScanFilters::default(),
            &CancelToken::new(),
        );
        assert_eq!(scan.file_count, 0);
        assert!(scan.errors.is_empty());
    }

    #[test]
    fn test_cancelled_walk_stops() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.tmp"), 1);

        let cancel = CancelToken::new();
        cancel.cancel();
        let rule = LocationRule::tree(dir.path().to_str().unwrap());
        let scan = walk_location(
            &[dir.path().to_path_buf()],
            &rule,
            &ScanFilters::default(),
            &cancel,
        );
        assert_eq!(scan.file_count, 0);
    }

    #[test]
    fn test_min_size_filter() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("small.log"), 10);
        touch(&dir.path().join("big.log"), 1000);

        let mut rule = LocationRule::tree(dir.path().to_str().unwrap());
        rule.min_size_bytes = Some(100);
        let scan = walk_location(
            &[dir.path().to_path_buf()],
            &rule,
            &ScanFilters::default(),
            &CancelToken::new(),
        );
        assert_eq!(scan.file_count, 1);
        assert!(scan.files[0].path.ends_with("big.log"));
    }
}
