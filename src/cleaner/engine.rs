use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::common::config::Config;
use crate::common::elevation;
use crate::common::errors::SweepError;
use crate::common::format;
use crate::common::runtime::{CancelToken, OpGate};
use crate::common::safety;
use crate::registry::{Category, CategoryKind};
use crate::scanner::resolver::Resolver;
use crate::scanner::walker::ScanFilters;
use crate::scanner::{analyze_category, AnalyzeOptions};

use super::{actions, wipe};

/// Clean mode determines whether files are actually removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanMode {
    /// Report what would be removed without touching anything
    DryRun,
    /// Permanent removal
    Delete,
}

impl std::fmt::Display for CleanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanMode::DryRun => write!(f, "dry_run"),
            CleanMode::Delete => write!(f, "delete"),
        }
    }
}

/// Options for one clean pass
#[derive(Debug, Clone, Copy)]
pub struct CleanOptions {
    pub mode: CleanMode,
    /// Clear the read-only attribute instead of skipping the file
    pub delete_read_only: bool,
    /// Overwrite file contents before removal
    pub secure_delete: bool,
    pub secure_passes: u32,
    pub show_progress: bool,
}

impl CleanOptions {
    pub fn from_config(config: &Config, mode: CleanMode) -> Self {
        Self {
            mode,
            delete_read_only: config.delete_read_only,
            secure_delete: config.secure_delete,
            secure_passes: config.secure_passes,
            show_progress: false,
        }
    }
}

/// Per-category clean outcome
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CategoryOutcome {
    pub id: String,
    pub name: String,
    pub files_deleted: usize,
    /// Read-only files left in place
    pub files_skipped: usize,
    pub files_failed: usize,
    pub bytes_freed: u64,
    pub dirs_pruned: usize,
    /// Message from a special action (recycle bin, DNS flush)
    pub action: Option<String>,
    pub errors: Vec<String>,
}

/// Report from a full clean pass
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CleanSummary {
    pub outcomes: Vec<CategoryOutcome>,
    pub total_files: usize,
    pub total_bytes: u64,
    pub total_failed: usize,
    /// Categories refused because the process is not elevated
    pub skipped_admin: Vec<String>,
    pub cancelled: bool,
    pub duration_secs: f64,
}

impl CleanSummary {
    fn recalculate(&mut self) {
        self.total_files = self.outcomes.iter().map(|o| o.files_deleted).sum();
        self.total_bytes = self.outcomes.iter().map(|o| o.bytes_freed).sum();
        self.total_failed = self.outcomes.iter().map(|o| o.files_failed).sum();
    }
}

/// Execute a clean pass over the given categories.
///
/// Each category is re-walked with the same filters the analyzer uses,
/// so a dry run reports exactly what analysis reported. Categories that
/// need elevation are refused outright when the process is not elevated
/// rather than half-cleaned. Returns `SweepError::Busy` when another
/// pass already holds the gate.
pub fn run_clean(
    categories: &[&Category],
    config: &Config,
    gate: &OpGate,
    cancel: &CancelToken,
    options: CleanOptions,
) -> Result<CleanSummary, SweepError> {
    let _guard = gate.try_acquire().ok_or(SweepError::Busy)?;

    let start = Instant::now();
    let resolver = Resolver::from_env();
    let filters = ScanFilters::from_config(config);
    let elevated = elevation::is_elevated();

    let mut summary = CleanSummary::default();

    for category in categories {
        if cancel.is_cancelled() {
            break;
        }

        if category.requires_admin && !elevated && options.mode == CleanMode::Delete {
            tracing::warn!(category = %category.id, "needs elevation, skipping");
            summary.skipped_admin.push(category.id.clone());
            continue;
        }

        let outcome = match category.kind {
            CategoryKind::Files => {
                clean_category(category, &resolver, &filters, cancel, options)
            }
            CategoryKind::EmptyRecycleBin | CategoryKind::FlushDns => {
                special_action(category, options.mode)
            }
        };
        summary.outcomes.push(outcome);
    }

    summary.cancelled = cancel.is_cancelled();
    summary.recalculate();
    summary.duration_secs = start.elapsed().as_secs_f64();

    if options.mode == CleanMode::Delete {
        if let Err(e) = write_clean_log(&summary) {
            tracing::warn!(error = %e, "could not write clean log");
        }
    }
    Ok(summary)
}

/// Append an audit record of what a real clean removed
fn write_clean_log(summary: &CleanSummary) -> Result<()> {
    let dir = Config::logs_dir();
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    let name = format!("sweep-{}.json", chrono::Local::now().format("%Y%m%d-%H%M%S"));
    let path = dir.join(name);
    let contents = serde_json::to_string_pretty(summary)?;
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Walk one category and remove what matched. The walk happens first
/// and the deletions second, so the tally printed at the end reflects
/// what was actually attempted.
fn clean_category(
    category: &Category,
    resolver: &Resolver,
    filters: &ScanFilters,
    cancel: &CancelToken,
    options: CleanOptions,
) -> CategoryOutcome {
    let mut outcome = CategoryOutcome {
        id: category.id.clone(),
        name: category.name.clone(),
        ..Default::default()
    };

    let report = analyze_category(
        category,
        resolver,
        filters,
        cancel,
        AnalyzeOptions {
            collect_files: true,
            ..Default::default()
        },
    );
    outcome.errors.extend(report.errors);

    // A dry run always reports the analyzer's numbers, even past the
    // operation limits; only a real pass is refused.
    if options.mode == CleanMode::DryRun {
        outcome.files_deleted = report.file_count;
        outcome.bytes_freed = report.size_bytes;
        return outcome;
    }

    if let Err(msg) = safety::validate_clean_operation(report.file_count, report.size_bytes) {
        outcome.errors.push(msg);
        outcome.files_failed = report.file_count;
        return outcome;
    }

    let pb = if options.show_progress {
        let pb = ProgressBar::new(report.files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.red} [{bar:40.red/blue}] {pos}/{len} Deleting... {msg}")
                .unwrap()
                .progress_chars("━━░"),
        );
        Some(pb)
    } else {
        None
    };

    for entry in &report.files {
        if cancel.is_cancelled() {
            break;
        }
        if let Some(ref pb) = pb {
            pb.set_message(format::truncate(&format::format_path(&entry.path), 40));
            pb.inc(1);
        }

        if safety::is_protected(&entry.path) {
            outcome.files_failed += 1;
            outcome
                .errors
                .push(SweepError::ProtectedPath(entry.path.clone()).to_string());
            continue;
        }

        match delete_file(&entry.path, options) {
            Ok(DeleteOutcome::Deleted) => {
                outcome.files_deleted += 1;
                outcome.bytes_freed += entry.size_bytes;
            }
            Ok(DeleteOutcome::SkippedReadOnly) => {
                outcome.files_skipped += 1;
            }
            Err(e) => {
                outcome.files_failed += 1;
                outcome.errors.push(format!("{}: {:#}", entry.path.display(), e));
            }
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if !cancel.is_cancelled() {
        outcome.dirs_pruned = prune_empty_dirs(&report.directories);
    }

    outcome
}

enum DeleteOutcome {
    Deleted,
    SkippedReadOnly,
}

/// Remove one file, honoring the read-only and secure-wipe settings
fn delete_file(path: &Path, options: CleanOptions) -> Result<DeleteOutcome> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        // Vanished between walk and delete; nothing to do
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(DeleteOutcome::Deleted)
        }
        Err(e) => {
            return Err(e).with_context(|| format!("stat {}", path.display()));
        }
    };

    if metadata.permissions().readonly() {
        if !options.delete_read_only {
            tracing::debug!(path = %path.display(), "read-only, skipping");
            return Ok(DeleteOutcome::SkippedReadOnly);
        }
        let mut perms = metadata.permissions();
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        fs::set_permissions(path, perms)
            .with_context(|| format!("clearing read-only on {}", path.display()))?;
    }

    if options.secure_delete && metadata.is_file() {
        wipe::secure_delete(path, options.secure_passes)
            .with_context(|| format!("secure delete {}", path.display()))?;
    } else {
        fs::remove_file(path).with_context(|| format!("remove {}", path.display()))?;
    }
    Ok(DeleteOutcome::Deleted)
}

/// Remove directories left empty by the deletion pass. Deepest paths
/// go first so a parent emptied by its children's removal is caught
/// in the same pass. `remove_dir` refuses non-empty directories, so
/// anything still holding files survives.
pub fn prune_empty_dirs(directories: &[PathBuf]) -> usize {
    let mut dirs: Vec<&PathBuf> = directories.iter().collect();
    dirs.sort_by(|a, b| {
        b.components()
            .count()
            .cmp(&a.components().count())
            .then_with(|| b.as_os_str().len().cmp(&a.as_os_str().len()))
    });

    let mut pruned = 0;
    for dir in dirs {
        if safety::is_protected(dir) {
            continue;
        }
        if fs::remove_dir(dir).is_ok() {
            pruned += 1;
        }
    }
    pruned
}

fn special_action(category: &Category, mode: CleanMode) -> CategoryOutcome {
    let mut outcome = CategoryOutcome {
        id: category.id.clone(),
        name: category.name.clone(),
        ..Default::default()
    };

    let result = match category.kind {
        CategoryKind::EmptyRecycleBin => actions::empty_recycle_bin(mode),
        CategoryKind::FlushDns => actions::flush_dns(mode),
        CategoryKind::Files => unreachable!("special_action called for a files category"),
    };

    match result {
        Ok(message) => outcome.action = Some(message),
        Err(e) => outcome.errors.push(format!("{:#}", e)),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Group, LocationRule, RiskLevel};
    use std::collections::HashMap;

    fn category_for(dir: &Path) -> Category {
        Category {
            id: "test_cache".into(),
            name: "Test Cache".into(),
            description: "scratch".into(),
            group: Group::Custom,
            risk: RiskLevel::Safe,
            requires_admin: false,
            kind: CategoryKind::Files,
            locations: vec![LocationRule::tree(dir.to_string_lossy().into_owned())],
        }
    }

    fn options(mode: CleanMode) -> CleanOptions {
        CleanOptions {
            mode,
            delete_read_only: false,
            secure_delete: false,
            secure_passes: 3,
            show_progress: false,
        }
    }

    fn run_one(
        category: &Category,
        config: &Config,
        cancel: &CancelToken,
        opts: CleanOptions,
    ) -> CleanSummary {
        let gate = OpGate::new();
        run_clean(&[category], config, &gate, cancel, opts).unwrap()
    }

    #[test]
    fn test_dry_run_leaves_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("junk.tmp");
        fs::write(&file, b"0123456789").unwrap();

        let category = category_for(dir.path());
        let summary = run_one(
            &category,
            &Config::default(),
            &CancelToken::new(),
            options(CleanMode::DryRun),
        );

        assert_eq!(summary.total_files, 1);
        assert_eq!(summary.total_bytes, 10);
        assert!(file.exists());
    }

    #[test]
    fn test_dry_run_matches_analysis_totals() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.tmp"), vec![0u8; 100]).unwrap();
        fs::write(dir.path().join("b.tmp"), vec![0u8; 250]).unwrap();

        let category = category_for(dir.path());
        let config = Config::default();

        let analysis = analyze_category(
            &category,
            &Resolver::new(HashMap::new()),
            &ScanFilters::from_config(&config),
            &CancelToken::new(),
            AnalyzeOptions::default(),
        );
        let summary = run_one(
            &category,
            &config,
            &CancelToken::new(),
            options(CleanMode::DryRun),
        );

        assert_eq!(summary.total_bytes, analysis.size_bytes);
        assert_eq!(summary.total_files, analysis.file_count);
    }

    #[test]
    fn test_dry_run_reports_over_limit_category() {
        let dir = tempfile::tempdir().unwrap();
        // Sparse file: logical size crosses the byte limit without disk cost
        let huge = dir.path().join("huge.bin");
        let f = fs::File::create(&huge).unwrap();
        f.set_len(safety::MAX_BYTES_WARNING_THRESHOLD + 1).unwrap();
        drop(f);

        let category = category_for(dir.path());

        let dry = run_one(
            &category,
            &Config::default(),
            &CancelToken::new(),
            options(CleanMode::DryRun),
        );
        assert_eq!(dry.total_files, 1);
        assert_eq!(dry.total_bytes, safety::MAX_BYTES_WARNING_THRESHOLD + 1);
        assert_eq!(dry.total_failed, 0);

        // The real pass refuses and leaves the file in place
        let real = run_one(
            &category,
            &Config::default(),
            &CancelToken::new(),
            options(CleanMode::Delete),
        );
        assert_eq!(real.total_files, 0);
        assert_eq!(real.total_failed, 1);
        assert!(real.outcomes[0].errors.iter().any(|e| e.contains("limit")));
        assert!(huge.exists());
    }

    #[test]
    fn test_delete_removes_files_and_prunes_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/x.tmp"), b"xx").unwrap();
        fs::write(dir.path().join("top.tmp"), b"yy").unwrap();

        let category = category_for(dir.path());
        let summary = run_one(
            &category,
            &Config::default(),
            &CancelToken::new(),
            options(CleanMode::Delete),
        );

        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.total_bytes, 4);
        assert_eq!(summary.total_failed, 0);
        assert!(!dir.path().join("a").exists(), "emptied tree not pruned");
        // The root itself is left in place
        assert!(dir.path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_files_skipped_by_default() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("locked.tmp");
        fs::write(&file, b"data").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o444)).unwrap();

        let category = category_for(dir.path());
        let summary = run_one(
            &category,
            &Config::default(),
            &CancelToken::new(),
            options(CleanMode::Delete),
        );

        assert!(file.exists());
        assert_eq!(summary.outcomes[0].files_skipped, 1);
        assert_eq!(summary.total_failed, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_files_deleted_when_enabled() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("locked.tmp");
        fs::write(&file, b"data").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o444)).unwrap();

        let category = category_for(dir.path());
        let mut opts = options(CleanMode::Delete);
        opts.delete_read_only = true;
        let summary = run_one(&category, &Config::default(), &CancelToken::new(), opts);

        assert!(!file.exists());
        assert_eq!(summary.total_files, 1);
    }

    #[test]
    fn test_cancelled_clean_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("keep.tmp");
        fs::write(&file, b"data").unwrap();

        let cancel = CancelToken::new();
        cancel.cancel();
        let category = category_for(dir.path());
        let summary = run_one(
            &category,
            &Config::default(),
            &cancel,
            options(CleanMode::Delete),
        );

        assert!(file.exists());
        assert_eq!(summary.total_files, 0);
        assert!(summary.cancelled);
    }

    #[test]
    fn test_busy_gate_rejects_second_pass() {
        let gate = OpGate::new();
        let _held = gate.try_acquire().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let category = category_for(dir.path());
        let err = run_clean(
            &[&category],
            &Config::default(),
            &gate,
            &CancelToken::new(),
            options(CleanMode::DryRun),
        );
        assert!(matches!(err, Err(SweepError::Busy)));
    }

    #[test]
    fn test_prune_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("x/y/z")).unwrap();
        let dirs = vec![
            dir.path().join("x"),
            dir.path().join("x/y"),
            dir.path().join("x/y/z"),
        ];

        assert_eq!(prune_empty_dirs(&dirs), 3);
        assert_eq!(prune_empty_dirs(&dirs), 0);
    }

    #[test]
    fn test_prune_keeps_non_empty_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("full")).unwrap();
        fs::write(dir.path().join("full/file.txt"), b"x").unwrap();

        assert_eq!(prune_empty_dirs(&[dir.path().join("full")]), 0);
        assert!(dir.path().join("full/file.txt").exists());
    }

    #[test]
    fn test_exclusions_survive_clean() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("keep-me.tmp"), b"x").unwrap();
        fs::write(dir.path().join("junk.tmp"), b"x").unwrap();

        let mut config = Config::default();
        config.exclusions.push("*keep-me*".into());

        let category = category_for(dir.path());
        let summary = run_one(
            &category,
            &config,
            &CancelToken::new(),
            options(CleanMode::Delete),
        );

        assert_eq!(summary.total_files, 1);
        assert!(dir.path().join("keep-me.tmp").exists());
        assert!(!dir.path().join("junk.tmp").exists());
    }
}
