pub mod resolver;
pub mod walker;

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Instant, SystemTime};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::config::Config;
use crate::common::errors::SweepError;
use crate::common::runtime::{CancelToken, OpGate};
use crate::registry::{Category, CategoryKind, Group, RiskLevel};

use resolver::Resolver;
use walker::ScanFilters;

/// One file an analysis pass matched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub size_bytes: u64,
    #[serde(skip)]
    pub modified: Option<SystemTime>,
}

/// Per-category analysis outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    pub id: String,
    pub name: String,
    pub group: Group,
    pub risk: RiskLevel,
    pub requires_admin: bool,
    pub kind: CategoryKind,
    pub size_bytes: u64,
    pub file_count: usize,
    /// Matched files, present when the caller asked for a preview
    pub files: Vec<FileEntry>,
    /// Directories under the category's roots, deepest paths last
    #[serde(skip)]
    pub directories: Vec<PathBuf>,
    pub errors: Vec<String>,
}

/// Full analysis pass output
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnalyzeResults {
    pub reports: Vec<CategoryReport>,
    pub total_bytes: u64,
    pub total_files: usize,
    pub duration_secs: f64,
    pub cancelled: bool,
}

impl AnalyzeResults {
    pub fn recalculate(&mut self) {
        self.total_bytes = self.reports.iter().map(|r| r.size_bytes).sum();
        self.total_files = self.reports.iter().map(|r| r.file_count).sum();
    }
}

/// Analysis options beyond what the config carries
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeOptions {
    pub show_progress: bool,
    /// Keep per-file entries in the reports (preview mode)
    pub collect_files: bool,
}

/// Analyze the given categories: resolve each location template,
/// walk it with the configured filters, and aggregate sizes. Never
/// modifies the filesystem. Returns `SweepError::Busy` when another
/// pass already holds the gate.
pub fn run_analysis(
    categories: &[&Category],
    config: &Config,
    gate: &OpGate,
    cancel: &CancelToken,
    options: AnalyzeOptions,
) -> Result<AnalyzeResults, SweepError> {
    let _guard = gate.try_acquire().ok_or(SweepError::Busy)?;

    let start = Instant::now();
    let resolver = Resolver::from_env();
    let filters = ScanFilters::from_config(config);

    let pb = if options.show_progress {
        let pb = ProgressBar::new(categories.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("━━░"),
        );
        Some(pb)
    } else {
        None
    };
    let pb = Mutex::new(pb);

    let mut reports: Vec<CategoryReport> = categories
        .par_iter()
        .map(|category| {
            if let Some(pb) = pb.lock().unwrap().as_ref() {
                pb.set_message(category.name.clone());
            }
            let report = analyze_category(category, &resolver, &filters, cancel, options);
            if let Some(pb) = pb.lock().unwrap().as_ref() {
                pb.inc(1);
            }
            report
        })
        .collect();

    if let Some(pb) = pb.lock().unwrap().take() {
        pb.finish_and_clear();
    }

    reports.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));

    let mut results = AnalyzeResults {
        reports,
        cancelled: cancel.is_cancelled(),
        ..Default::default()
    };
    results.recalculate();
    results.duration_secs = start.elapsed().as_secs_f64();
    Ok(results)
}

/// Analyze one category. Special-action categories (recycle bin, DNS
/// cache) have no enumerable size and report zero.
pub fn analyze_category(
    category: &Category,
    resolver: &Resolver,
    filters: &ScanFilters,
    cancel: &CancelToken,
    options: AnalyzeOptions,
) -> CategoryReport {
    let mut report = CategoryReport {
        id: category.id.clone(),
        name: category.name.clone(),
        group: category.group,
        risk: category.risk,
        requires_admin: category.requires_admin,
        kind: category.kind,
        size_bytes: 0,
        file_count: 0,
        files: Vec::new(),
        directories: Vec::new(),
        errors: Vec::new(),
    };

    if category.kind != CategoryKind::Files {
        return report;
    }

    for rule in &category.locations {
        if cancel.is_cancelled() {
            break;
        }
        let roots = resolver.resolve(&rule.path);
        if roots.is_empty() {
            continue;
        }
        let scan = walker::walk_location(&roots, rule, filters, cancel);
        report.size_bytes += scan.size_bytes;
        report.file_count += scan.file_count;
        report.errors.extend(scan.errors);
        report.directories.extend(scan.directories);
        if options.collect_files {
            report.files.extend(scan.files);
        }
    }

    if options.collect_files {
        report.files.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
    }
    report
}
