use colored::*;

use crate::cleaner::CleanSummary;
use crate::common::config::Config;
use crate::common::format::{self, format_risk, format_size, format_size_colored};
use crate::registry::{Category, CategoryKind, Group};
use crate::scanner::AnalyzeResults;

// ─── Category list ────────────────────────────────────────────────────────────

/// Print the category registry grouped by section
pub fn print_category_list(categories: &[&Category], config: &Config) {
    println!();
    println!("{}  winsweep Categories", "🧹");
    println!("{}", "─".repeat(60).dimmed());

    let groups = [
        Group::Windows,
        Group::Browsers,
        Group::Applications,
        Group::Development,
        Group::System,
        Group::Custom,
    ];

    for group in groups {
        let members: Vec<&&Category> = categories.iter().filter(|c| c.group == group).collect();
        if members.is_empty() {
            continue;
        }

        println!();
        println!("  {}", group.to_string().bold());
        for cat in members {
            let marker = if config.is_selected(&cat.id) {
                "✓".green()
            } else {
                "·".dimmed()
            };
            let admin = if cat.requires_admin {
                " 🔒".to_string()
            } else {
                String::new()
            };
            println!(
                "    {} {:<24} [{}]{}  {}",
                marker,
                cat.id.cyan(),
                format_risk(&cat.risk),
                admin,
                cat.description.dimmed()
            );
        }
    }

    println!();
    println!(
        "  {} selected  •  {} exclusion patterns  •  🔒 needs admin",
        config.selected.len(),
        config.exclusions.len()
    );
    println!();
}

pub fn print_category_list_json(categories: &[&Category], config: &Config) {
    let json: Vec<_> = categories
        .iter()
        .map(|c| {
            serde_json::json!({
                "id": c.id,
                "name": c.name,
                "description": c.description,
                "group": c.group.to_string(),
                "risk": c.risk.to_string(),
                "requires_admin": c.requires_admin,
                "selected": config.is_selected(&c.id),
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&json).unwrap_or_else(|_| "[]".into())
    );
}

// ─── Analysis ─────────────────────────────────────────────────────────────────

/// Print analysis results in human-readable format
pub fn print_analyze_results(results: &AnalyzeResults, detailed: bool) {
    println!();
    println!("{}  winsweep Analysis", "🔍");
    println!("{}", "─".repeat(60).dimmed());
    println!(
        "  Analyzed in {}  •  {} reclaimable  •  {}",
        format::format_duration(results.duration_secs).cyan(),
        format_size_colored(results.total_bytes),
        format::format_count(results.total_files).dimmed()
    );
    println!("{}", "─".repeat(60).dimmed());
    println!();

    if results.cancelled {
        println!("  {} Analysis was cancelled — results are partial.", "⚠".yellow());
        println!();
    }

    let mut any = false;
    for report in &results.reports {
        if report.kind != CategoryKind::Files {
            println!(
                "    {:<28} {:>10}  [{}]",
                report.name,
                "action".dimmed(),
                format_risk(&report.risk)
            );
            any = true;
            continue;
        }
        if report.file_count == 0 {
            continue;
        }
        any = true;

        let admin = if report.requires_admin { " 🔒" } else { "" };
        println!(
            "    {:<28} {:>10}  {:>8} files  [{}]{}",
            report.name,
            format_size_colored(report.size_bytes),
            report.file_count,
            format_risk(&report.risk),
            admin
        );

        if detailed {
            for file in report.files.iter().take(10) {
                println!(
                    "        {} {} ({})",
                    "•".dimmed(),
                    format::format_path(&file.path).dimmed(),
                    format_size(file.size_bytes).dimmed()
                );
            }
            if report.files.len() > 10 {
                println!(
                    "        {} ... and {} more",
                    "•".dimmed(),
                    report.files.len() - 10
                );
            }
        }
    }

    if !any {
        println!("  {} Nothing to clean!", "✨");
    }

    let errors: usize = results.reports.iter().map(|r| r.errors.len()).sum();
    if errors > 0 {
        println!();
        println!("  {} {} locations could not be read", "⚠".yellow(), errors);
    }
    println!();
}

pub fn print_analyze_json(results: &AnalyzeResults) {
    match serde_json::to_string_pretty(results) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Error: {}", e),
    }
}

pub fn print_analyze_quiet(results: &AnalyzeResults) {
    println!(
        "{}  {}",
        format_size(results.total_bytes),
        results.total_files
    );
}

// ─── Clean ────────────────────────────────────────────────────────────────────

/// Print the outcome of a clean pass
pub fn print_clean_summary(summary: &CleanSummary, dry_run: bool) {
    println!();
    if dry_run {
        println!(
            "  {} Dry run — would remove {} ({}). No files modified.",
            "ℹ️",
            format::format_count(summary.total_files),
            format_size(summary.total_bytes)
        );
    } else {
        println!(
            "  {} Removed {} — freed {}",
            "✓".green(),
            format::format_count(summary.total_files),
            format_size_colored(summary.total_bytes)
        );
    }

    for outcome in &summary.outcomes {
        if let Some(ref message) = outcome.action {
            println!("    {} {}: {}", "•".dimmed(), outcome.name, message);
        }
        if outcome.dirs_pruned > 0 {
            println!(
                "    {} {}: pruned {} empty directories",
                "•".dimmed(),
                outcome.name,
                outcome.dirs_pruned
            );
        }
        if outcome.files_skipped > 0 {
            println!(
                "    {} {}: {} read-only files left in place",
                "•".dimmed(),
                outcome.name,
                outcome.files_skipped
            );
        }
    }

    if !summary.skipped_admin.is_empty() {
        println!(
            "  {} Skipped (needs admin): {}",
            "⚠".yellow(),
            summary.skipped_admin.join(", ")
        );
    }

    let any_errors = summary.outcomes.iter().any(|o| !o.errors.is_empty());
    if summary.total_failed > 0 || any_errors {
        if summary.total_failed > 0 {
            println!(
                "  {} {} files could not be removed:",
                "⚠".yellow(),
                summary.total_failed
            );
        }
        for outcome in &summary.outcomes {
            for err in outcome.errors.iter().take(5) {
                println!("    {} {}", "✗".red(), err);
            }
        }
    }

    if summary.cancelled {
        println!("  {} Cancelled before finishing.", "⚠".yellow());
    }
    println!();
}

pub fn print_clean_json(summary: &CleanSummary) {
    match serde_json::to_string_pretty(summary) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Error: {}", e),
    }
}

pub fn print_clean_quiet(summary: &CleanSummary) {
    println!(
        "{}  {}  {}",
        format_size(summary.total_bytes),
        summary.total_files,
        summary.total_failed
    );
}
