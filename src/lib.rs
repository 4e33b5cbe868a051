//! # winsweep
//!
//! A category-driven disk cleanup utility.
//!
//! winsweep knows where the usual suspects keep their temp files and
//! caches — the system temp folders, browsers, chat apps, developer
//! package managers — and measures or removes them by category:
//!
//! - **Category Registry**: 40+ builtin locations, each tagged with a
//!   risk level and an admin-required flag, plus user-defined paths
//! - **Analyze Before Clean**: every pass is measured first; dry-run
//!   reports exactly what a real clean would remove
//! - **Safety-First**: protected-path refusal, read-only files skipped
//!   by default, age and exclusion filters applied everywhere
//! - **Secure Delete**: optional multi-pass overwrite before removal
//! - **CLI as Unix Citizen**: JSON output, pipe-friendly, cron-schedulable
//! - **100% Offline**: zero telemetry, no accounts, no cloud

pub mod cleaner;
pub mod cli;
pub mod common;
pub mod registry;
pub mod scanner;
