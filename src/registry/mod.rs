pub mod builtin;

use serde::{Deserialize, Serialize};

// ─── Core types ───────────────────────────────────────────────────────────────

/// Consequence of cleaning a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Pure caches — always safe to remove
    Safe,
    /// May need a re-login or slow the next launch
    Low,
    /// May lose preferences or history
    Medium,
    /// May affect functionality (sessions, saved state)
    High,
    /// Requires admin, may affect the system
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "safe"),
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Critical => write!(f, "critical"),
        }
    }
}

/// Registry grouping for display and bulk selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Windows,
    Browsers,
    Applications,
    Development,
    System,
    Custom,
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Group::Windows => write!(f, "Windows"),
            Group::Browsers => write!(f, "Browsers"),
            Group::Applications => write!(f, "Applications"),
            Group::Development => write!(f, "Development"),
            Group::System => write!(f, "System"),
            Group::Custom => write!(f, "Custom"),
        }
    }
}

impl std::str::FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(Group::Windows),
            "browsers" => Ok(Group::Browsers),
            "applications" | "apps" => Ok(Group::Applications),
            "development" | "dev" => Ok(Group::Development),
            "system" => Ok(Group::System),
            "custom" => Ok(Group::Custom),
            _ => Err(format!("unknown group '{}'", s)),
        }
    }
}

/// How a category is cleaned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Walk location rules and delete matched files
    Files,
    /// Empty the recycle bin (opaque shell-out)
    EmptyRecycleBin,
    /// Flush the DNS resolver cache (opaque shell-out)
    FlushDns,
}

/// One cleanable location attached to a category.
/// Immutable after registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRule {
    /// Path template; may contain %TOKENS% and glob wildcards
    pub path: String,

    /// File glob applied to file names ("*" matches everything)
    pub pattern: String,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Only include files older than this many days
    pub min_age_days: Option<u32>,

    /// Only include files at least this large
    pub min_size_bytes: Option<u64>,
}

impl LocationRule {
    /// Rule matching everything under a path, recursively
    pub fn tree(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            pattern: "*".into(),
            recursive: true,
            min_age_days: None,
            min_size_bytes: None,
        }
    }

    /// Rule matching a glob in the top level of a path only
    pub fn flat(path: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            pattern: pattern.into(),
            recursive: false,
            min_age_days: None,
            min_size_bytes: None,
        }
    }

    pub fn with_min_age(mut self, days: u32) -> Self {
        self.min_age_days = Some(days);
        self
    }
}

/// A named group of cleanable filesystem locations with shared
/// risk/admin metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier used in config and on the command line
    pub id: String,

    /// Display name
    pub name: String,

    /// What cleaning this actually removes
    pub description: String,

    pub group: Group,
    pub risk: RiskLevel,

    /// Cleaning needs elevated privileges
    pub requires_admin: bool,

    pub kind: CategoryKind,

    /// Empty for special-action kinds
    pub locations: Vec<LocationRule>,
}

impl Category {
    /// Registry with builtins plus custom paths from config
    pub fn registry(config: &crate::common::config::Config) -> Vec<Category> {
        let mut cats = builtin::builtin_categories();
        if !config.custom_paths.is_empty() {
            cats.push(custom_category(&config.custom_paths));
        }
        cats
    }

    /// Look up categories by id, preserving registry order
    pub fn find<'a>(
        registry: &'a [Category],
        ids: &[String],
    ) -> Result<Vec<&'a Category>, crate::common::errors::SweepError> {
        let mut found = Vec::new();
        for id in ids {
            match registry.iter().find(|c| c.id == *id) {
                Some(c) => found.push(c),
                None => {
                    return Err(crate::common::errors::SweepError::UnknownCategory(
                        id.clone(),
                    ))
                }
            }
        }
        Ok(found)
    }
}

/// Build the user-defined category from configured custom paths
fn custom_category(paths: &[crate::common::config::CustomPath]) -> Category {
    Category {
        id: "custom_paths".into(),
        name: "Custom Paths".into(),
        description: "User-defined locations from the configuration file".into(),
        group: Group::Custom,
        risk: RiskLevel::Medium,
        requires_admin: false,
        kind: CategoryKind::Files,
        locations: paths
            .iter()
            .map(|p| LocationRule {
                path: p.path.clone(),
                pattern: p.pattern.clone(),
                recursive: p.recursive,
                min_age_days: None,
                min_size_bytes: None,
            })
            .collect(),
    }
}
