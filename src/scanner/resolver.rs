//! Path template resolution. Location rules are written with Windows
//! style `%TOKEN%` placeholders; this module expands them from the
//! process environment (with sensible fallbacks) and then expands any
//! glob wildcards against the filesystem.

use std::collections::HashMap;
use std::path::PathBuf;

/// Expands `%TOKEN%` placeholders and glob wildcards in path templates.
/// The token table is captured once so repeated expansion during a
/// scan never re-reads the environment.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    tokens: HashMap<String, String>,
}

impl Resolver {
    /// Resolver with an explicit token table. Keys are stored
    /// uppercase; lookups are case-insensitive.
    pub fn new(tokens: HashMap<String, String>) -> Self {
        let tokens = tokens
            .into_iter()
            .map(|(k, v)| (k.to_ascii_uppercase(), v))
            .collect();
        Self { tokens }
    }

    /// Capture the standard tokens from the environment. Tokens the
    /// environment does not define fall back to the platform's
    /// conventional directories where one exists; tokens that cannot
    /// be resolved at all are simply absent, and templates using them
    /// expand to nothing.
    pub fn from_env() -> Self {
        let mut tokens = HashMap::new();

        let mut put = |name: &str, fallback: Option<PathBuf>| {
            let value = std::env::var(name)
                .ok()
                .filter(|v| !v.is_empty())
                .or_else(|| fallback.map(|p| p.to_string_lossy().into_owned()));
            if let Some(value) = value {
                tokens.insert(name.to_string(), value);
            }
        };

        put("USERPROFILE", dirs::home_dir());
        put("APPDATA", dirs::config_dir());
        put("LOCALAPPDATA", dirs::data_local_dir());
        put("TEMP", Some(std::env::temp_dir()));
        put("TMP", Some(std::env::temp_dir()));
        put("WINDIR", None);
        put("PROGRAMDATA", None);
        put("PROGRAMFILES", None);

        Self { tokens }
    }

    /// Expand every `%TOKEN%` in a template. Returns `None` when any
    /// token is unknown; the caller drops that location rather than
    /// scanning a path with a literal placeholder in it.
    pub fn expand(&self, template: &str) -> Option<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('%') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            match after.find('%') {
                Some(end) => {
                    let token = &after[..end];
                    match self.tokens.get(&token.to_ascii_uppercase()) {
                        Some(value) => out.push_str(value),
                        None => {
                            tracing::debug!(token, template, "unresolved path token");
                            return None;
                        }
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    // Lone percent sign, keep it literally
                    out.push('%');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        Some(out)
    }

    /// Expand a template to zero or more concrete directories:
    /// `%TOKEN%` substitution, `~` for the home directory, then glob
    /// expansion for any wildcards left in the path.
    pub fn resolve(&self, template: &str) -> Vec<PathBuf> {
        let Some(expanded) = self.expand(template) else {
            return Vec::new();
        };

        let expanded = if let Some(stripped) = expanded.strip_prefix('~') {
            match dirs::home_dir() {
                Some(home) => format!("{}{}", home.to_string_lossy(), stripped),
                None => expanded,
            }
        } else {
            expanded
        };

        if expanded.contains('*') || expanded.contains('?') {
            match glob::glob(&expanded) {
                Ok(entries) => entries.filter_map(|e| e.ok()).collect(),
                Err(e) => {
                    tracing::debug!(template, error = %e, "bad glob in path template");
                    Vec::new()
                }
            }
        } else {
            vec![PathBuf::from(expanded)]
        }
    }
}
