use clap::{Parser, Subcommand, ValueEnum};

/// winsweep — a category-driven disk cleanup utility
#[derive(Parser, Debug)]
#[command(
    name = "winsweep",
    version,
    about = "A category-driven disk cleanup utility",
    long_about = "winsweep analyzes well-known temp and cache locations by category\n\
                   (system temp, browser caches, developer tool caches, ...) and\n\
                   removes what you select. Dry-run first, delete when sure.",
    after_help = "EXAMPLES:\n  \
        winsweep list                            Show all categories with risk levels\n  \
        winsweep analyze                         Measure every category\n  \
        winsweep analyze chrome_cache,npm_cache  Measure specific categories\n  \
        winsweep clean --dry-run                 Preview what selection would remove\n  \
        winsweep clean --yes                     Clean the selected categories\n  \
        winsweep clean windows_temp --secure     Overwrite before deleting\n  \
        winsweep select add chrome_cache         Add a category to the selection\n  \
        winsweep exclude add '*.lock'            Never touch lock files\n  \
        winsweep config set min_file_age_days 7  Only remove files older than a week"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (defaults to the configured preference)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode — minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available categories
    List {
        /// Only show one group (windows, browsers, apps, dev, system, custom)
        #[arg(long)]
        group: Option<String>,
    },

    /// Measure how much each category would free
    Analyze {
        /// Comma-separated category ids (default: all categories)
        #[arg(value_delimiter = ',')]
        categories: Vec<String>,

        /// Show individual files in results
        #[arg(long)]
        detailed: bool,
    },

    /// Remove the files a category matches
    Clean {
        /// Comma-separated category ids (default: the saved selection)
        #[arg(value_delimiter = ',')]
        categories: Vec<String>,

        /// Clean every category in the registry
        #[arg(long, conflicts_with = "categories")]
        all: bool,

        /// Drop everything above the safe risk level from this pass
        #[arg(long)]
        safe_only: bool,

        /// Show what would be removed without touching anything
        #[arg(long)]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Overwrite file contents before removal
        #[arg(long)]
        secure: bool,

        /// Clear the read-only attribute instead of skipping the file
        #[arg(long)]
        delete_read_only: bool,

        /// Only remove files older than this many days (overrides config)
        #[arg(long, value_name = "DAYS")]
        min_age: Option<u32>,
    },

    /// Manage the saved category selection
    Select {
        #[command(subcommand)]
        action: SelectAction,
    },

    /// Manage exclusion patterns
    Exclude {
        #[command(subcommand)]
        action: ExcludeAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum SelectAction {
    /// Add category ids to the selection
    Add {
        /// Comma-separated category ids
        #[arg(value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },

    /// Remove category ids from the selection
    Remove {
        /// Comma-separated category ids
        #[arg(value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },

    /// Select every category in a group
    Group {
        /// Group name (windows, browsers, apps, dev, system, custom)
        name: String,
    },

    /// Select every safe-risk category
    Safe,

    /// Select every category
    All,

    /// Show the current selection
    Show,

    /// Clear the selection
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ExcludeAction {
    /// Add an exclusion pattern (case-insensitive wildcard on the full path)
    Add {
        /// Pattern, e.g. '*important*' or '*.lock'
        pattern: String,
    },

    /// Remove an exclusion pattern
    Remove {
        /// Exact pattern to remove
        pattern: String,
    },

    /// List exclusion patterns
    List,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },

    /// Reset to default configuration
    Reset,

    /// Initialize winsweep directories and default config
    Init,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
