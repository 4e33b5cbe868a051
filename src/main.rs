use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use winsweep::cleaner::{self, CleanMode, CleanOptions};
use winsweep::cli::args::{
    Cli, Commands, CompletionShell, ConfigAction, ExcludeAction, OutputFormat, SelectAction,
};
use winsweep::cli::output;
use winsweep::common::config::{Config, OutputFormat as ConfigFormat};
use winsweep::common::format;
use winsweep::common::runtime::{CancelToken, OpGate};
use winsweep::registry::{Category, Group, RiskLevel};
use winsweep::scanner::{self, AnalyzeOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("winsweep=debug")
            .init();
    }

    match cli.command {
        Commands::List { ref group } => cmd_list(&cli, group.as_deref()),

        Commands::Analyze {
            ref categories,
            detailed,
        } => cmd_analyze(&cli, categories, detailed),

        Commands::Clean {
            ref categories,
            all,
            safe_only,
            dry_run,
            yes,
            secure,
            delete_read_only,
            min_age,
        } => {
            let opts = CleanArgs {
                all,
                safe_only,
                dry_run,
                yes,
                secure,
                delete_read_only,
                min_age,
            };
            cmd_clean(&cli, categories, opts)
        }

        Commands::Select { ref action } => cmd_select(action),

        Commands::Exclude { ref action } => cmd_exclude(action),

        Commands::Config { action } => cmd_config(action),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                CompletionShell::Bash => clap_complete::Shell::Bash,
                CompletionShell::Zsh => clap_complete::Shell::Zsh,
                CompletionShell::Fish => clap_complete::Shell::Fish,
                CompletionShell::Powershell => clap_complete::Shell::PowerShell,
            };
            clap_complete::generate(shell, &mut cmd, "winsweep", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// The `--format` flag wins; the configured preference is the fallback
fn output_format(cli: &Cli, config: &Config) -> OutputFormat {
    match cli.format {
        Some(ref f) => f.clone(),
        None => match config.output_format {
            ConfigFormat::Human => OutputFormat::Human,
            ConfigFormat::Json => OutputFormat::Json,
            ConfigFormat::Quiet => OutputFormat::Quiet,
        },
    }
}

// ─── List ─────────────────────────────────────────────────────────────────────

fn cmd_list(cli: &Cli, group: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let registry = Category::registry(&config);

    let filter: Option<Group> = match group {
        Some(name) => Some(name.parse().map_err(anyhow::Error::msg)?),
        None => None,
    };
    let categories: Vec<&Category> = registry
        .iter()
        .filter(|c| filter.map_or(true, |g| c.group == g))
        .collect();

    match output_format(cli, &config) {
        OutputFormat::Human => output::print_category_list(&categories, &config),
        OutputFormat::Json => output::print_category_list_json(&categories, &config),
        OutputFormat::Quiet => {
            for cat in &categories {
                println!("{}  {}", cat.id, cat.risk);
            }
        }
    }
    Ok(())
}

// ─── Analyze ──────────────────────────────────────────────────────────────────

fn cmd_analyze(cli: &Cli, categories: &[String], detailed: bool) -> Result<()> {
    let config = Config::load()?;
    let registry = Category::registry(&config);

    let selected: Vec<&Category> = if categories.is_empty() {
        registry.iter().collect()
    } else {
        Category::find(&registry, categories)?
    };

    let format = output_format(cli, &config);
    let show_progress = !cli.quiet && matches!(format, OutputFormat::Human);
    let gate = OpGate::new();
    let cancel = CancelToken::new();

    let results = scanner::run_analysis(
        &selected,
        &config,
        &gate,
        &cancel,
        AnalyzeOptions {
            show_progress,
            collect_files: detailed,
        },
    )?;

    match format {
        OutputFormat::Human => output::print_analyze_results(&results, detailed),
        OutputFormat::Json => output::print_analyze_json(&results),
        OutputFormat::Quiet => output::print_analyze_quiet(&results),
    }
    Ok(())
}

// ─── Clean ────────────────────────────────────────────────────────────────────

/// Clean flags, bundled so the handler signature stays readable
struct CleanArgs {
    all: bool,
    safe_only: bool,
    dry_run: bool,
    yes: bool,
    secure: bool,
    delete_read_only: bool,
    min_age: Option<u32>,
}

fn cmd_clean(cli: &Cli, categories: &[String], args: CleanArgs) -> Result<()> {
    let CleanArgs {
        all,
        safe_only,
        dry_run,
        yes,
        secure,
        delete_read_only,
        min_age,
    } = args;

    let mut config = Config::load()?;
    Config::init_dirs()?;

    // Command-line flags override the saved settings for this pass
    if secure {
        config.secure_delete = true;
    }
    if delete_read_only {
        config.delete_read_only = true;
    }
    if let Some(days) = min_age {
        config.min_file_age_days = days;
    }

    let registry = Category::registry(&config);
    let ids: Vec<String> = if all {
        registry.iter().map(|c| c.id.clone()).collect()
    } else if categories.is_empty() {
        config.selected.clone()
    } else {
        categories.to_vec()
    };
    if ids.is_empty() {
        anyhow::bail!(
            "no categories selected — pass ids (e.g. `winsweep clean windows_temp`), \
             use --all, or save a selection with `winsweep select add <id>`"
        );
    }
    let mut selected = Category::find(&registry, &ids)?;
    if safe_only {
        selected.retain(|c| c.risk == RiskLevel::Safe);
    }

    let format = output_format(cli, &config);
    let show_progress = !cli.quiet && matches!(format, OutputFormat::Human);
    let gate = OpGate::new();
    let cancel = CancelToken::new();

    let mode = if dry_run {
        CleanMode::DryRun
    } else {
        CleanMode::Delete
    };

    // Confirm with real numbers, not a guess
    if mode == CleanMode::Delete && !yes {
        let preview = scanner::run_analysis(
            &selected,
            &config,
            &gate,
            &cancel,
            AnalyzeOptions {
                show_progress,
                collect_files: false,
            },
        )?;
        if matches!(format, OutputFormat::Human) {
            output::print_analyze_results(&preview, false);
        }

        print!(
            "  {} PERMANENTLY DELETE {} ({})? [y/N] ",
            "❓",
            format::format_count(preview.total_files),
            format::format_size(preview.total_bytes)
        );
        use std::io::Write;
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("  {} Cancelled", "✗".red());
            return Ok(());
        }
    }

    let mut options = CleanOptions::from_config(&config, mode);
    options.show_progress = show_progress;

    let summary = cleaner::run_clean(&selected, &config, &gate, &cancel, options)?;

    match format {
        OutputFormat::Human => output::print_clean_summary(&summary, dry_run),
        OutputFormat::Json => output::print_clean_json(&summary),
        OutputFormat::Quiet => output::print_clean_quiet(&summary),
    }
    Ok(())
}

// ─── Select ───────────────────────────────────────────────────────────────────

fn cmd_select(action: &SelectAction) -> Result<()> {
    let mut config = Config::load()?;
    let registry = Category::registry(&config);

    match action {
        SelectAction::Add { ids } => {
            // Validate before touching the saved selection
            Category::find(&registry, ids)?;
            for id in ids {
                config.select(id);
            }
            config.save()?;
            println!("  {} Selected: {}", "✓".green(), ids.join(", "));
        }
        SelectAction::Remove { ids } => {
            for id in ids {
                config.deselect(id);
            }
            config.save()?;
            println!("  {} Deselected: {}", "✓".green(), ids.join(", "));
        }
        SelectAction::Group { name } => {
            let group: Group = name.parse().map_err(anyhow::Error::msg)?;
            let mut added = 0;
            for cat in registry.iter().filter(|c| c.group == group) {
                config.select(&cat.id);
                added += 1;
            }
            config.save()?;
            println!("  {} Selected {} categories from {}", "✓".green(), added, group);
        }
        SelectAction::Safe => {
            let mut added = 0;
            for cat in registry.iter().filter(|c| c.risk == RiskLevel::Safe) {
                config.select(&cat.id);
                added += 1;
            }
            config.save()?;
            println!("  {} Selected {} safe categories", "✓".green(), added);
        }
        SelectAction::All => {
            for cat in &registry {
                config.select(&cat.id);
            }
            config.save()?;
            println!("  {} Selected all {} categories", "✓".green(), registry.len());
        }
        SelectAction::Show => {
            if config.selected.is_empty() {
                println!("  Nothing selected. Add with: winsweep select add <id>");
            } else {
                for id in &config.selected {
                    println!("  {}", id);
                }
            }
        }
        SelectAction::Clear => {
            config.selected.clear();
            config.save()?;
            println!("  {} Selection cleared", "✓".green());
        }
    }
    Ok(())
}

// ─── Exclude ──────────────────────────────────────────────────────────────────

fn cmd_exclude(action: &ExcludeAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ExcludeAction::Add { pattern } => {
            glob::Pattern::new(pattern)
                .map_err(|e| anyhow::anyhow!("bad pattern '{}': {}", pattern, e))?;
            config.add_exclusion(pattern);
            config.save()?;
            println!("  {} Excluding: {}", "✓".green(), pattern);
        }
        ExcludeAction::Remove { pattern } => {
            config.remove_exclusion(pattern);
            config.save()?;
            println!("  {} No longer excluding: {}", "✓".green(), pattern);
        }
        ExcludeAction::List => {
            if config.exclusions.is_empty() {
                println!("  No exclusion patterns.");
            } else {
                for pattern in &config.exclusions {
                    println!("  {}", pattern);
                }
            }
        }
    }
    Ok(())
}

// ─── Config ───────────────────────────────────────────────────────────────────

fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            Config::init_dirs()?;
            let config = Config::default();
            config.save()?;
            println!("  {} winsweep initialized at ~/.winsweep", "✓".green());
            println!("  Created: config.toml, logs/");
            Ok(())
        }
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("  {} Configuration reset to defaults", "✓".green());
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "min_file_age_days" => config.min_file_age_days = value.parse()?,
                "delete_read_only" => config.delete_read_only = value.parse()?,
                "secure_delete" => config.secure_delete = value.parse()?,
                "secure_passes" => config.secure_passes = value.parse()?,
                "output_format" => {
                    config.output_format = match value.as_str() {
                        "human" => ConfigFormat::Human,
                        "json" => ConfigFormat::Json,
                        "quiet" => ConfigFormat::Quiet,
                        _ => anyhow::bail!("output_format must be human, json, or quiet"),
                    }
                }
                _ => anyhow::bail!("Unknown config key: {}", key),
            }
            config.save()?;
            println!("  {} Set {} = {}", "✓".green(), key, value);
            Ok(())
        }
    }
}
