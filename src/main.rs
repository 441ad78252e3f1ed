//! dirpick - list a local directory, directories first, in a remembered order.
//!
//! Usage:
//!   dirpick [PATH]                     List a directory
//!   dirpick [PATH] --dirs-only         List only subdirectories
//!   dirpick sort size --descending     Remember a sort order
//!   dirpick sort-show                  Show the remembered sort order
//!   dirpick --help                     Show help

use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use dirpick_list::{
    DirectoryLister, Entry, ListerConfig, Listing, PreferenceStore, SortMode, SortOrder,
    StdFilesystem, TomlPreferences, UPLOAD_SCOPE,
};

#[derive(Parser)]
#[command(
    name = "dirpick",
    version,
    about = "List a local directory with directories first",
    long_about = "dirpick lists the immediate children of a directory, directories first, \
                  ordered by name, size or date. The sort order is remembered per scope."
)]
struct Cli {
    /// Directory to list (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// List only subdirectories
    #[arg(short, long)]
    dirs_only: bool,

    /// Leave out entries starting with a dot
    #[arg(short = 'H', long)]
    hide_hidden: bool,

    /// Names to leave out (exact, `prefix*` or `*suffix`)
    #[arg(short, long = "ignore")]
    ignore: Vec<String>,

    /// Order for this run only, without remembering it
    #[arg(short, long, value_parser = parse_sort_mode)]
    sort: Option<SortMode>,

    /// Reverse the one-off order given with --sort
    #[arg(short = 'r', long, requires = "sort")]
    descending: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Preference scope the sort order is stored under
    #[arg(long, global = true, default_value = UPLOAD_SCOPE)]
    scope: String,

    /// Preferences file (defaults to the user config directory)
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Remember a sort order for the scope
    Sort {
        /// Sort key: name, size or date
        #[arg(value_parser = parse_sort_mode)]
        mode: SortMode,

        /// Sort descending instead of ascending
        #[arg(short = 'r', long)]
        descending: bool,
    },

    /// Show the remembered sort order for the scope
    SortShow,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let prefs = load_preferences(cli.prefs.as_ref())?;

    match cli.command {
        Some(Command::Sort { mode, descending }) => {
            let config = build_config(&cli.scope, false, Vec::new())?;
            let mut lister = DirectoryLister::new(StdFilesystem, prefs, config);
            let order = SortOrder::from_parts(mode, !descending);
            lister
                .set_sort_order(order)
                .context("Failed to save sort order")?;
            println!("{}: {}", cli.scope, order.label());
        }
        Some(Command::SortShow) => {
            let order = prefs
                .sort_order(&cli.scope)
                .context("Failed to read sort order")?;
            match order {
                Some(order) => println!("{}: {}", cli.scope, order.label()),
                None => println!("{}: {} (default)", cli.scope, SortOrder::default().label()),
            }
        }
        None => {
            let config = build_config(&cli.scope, cli.hide_hidden, cli.ignore)?;
            let mut lister = DirectoryLister::new(StdFilesystem, prefs, config);
            let mut listing = lister
                .list(&cli.path, cli.dirs_only)
                .with_context(|| format!("Cannot list {}", cli.path.display()))?;

            if let Some(mode) = cli.sort {
                let order = SortOrder::from_parts(mode, !cli.descending);
                if let Some(resorted) = lister.resort_current(order) {
                    listing = resorted.clone();
                }
            }

            match cli.format {
                OutputFormat::Text => print_listing(&listing),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
            }
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `DIRPICK_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DIRPICK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_preferences(path: Option<&PathBuf>) -> Result<TomlPreferences> {
    match path {
        Some(path) => TomlPreferences::load(path),
        None => TomlPreferences::load_default(),
    }
    .context("Failed to load preferences")
}

fn build_config(scope: &str, hide_hidden: bool, ignore: Vec<String>) -> Result<ListerConfig> {
    ListerConfig::builder()
        .scope(scope)
        .include_hidden(!hide_hidden)
        .ignore_patterns(ignore)
        .build()
        .context("Invalid configuration")
}

fn parse_sort_mode(s: &str) -> Result<SortMode, String> {
    SortMode::parse(s).map_err(|e| e.to_string())
}

/// Print a listing as an aligned table.
fn print_listing(listing: &Listing) {
    println!();
    println!("{}", "─".repeat(72));
    println!(
        " {} - {} dirs, {} files, {} ({})",
        listing.directory.display(),
        listing.dir_count(),
        listing.file_count(),
        format_size(listing.total_size()),
        listing.order.label()
    );
    println!("{}", "─".repeat(72));

    if listing.is_empty() {
        println!(" (empty)");
        return;
    }

    for entry in listing {
        print_entry(entry);
    }
}

fn print_entry(entry: &Entry) {
    let name = if entry.is_dir {
        format!("{}/", entry.name)
    } else {
        entry.name.to_string()
    };
    let size = if entry.is_dir {
        "-".to_string()
    } else {
        format_size(entry.size)
    };

    println!(
        " {:<36} {:>10}  {}  {}",
        truncate(&name, 36),
        size,
        format_time(entry),
        entry.mimetype
    );
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

fn format_time(entry: &Entry) -> String {
    DateTime::<Local>::from(entry.modified)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Truncate a string to max characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{head}…")
    }
}
