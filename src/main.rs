//! Admin Table Viewer - Entry Point

use admintable::state::Theme;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use url::Url;

/// Admin Table Viewer - sort, page through and search exported admin tables
#[derive(Parser, Debug)]
#[command(name = "admintable")]
#[command(version)]
#[command(about = "TUI viewer for JSON table exports with sorting, pagination and search")]
pub struct Args {
    /// Path to JSON table document (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Rows per page (must be positive)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Color theme (defaults to the saved preference)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Location that page size changes and page links navigate from
    #[arg(long)]
    pub base_url: Option<Url>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = admintable::config::load_config_with_precedence(args.config.clone())?;
        let merged = admintable::config::merge_config(config_file);
        let with_env = admintable::config::apply_env_overrides(merged);
        let page_size = args.page_size.and_then(|n| usize::try_from(n).ok());
        admintable::config::apply_cli_overrides(
            with_env,
            page_size,
            args.theme,
            args.base_url.clone(),
        )
    };

    admintable::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Detect input source (file or stdin)
    let input_source = admintable::source::detect_input_source(args.file.clone())?;

    let cli_args = admintable::view::CliArgs::from_config(&config, args.search.clone());
    admintable::view::run_with_source(input_source, cli_args)?;

    Ok(())
}
