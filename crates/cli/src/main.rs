mod cmd;
mod logging;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use helpsite_core::config::{ConfigLoader, LoggingConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hsite", version, about = "Help-center content, navigation and search tooling")]
struct Cli {
    /// Path to config.toml (defaults to $XDG_CONFIG_HOME/helpsite/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Print the plain text of a content file (.json AST or Markdown)
    Extract(ExtractArgs),

    /// Show the documentation sidebar tree
    Menu(ListArgs),

    /// List the tutorial video catalog
    Videos(ListArgs),

    /// Build the search index from content pages and videos
    Index(IndexArgs),

    /// Search content pages and videos
    Search(SearchArgs),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Quiet,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// File to read; `-` reads a JSON AST from stdin
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --output quiet
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    /// Write the index here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search terms; all must match
    pub query: String,

    #[arg(long, short)]
    pub limit: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[arg(long)]
    pub json: bool,

    #[arg(long)]
    pub quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let logging_cfg = ConfigLoader::load(cli.config.as_deref())
        .map(|rc| rc.logging)
        .unwrap_or_else(|_| LoggingConfig::default());
    logging::init(&logging_cfg);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Doctor => cmd::doctor::run(config),
        Commands::Extract(args) => cmd::extract::run(&args.file),
        Commands::Menu(args) => cmd::menu::run(config, args),
        Commands::Videos(args) => cmd::videos::run(config, args),
        Commands::Index(args) => cmd::index::run(config, args.output.as_deref()),
        Commands::Search(args) => cmd::search::run(config, args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "hsite", &mut std::io::stdout());
        }
    }

    logging::flush();
}
