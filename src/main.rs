//! artex: IRC log ascii art exporter toolkit.

mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "artex", version, about = "IRC log ascii art exporter toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract asciis from logs
    Extract {
        /// Input log files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// View a file with formatting applied
    Inspect {
        /// Input file
        file: PathBuf,
        /// Show line numbers
        #[arg(short, long)]
        lines: bool,
    },
    /// Split one file's asciis into multiple artifacts
    Split {
        /// Input file
        file: PathBuf,
        /// Sections to assign, as START[-END]TAG tokens
        #[arg(short = 't', long = "sections", required = true, num_args = 1..)]
        sections: Vec<String>,
        /// Print what would be written without writing or deleting
        #[arg(short, long)]
        preview: bool,
        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Print the color palette for debugging
    Palette,
    /// Configuration
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Create the config file with default settings
    Init,
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract { files, output_dir } => {
            commands::extract::handle(&files, output_dir.as_deref())
        }
        Commands::Inspect { file, lines } => commands::inspect::handle(&file, lines),
        Commands::Split {
            file,
            sections,
            preview,
            output_dir,
        } => commands::split::handle(&file, &sections, output_dir.as_deref(), preview),
        Commands::Palette => commands::inspect::handle_palette(),
        Commands::Config(command) => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "artex", &mut io::stdout());
            Ok(())
        }
    }
}
