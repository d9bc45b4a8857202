//! # avo CLI
//!
//! Command-line interface for content block pages of Het Archief voor
//! Onderwijs: list block types, check and normalize persisted pages, and
//! render previews and edit forms.

mod commands;

use avo_core::FormGroupType;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "avo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "avo.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered block types
    Blocks {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the default persisted row of a block type
    New {
        /// Block type tag (e.g. HEADING)
        block_type: String,

        /// Position of the new block
        #[arg(long, default_value_t = 0)]
        position: usize,
    },

    /// Parse a page and run every field validator
    Check {
        /// Page JSON: a list of rows or an object with `content_blocks`
        page: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a page with current defaults merged and positions renumbered
    Normalize {
        page: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render a page preview to HTML
    Preview {
        page: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render the edit form of one block to HTML
    Form {
        page: PathBuf,

        /// Index of the block in the page
        #[arg(long)]
        block: usize,
    },

    /// Change one field of a block and save the page
    Set {
        page: PathBuf,

        /// Index of the block in the page
        #[arg(long)]
        block: usize,

        /// State container holding the field
        #[arg(long, value_enum, default_value_t = Group::Components)]
        group: Group,

        /// Field key
        #[arg(long)]
        key: String,

        /// New value as JSON (plain text is taken as a string)
        #[arg(long)]
        value: String,

        /// Item index for repeated component state
        #[arg(long)]
        index: Option<usize>,
    },

    /// Move a block one slot up or down and save the page
    Move {
        page: PathBuf,

        /// Index of the block in the page
        #[arg(long)]
        block: usize,

        #[arg(value_enum)]
        direction: Direction,
    },
}

#[derive(Copy, Clone, ValueEnum)]
pub enum Group {
    Components,
    Block,
}

impl From<Group> for FormGroupType {
    fn from(group: Group) -> Self {
        match group {
            Group::Components => FormGroupType::Components,
            Group::Block => FormGroupType::Block,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
pub enum Direction {
    Up,
    Down,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Blocks { json } => commands::list_blocks(json),
        Commands::New {
            block_type,
            position,
        } => commands::new_block(&block_type, position),
        Commands::Check { page, json } => commands::check_page(&page, json),
        Commands::Normalize { page, output } => commands::normalize_page(&page, output.as_deref()),
        Commands::Preview { page, output } => {
            commands::preview_page(&cli.config, &page, output.as_deref())
        }
        Commands::Form { page, block } => commands::show_form(&cli.config, &page, block),
        Commands::Set {
            page,
            block,
            group,
            key,
            value,
            index,
        } => {
            let change = commands::FieldChange {
                block,
                group: group.into(),
                key,
                value,
                index,
            };
            commands::set_field(&cli.config, &page, change).await
        }
        Commands::Move {
            page,
            block,
            direction,
        } => commands::move_block(&cli.config, &page, block, direction).await,
    }
}
