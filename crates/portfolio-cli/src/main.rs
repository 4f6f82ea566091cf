mod commands;
mod config;
mod projects;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::render::Format;
use commands::simulate::SimulateOptions;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Render and simulate the portfolio page without a browser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with an array of project records (defaults to the seed list)
    #[arg(long, global = true)]
    projects: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects in display order
    List,

    /// Print the project grid
    Render {
        /// Project record as JSON to append (repeatable, applied before removals)
        #[arg(long)]
        add: Vec<String>,

        /// Title of a project to remove (repeatable, first match only)
        #[arg(long)]
        remove: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },

    /// Run the demo page on virtual time and report its state
    Simulate {
        /// Page config TOML (otherwise portfolio.toml is searched upward)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Click the in-page anchor with this href, e.g. "#about" (repeatable)
        #[arg(long)]
        click: Vec<String>,

        /// Scroll to this Y position (repeatable, applied in order)
        #[arg(long)]
        scroll: Vec<f64>,

        /// Submit the contact form
        #[arg(long)]
        submit: bool,

        /// Virtual milliseconds to advance after the interactions
        #[arg(long, default_value = "5000")]
        ms: u64,

        /// Print the whole document instead of a summary
        #[arg(long)]
        html: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let projects = cli.projects.as_deref();

    match cli.command {
        Commands::List => {
            commands::list::run(projects)?;
        }

        Commands::Render {
            add,
            remove,
            format,
        } => {
            commands::render::run(projects, &add, &remove, format)?;
        }

        Commands::Simulate {
            config,
            click,
            scroll,
            submit,
            ms,
            html,
        } => {
            let (page_config, source) = config::load_config(config.as_deref())?;
            log::info!("Using {}", source.describe());
            commands::simulate::run(
                page_config,
                SimulateOptions {
                    projects,
                    clicks: &click,
                    scrolls: &scroll,
                    submit,
                    ms,
                    html,
                },
            )?;
        }
    }

    Ok(())
}
