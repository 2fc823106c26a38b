use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;

use collection_patterns::{DemoConfig, DemoRunner, Section};

#[derive(Parser)]
#[command(
    name = "collection-patterns",
    version,
    about = "Run collection and language-feature demonstrations"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demonstrations
    Run {
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Only run these sections (repeatable); overrides the config file
        #[arg(short, long = "section", value_enum)]
        sections: Vec<Section>,
        /// Disable coloured headings
        #[arg(long)]
        no_color: bool,
    },
    /// List the available sections
    List,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Some(Commands::Run {
            config,
            sections,
            no_color,
        }) => run(config, sections, no_color),
        Some(Commands::List) => {
            list();
            Ok(())
        }
        None => run(None, Vec::new(), false),
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(config_path: Option<PathBuf>, sections: Vec<Section>, no_color: bool) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if !sections.is_empty() {
        config.sections = sections;
    }
    if no_color {
        config.color = false;
    }
    config.validate().context("validating command-line overrides")?;
    debug!(?config, "resolved configuration");

    let stdout = io::stdout();
    let mut runner = DemoRunner::new(stdout.lock(), config);
    runner.run()?;
    Ok(())
}

fn list() {
    for section in Section::ALL {
        println!("{:<12} {}", section.name(), section.title());
    }
}
