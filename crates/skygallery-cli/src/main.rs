mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skygallery", about = "Image gallery search pages")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one images page to HTML
    Render(commands::render::RenderArgs),
    /// Serve the images pages over HTTP
    Serve(commands::serve::ServeArgs),
    /// Show the resolved route table
    Routes(commands::routes::RoutesArgs),
    /// Print or save the default config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Serve(args) => commands::serve::run(args),
        Commands::Routes(args) => commands::routes::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
