//! Pagecraft - a terminal editor for AI-assembled product detail pages
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, Result};

/// Pagecraft - a terminal editor for AI-assembled product detail pages
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(about = "A terminal editor for AI-assembled product detail pages", long_about = None)]
struct Args {
    /// Project directory; settings are read from and exports written here
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Write a commented default config to PATH/.pagecraft/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if !project_path.is_dir() {
        bail!("Not a directory: {}", project_path.display());
    }

    if args.init_config {
        pagecraft_app::config::init_config_dir(&project_path)?;
        println!(
            "Wrote {}",
            project_path.join(".pagecraft").join("config.toml").display()
        );
        return Ok(());
    }

    // Logs go to a file; the TUI owns the terminal
    pagecraft_core::logging::init()?;
    tracing::info!(project = %project_path.display(), "Starting TUI");

    pagecraft_tui::run_with_project(&project_path).await?;
    Ok(())
}
