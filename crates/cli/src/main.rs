mod logging;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::path::PathBuf;

use vault2hexo_core::config::expand_path;

#[derive(Debug, Parser)]
#[command(name = "vault2hexo", version, about = "Transfer Obsidian notes to a Hexo blog")]
struct Cli {
    /// Path to the Obsidian vault directory.
    #[arg(long, value_name = "PATH")]
    obsidian: String,

    /// Path to the Hexo project directory.
    #[arg(long, value_name = "PATH")]
    hexo: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    logging::init(&logging::LoggingConfig::from_env());
    let result = run(&cli);
    logging::flush();

    result
}

fn run(cli: &Cli) -> Result<()> {
    let vault_root = resolve(&cli.obsidian)?;
    let site_root = resolve(&cli.hexo)?;

    let report = vault2hexo_core::publish(&vault_root, &site_root)
        .wrap_err("publishing failed")?;

    tracing::info!(
        "Done: {} published, {} skipped, {} images copied, {} missing, {} failed",
        report.notes_published,
        report.notes_skipped,
        report.images_copied,
        report.images_missing,
        report.images_failed
    );

    Ok(())
}

fn resolve(arg: &str) -> Result<PathBuf> {
    expand_path(arg).wrap_err_with(|| format!("invalid path '{arg}'"))
}
