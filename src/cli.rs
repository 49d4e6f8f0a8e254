use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{default_app_root, GeneratorPaths, LocaleConfig};
use crate::error::{GenerateError, Result};
use crate::services::payload::{self, GenerateReport};

#[derive(Debug, Parser)]
#[command(
    name = "mandara-site-i18n",
    about = "Generate the website translations.json from app store metadata and the app string catalog",
    version
)]
pub struct Cli {
    /// Website checkout; the payload lands in `assets/i18n/translations.json`.
    #[arg(long, default_value = ".")]
    pub site_root: PathBuf,

    /// App checkout holding `MandariseApp/` and `fastlane/metadata/`.
    /// Defaults to the parent of the site root.
    #[arg(long, env = "MANDARISE_ROOT")]
    pub app_root: Option<PathBuf>,

    /// Write the payload somewhere else.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Build and render everything but skip the write.
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli).map(|_| ())
}

pub fn run(cli: Cli) -> Result<GenerateReport> {
    let site_root =
        fs::canonicalize(&cli.site_root).map_err(|e| GenerateError::io(&cli.site_root, e))?;
    let app_root = cli.app_root.unwrap_or_else(|| default_app_root(&site_root));

    let paths = GeneratorPaths::from_roots(&site_root, &app_root).with_output(cli.out);
    let report = payload::generate(&paths, &LocaleConfig::BUILTIN, cli.dry_run)?;

    if report.written {
        tracing::info!(
            "generated: {} locales={}",
            report.output.display(),
            report.locales
        );
    } else {
        tracing::info!(
            "dry run: {} locales={} (not written)",
            report.output.display(),
            report.locales
        );
    }

    Ok(report)
}
