use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use patch_check::config::PatchConfig;
use patch_check::patch::metadata::{Artifact, PatchMetadata};
use patch_check::patch::overrides::plan_overrides;
use patch_check::patch::selector::select_latest;
use patch_check::version::product::ProductVersion;

#[derive(Parser)]
#[command(name = "patch-check")]
#[command(version, about = "Check product patch metadata against a build version")]
struct Cli {
    /// Optional JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a patch descriptor applies to a product build
    Check {
        /// Path to the patch descriptor (JSON)
        #[arg(long)]
        descriptor: PathBuf,

        /// Version of the product BOM in use, e.g. 3.20.1.redhat-00002
        #[arg(long)]
        product_version: String,

        /// Optional JSON list of dependency coordinates to plan overrides for
        #[arg(long)]
        artifacts: Option<PathBuf>,
    },
    /// Pick the newest patch metadata version for a product build
    Select {
        /// Version of the product BOM in use
        #[arg(long)]
        product_version: String,

        /// Candidate metadata versions, e.g. from maven-metadata.xml
        candidates: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => PatchConfig::load(path)?,
        None => PatchConfig::default(),
    };

    match cli.command {
        Command::Check {
            descriptor,
            product_version,
            artifacts,
        } => check(&config, &descriptor, &product_version, artifacts.as_deref()),
        Command::Select {
            product_version,
            candidates,
        } => select(&product_version, &candidates),
    }
}

fn check(
    config: &PatchConfig,
    descriptor: &std::path::Path,
    product_version: &str,
    artifacts: Option<&std::path::Path>,
) -> anyhow::Result<ExitCode> {
    if config.skip {
        info!("patch processing skipped by configuration");
        return Ok(ExitCode::SUCCESS);
    }

    let patch = PatchMetadata::from_path(descriptor)?;
    let build = ProductVersion::parse(product_version);

    if !patch.targets(&config.product.group_id, &config.product.artifact_id) {
        warn!(
            "descriptor targets {}/{}, expected {}/{}",
            patch.product_group_id,
            patch.product_artifact_id,
            config.product.group_id,
            config.product.artifact_id
        );
        println!("not applicable");
        return Ok(ExitCode::FAILURE);
    }

    if !patch.applies_to(&build) {
        warn!(
            "patch is applicable to product versions {} and can't be used with {}",
            patch.product_version_range, product_version
        );
        println!("not applicable");
        return Ok(ExitCode::FAILURE);
    }

    info!(
        "patch metadata found for {}/{}/{}",
        patch.product_group_id, patch.product_artifact_id, patch.product_version_range
    );
    println!(
        "applicable: {} CVE fix(es), {} patch fix(es)",
        patch.cves.len(),
        patch.fixes.len()
    );

    if let Some(path) = artifacts {
        let content = std::fs::read_to_string(path)?;
        let artifacts: Vec<Artifact> = serde_json::from_str(&content)?;
        let overrides = plan_overrides(&patch, &artifacts);
        println!("{}", serde_json::to_string_pretty(&overrides)?);
    }

    Ok(ExitCode::SUCCESS)
}

fn select(product_version: &str, candidates: &[String]) -> anyhow::Result<ExitCode> {
    let build = ProductVersion::parse(product_version);
    match select_latest(&build, candidates) {
        Some(version) => {
            println!("{version}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            warn!("no patch metadata candidate matches {}", product_version);
            Ok(ExitCode::FAILURE)
        }
    }
}
