use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bump_pkg::config;
use bump_pkg::ui;
use bump_pkg::{BumpKind, Change, ManifestBumper};

#[derive(clap::Parser)]
#[command(
    name = "bump-pkg",
    version,
    about = "Bump the semantic version in a package.json manifest"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Manifest to update (defaults to package.json)")]
    manifest: Option<PathBuf>,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Increment the major version and reset minor and patch
    Major,
    /// Increment the minor version and reset patch
    Minor,
    /// Increment the patch version
    Patch,
    /// Bump by kind: major, minor or patch
    Bump { kind: String },
    /// Attach a pre-release label, replacing any existing one
    Pre { identifier: Option<String> },
    /// Strip the pre-release label
    Release,
    /// Print the current version
    Get,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;
    let manifest = args.manifest.unwrap_or_else(|| config.manifest.clone());
    let bumper = ManifestBumper::fs().trailing_newline(config.output.trailing_newline);

    let change = match args.command {
        Command::Get => {
            let version = bumper
                .get_version(&manifest)
                .with_context(|| format!("Failed to read version from {}", manifest.display()))?;
            ui::display_version(&version);
            return Ok(());
        }
        Command::Major => Change::Bump(BumpKind::Major),
        Command::Minor => Change::Bump(BumpKind::Minor),
        Command::Patch => Change::Bump(BumpKind::Patch),
        Command::Bump { kind } => Change::Bump(BumpKind::parse(&kind)?),
        Command::Pre { identifier } => {
            Change::AddPreRelease(identifier.unwrap_or(config.pre_release.identifier))
        }
        Command::Release => Change::RemovePreRelease,
    };

    let result = bumper
        .apply(&manifest, &change)
        .with_context(|| format!("Failed to update {}", manifest.display()))?;

    ui::display_version_change(&manifest, &result.from, &result.to);
    ui::display_success(&format!("Version is now {}", result.to));
    Ok(())
}
