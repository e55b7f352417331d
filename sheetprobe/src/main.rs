use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use sheetprobe_core::{LoaderKind, Probe, ProbeConfig};
use std::path::PathBuf;
use tracing::{Level, info};

mod formatter;

#[derive(Parser)]
#[command(name = "sheetprobe")]
#[command(about = "Inspect spreadsheet headers against required column profiles", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file to inspect (defaults to the configured path)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Required-column profile: snake, pascal or a profile from the config
    #[arg(short, long, value_name = "NAME")]
    profile: Option<String>,

    /// Loader used to read the first sheet (defaults to the profile's loader)
    #[arg(short, long, value_enum)]
    loader: Option<LoaderArg>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Show how headers map to canonical column keys
    #[arg(long)]
    mapping: bool,

    /// Increase diagnostic logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum LoaderArg {
    /// Header row becomes column labels, shape counts data rows
    Table,
    /// Raw cells from A1, header row included, clipped preview
    Cells,
}

impl From<LoaderArg> for LoaderKind {
    fn from(arg: LoaderArg) -> Self {
        match arg {
            LoaderArg::Table => LoaderKind::Table,
            LoaderArg::Cells => LoaderKind::Cells,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        ProbeConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        ProbeConfig::default()
    };
    config.validate().context("Invalid configuration")?;

    let profile_name = cli
        .profile
        .as_deref()
        .unwrap_or_else(|| config.default_profile_name());
    let profile = config.profile(profile_name)?;
    let loader = cli.loader.map(LoaderKind::from).unwrap_or(profile.loader);

    let probe = Probe::new(profile)
        .with_loader(loader)
        .with_limits(config.preview_limits(loader))
        .with_mapping(cli.mapping);

    let path = cli.file.unwrap_or_else(|| config.default_path());
    info!(
        path = %path.display(),
        profile = %probe.profile().name,
        loader = probe.loader().as_str(),
        "probing"
    );

    // Diagnostic failures are reported, never propagated
    let outcome = probe.run(&path);
    if let Err(err) = &outcome {
        info!(error = %err, "probe failed");
    }

    match cli.format {
        OutputFormat::Human => formatter::print_human(&path, &outcome),
        OutputFormat::Json => formatter::print_json(&path, &outcome)?,
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
