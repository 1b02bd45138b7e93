use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use naep_matrix::launcher::ShellLauncher;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "naep-matrix",
    version,
    about = "Run NAeP over every test asset with rotating flag combinations"
)]
struct Cli {
    /// Directory of test assets (walked recursively)
    #[arg(long, default_value = naep_matrix::DEFAULT_TEST_DIR)]
    dir: PathBuf,

    /// NAeP executable placed at the front of the command
    #[arg(long, default_value = naep_matrix::DEFAULT_TOOL)]
    tool: String,

    /// Print the command without running it
    #[arg(long)]
    dry_run: bool,

    /// Output format (json prints the invocation matrix and never executes)
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    log::info!("Scanning {}", cli.dir.display());
    let command = naep_matrix::build_command(&cli.dir, &cli.tool)
        .with_context(|| format!("Failed to scan {}", cli.dir.display()))?;
    log::info!("{} invocations", command.invocations.len());

    match cli.format {
        OutputFormat::Json => {
            let json = command.to_json().context("Failed to serialize matrix")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            naep_matrix::run(&command, cli.dry_run, &mut ShellLauncher)
                .context("Failed to run NAeP")?;
        }
    }

    Ok(())
}
