//! CLI that reads HTML from a file or stdin and writes outlined HTML to stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rs_outliner::{outline_bytes_with_options, Options, Result};

/// Outline the text of an HTML document with a CSS text stroke.
#[derive(Parser, Debug)]
#[command(name = "outline", version, about, long_about = None)]
struct Cli {
    /// Input HTML file (default: stdin).
    input: Option<PathBuf>,

    /// Stroke width, e.g. `4px` or `0.1em`.
    #[arg(long)]
    width: Option<String>,

    /// Stroke color, e.g. `#000000` or `red`.
    #[arg(long)]
    color: Option<String>,

    /// CSS selector for the roots to outline (default: the body).
    #[arg(long)]
    selector: Option<String>,

    /// JSON options file; flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON summary of the run to stderr.
    #[arg(long)]
    report: bool,

    /// Log level for tracing output.
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

fn init_logging(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Config file first, then explicit flags.
fn resolve_options(cli: &Cli) -> Result<Options> {
    let mut options = match &cli.config {
        Some(path) => Options::from_json(&fs::read_to_string(path)?)?,
        None => Options::default(),
    };
    if let Some(width) = &cli.width {
        options.width.clone_from(width);
    }
    if let Some(color) = &cli.color {
        options.color.clone_from(color);
    }
    if cli.selector.is_some() {
        options.selector.clone_from(&cli.selector);
    }
    Ok(options)
}

fn read_input(input: Option<&PathBuf>) -> Result<Vec<u8>> {
    match input {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = resolve_options(cli)?;
    let html = read_input(cli.input.as_ref())?;
    tracing::info!(bytes = html.len(), "read input");

    let result = outline_bytes_with_options(&html, &options)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(result.html.as_bytes())?;
    stdout.flush()?;

    if cli.report {
        eprintln!("{}", serde_json::to_string(&result.report).unwrap_or_default());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("outline: {e}");
            ExitCode::FAILURE
        }
    }
}
