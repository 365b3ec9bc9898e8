//! siglex: Lexical analyzer CLI for the signal description language.
//!
//! Usage:
//!   siglex [options] <DIRECTORY>
//!
//! Reads `<DIRECTORY>/test.sig` (or the configured input) and writes lexical
//! errors followed by the lexeme listing to `<DIRECTORY>/generated.txt`.

use clap::Parser as ClapParser;
use miette::{IntoDiagnostic, WrapErr};
use siglex_options::{load_project_config, parse_config_file, ClassifierProfile};
use siglex_scanner::Analyzer;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

#[derive(ClapParser, Debug)]
#[command(name = "siglex", about = "siglex - lexical analyzer for the signal description language", version)]
struct Cli {
    /// Project directory holding the source file.
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Source file name inside the directory (default: test.sig).
    #[arg(short = 'i', long)]
    input: Option<String>,

    /// Listing file name inside the directory (default: generated.txt).
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Path to a siglex.json file (default: <DIRECTORY>/siglex.json if present).
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write only lexical errors, without the lexeme listing.
    #[arg(long = "no-listing")]
    no_listing: bool,

    /// Classify with the legacy character ranges.
    #[arg(long = "legacy-classifier")]
    legacy_classifier: bool,

    /// Log scanner activity to stderr.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Disable colored output even on terminals.
    #[arg(long = "no-color")]
    no_color: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_color = color_enabled(cli.no_color, atty_is_terminal());
    match run(&cli, use_color) {
        Ok(code) => code,
        Err(report) => {
            print_fatal(&report, use_color);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, use_color: bool) -> miette::Result<ExitCode> {
    let start = Instant::now();

    let config = match cli.config {
        Some(ref path) => parse_config_file(path),
        None => load_project_config(&cli.directory),
    }
    .into_diagnostic()
    .wrap_err("Failed to load configuration")?;

    // CLI options override siglex.json
    let mut options = config.options();
    if cli.legacy_classifier { options.classifier = ClassifierProfile::Legacy; }
    if cli.no_listing { options.print_listing = false; }

    let in_path = cli
        .directory
        .join(cli.input.as_deref().unwrap_or(config.input_file()));
    let out_path = cli
        .directory
        .join(cli.output.as_deref().unwrap_or(config.output_file()));

    let in_file = File::open(&in_path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to open input file '{}'", in_path.display()))?;
    let out_file = File::create(&out_path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to open output file '{}'", out_path.display()))?;

    info!(input = %in_path.display(), output = %out_path.display(), ?options, "analyzing");

    let result = Analyzer::with_options(&options, BufReader::new(in_file), BufWriter::new(out_file))
        .analyze(options.print_listing)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to analyze '{}'", in_path.display()))?;

    for diag in result.diagnostics.diagnostics() {
        print_diagnostic(&in_path.display().to_string(), diag, use_color);
    }

    if !result.is_success() {
        print_error(&format!("lexer failed with {} error(s)", result.error_count()), use_color);
        return Ok(ExitCode::from(2));
    }

    if use_color {
        eprintln!(
            "{}{} lexemes written to {} in {:.2}s.{}",
            GRAY,
            result.lexemes.len(),
            out_path.display(),
            start.elapsed().as_secs_f64(),
            RESET
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
        .with(filter)
        .init();
}

fn print_diagnostic(file: &str, diag: &siglex_diagnostics::Diagnostic, use_color: bool) {
    if use_color {
        eprintln!(
            "{}{}{}({}): {}{}error{}: {}",
            CYAN, file, RESET,
            diag.position,
            BOLD, RED, RESET,
            diag.message_text
        );
    } else {
        eprintln!("{}: {}", file, diag);
    }
}

fn print_error(msg: &str, use_color: bool) {
    if use_color {
        eprintln!("{}{}Error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("Error: {}", msg);
    }
}

/// Configuration and file failures: one `error: ...` line with the cause chain.
fn print_fatal(report: &miette::Report, use_color: bool) {
    let msg = fatal_message(report);
    if use_color {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn fatal_message(report: &miette::Report) -> String {
    report
        .chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

fn color_enabled(no_color: bool, is_terminal: bool) -> bool {
    !no_color && is_terminal
}

fn atty_is_terminal() -> bool {
    // Simple check - on Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
