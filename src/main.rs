use clap::Parser;
use miette::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod discovery;
mod error;
mod parser;
mod report;
mod scanner;

use discovery::{ensure_directory, FileFinder};
use parser::PythonParser;
use report::TerminalReporter;
use scanner::ReferenceScanner;

/// GhostScan - naive dead code detection for Python source trees
#[derive(Parser, Debug)]
#[command(name = "ghostscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory to scan
    path: Vec<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output the report
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    // Exactly one root directory; anything else is a usage error. The
    // usage text goes to stdout, matching the report channel.
    if cli.path.len() != 1 {
        print_usage();
        std::process::exit(1);
    }
    let root = &cli.path[0];

    if let Err(err) = ensure_directory(root) {
        println!("Error: {}", err);
        std::process::exit(1);
    }

    info!("GhostScan v{}", env!("CARGO_PKG_VERSION"));
    run_scan(root)
}

fn print_usage() {
    println!("Usage: ghostscan <directory>");
    println!("Example: ghostscan ./src");
}

fn run_scan(root: &Path) -> Result<()> {
    use std::time::Instant;

    let start_time = Instant::now();

    // Step 1: Discover files
    info!("Discovering files...");
    let finder = FileFinder::new();
    let files = finder.find_files(root);
    info!("Found {} files to analyze", files.len());

    // Step 2: Extract definitions
    info!("Extracting definitions...");
    let mut parser = PythonParser::new();
    let mut definitions = Vec::new();
    for file in &files {
        match file.read_contents() {
            Ok(contents) => definitions.extend(parser.extract(&file.path, &contents)),
            Err(err) => debug!("Skipping unreadable file: {}", err),
        }
    }
    info!("Found {} definitions", definitions.len());

    // Step 3: Scan for references
    info!("Scanning for references...");
    let scanner = ReferenceScanner::new();
    let used = scanner.scan(&definitions, &files);

    // Step 4: Report
    let reporter = TerminalReporter::new();
    reporter.report(&files, &definitions, &used);

    let elapsed = start_time.elapsed();
    info!(
        "Scanned {} files in {:.2}s",
        files.len(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so stdout carries nothing but the report.
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
