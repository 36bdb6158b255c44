//! debug-toggle: comment and uncomment marked debug sections in source files.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use debug_toggle::{batch, config, input, logging, scanner, session};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "debug-toggle")]
#[command(
    about = "Comment and uncomment marked debug sections in source files",
    long_about = None
)]
struct Args {
    /// Files or directories to process
    #[arg(value_name = "PATH", default_value = ".")]
    paths: Vec<PathBuf>,

    /// Transition to apply to the selected sections
    #[arg(long, short = 'm', value_enum, default_value_t = scanner::Transition::Toggle)]
    mode: scanner::Transition,

    /// Descend into subdirectories
    #[arg(long, short = 'r')]
    recursive: bool,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Only touch sections with these tags
    #[arg(long, short = 't', value_name = "TAG", value_delimiter = ',')]
    tags: Vec<String>,

    /// Never touch sections with these tags
    #[arg(long, value_name = "TAG", value_delimiter = ',')]
    except: Vec<String>,

    /// Read commands from stdin instead of applying a single mode
    #[arg(long, short = 'i')]
    interactive: bool,

    /// Report what would change without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Print the batch report as JSON
    #[arg(long)]
    json: bool,

    /// Tracing filter directive (overrides the config file)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Configuration file to load instead of ./debug-toggle.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => config::Config::load_from(path),
        None => config::Config::load(),
    };
    let mut cfg = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions.clone_from(&args.ext);
    }
    if args.recursive {
        cfg.recursive = true;
    }
    if let Some(level) = &args.log_level {
        cfg.log_level.clone_from(level);
    }
    let cfg = cfg;

    logging::init_logging(&cfg);

    let documents = match input::find_documents(&args.paths, &cfg) {
        Ok(documents) => documents,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if documents.is_empty() {
        eprintln!("No matching files found");
        return ExitCode::SUCCESS;
    }

    let result = if args.interactive {
        run_interactive(documents, &cfg, &args)
    } else {
        run_batch(&documents, &cfg, &args)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_batch(documents: &[PathBuf], cfg: &config::Config, args: &Args) -> io::Result<bool> {
    let mut filter = scanner::Filter::all();
    if !args.tags.is_empty() {
        filter = filter.with_only(args.tags.iter().cloned());
    }
    if !args.except.is_empty() {
        filter = filter.with_except(args.except.iter().cloned());
    }

    let report = batch::process_files(documents, args.mode, &filter, cfg, args.dry_run);

    if args.json {
        let json = report.to_json().map_err(io::Error::other)?;
        println!("{json}");
    } else {
        println!("Processing {} file(s)...\n", report.total());
        for outcome in &report.outcomes {
            println!("{outcome}");
        }
        println!("\n{}", report.summary());
    }

    Ok(report.is_success())
}

fn run_interactive(documents: Vec<PathBuf>, cfg: &config::Config, args: &Args) -> io::Result<bool> {
    let session = session::Session::new(documents, cfg, args.dry_run);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(true)
}
