//! CLI entry point for scssdoc

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use scssdoc::file_utils::{parse_file_size, read_stdin, set_max_file_size};
use scssdoc::{
    FileDocs, OutputConfig, ScanConfig, ScssDocError, collect_files, extract_files, parse,
    print_json, print_text,
};
use tracing::Level;

/// Path argument that reads from standard input.
const STDIN_ARG: &str = "-";
/// Path reported for standard input.
const STDIN_NAME: &str = "<stdin>";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "scssdoc")]
#[command(about = "List the documented variables and mixins of SCSS files")]
#[command(version)]
struct Args {
    /// Files or directories to scan ("-" reads standard input)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Scan all files (ignore .gitignore filtering)
    #[arg(short, long)]
    all: bool,

    /// Show the full comment, not just its first line
    #[arg(short = 'f', long = "full-comment")]
    full_comment: bool,

    /// Wrap comments at column width (default: 100, 0 to disable)
    #[arg(short = 'w', long = "wrap", default_value = "100")]
    wrap: usize,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Number of parallel workers
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Maximum size of a file to parse (default: 1MB)
    /// Larger files are skipped. Use suffixes: K, M, G (e.g., 5M for 5MB)
    #[arg(long = "max-file-size", value_name = "SIZE")]
    max_file_size: Option<String>,

    /// Log progress to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(ref size_str) = args.max_file_size {
        match parse_file_size(size_str) {
            Ok(size) => set_max_file_size(size),
            Err(e) => {
                eprintln!("scssdoc: --max-file-size: {}", e);
                process::exit(1);
            }
        }
    }

    let scan_config = ScanConfig {
        show_all: args.all,
        parallel_workers: args.jobs,
    };

    let files = match gather(&args.paths, &scan_config) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("scssdoc: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&files)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            full_comment: args.full_comment,
            wrap_width: if args.wrap == 0 {
                None
            } else {
                Some(args.wrap)
            },
        };
        print_text(&files, output_config).map_err(ScssDocError::from)
    };

    if let Err(e) = result {
        eprintln!("scssdoc: {}", e);
        process::exit(1);
    }
}

/// Parse every input. Files that cannot be read are reported and skipped;
/// a missing path or unreadable stdin is fatal.
fn gather(paths: &[PathBuf], config: &ScanConfig) -> scssdoc::Result<Vec<FileDocs>> {
    let mut files = Vec::new();
    let mut pending = Vec::new();

    for path in paths {
        if path == Path::new(STDIN_ARG) {
            files.extend(flush(&mut pending, config)?);
            let source = read_stdin()?;
            files.push(FileDocs {
                path: PathBuf::from(STDIN_NAME),
                docs: parse(&source),
            });
        } else {
            pending.push(path.clone());
        }
    }
    files.extend(flush(&mut pending, config)?);

    Ok(files)
}

fn flush(pending: &mut Vec<PathBuf>, config: &ScanConfig) -> scssdoc::Result<Vec<FileDocs>> {
    if pending.is_empty() {
        return Ok(Vec::new());
    }
    let roots = std::mem::take(pending);
    let paths = collect_files(&roots, config)?;

    let mut files = Vec::with_capacity(paths.len());
    for result in extract_files(&paths, config) {
        match result {
            Ok(file) => files.push(file),
            Err(e) => eprintln!("scssdoc: warning: {}", e),
        }
    }
    Ok(files)
}
