//! CLI entry point for listfile

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use listfile::output::DEFAULT_DELIMITER;
use listfile::{DelimitedFormatter, DirectoryLister, ListError, ListerConfig, OutputConfig};
use log::LevelFilter;

const MISSING_PATH_MESSAGE: &str = "Please input source path.";

#[derive(Parser, Debug)]
#[command(name = "listfile")]
#[command(about = "List all files under a directory, subfolders included, one delimited line per file")]
#[command(version)]
struct Args {
    /// Directory to list
    path: Option<PathBuf>,

    /// Field delimiter
    #[arg(short = 's', long = "split", value_name = "DELIM", default_value = DEFAULT_DELIMITER)]
    split: String,

    /// Print each subfolder's name on its own line before its files
    #[arg(short = 'b', long = "show-subdir-name", alias = "showsubname")]
    show_subdir_name: bool,

    /// Wrap path, name and digest fields in double quotes
    #[arg(short = 'q', long = "quote", alias = "showquation")]
    quote: bool,

    /// Append the file's MD5 digest
    #[arg(short = 'm', long = "md5", alias = "showmd5")]
    md5: bool,

    /// Append the file's SHA-256 digest
    #[arg(short = 'a', long = "sha256", alias = "showsha256")]
    sha256: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Map the -v count to a level; RUST_LOG still wins when set.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(root: &Path, args: &Args) -> Result<(), ListError> {
    let lister = DirectoryLister::new(ListerConfig {
        announce_subdirectories: args.show_subdir_name,
        include_md5: args.md5,
        include_sha256: args.sha256,
    });
    let mut formatter = DelimitedFormatter::stdout(OutputConfig {
        delimiter: args.split.clone(),
        quote_fields: args.quote,
    });

    log::info!("listing {}", root.display());
    let result = lister.list(root, &mut formatter);

    // Keep whatever was printed before a failure
    let flushed = formatter.flush();
    result?;
    flushed?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let Some(root) = args.path.as_deref() else {
        println!("{}", MISSING_PATH_MESSAGE);
        return;
    };

    if let Err(e) = run(root, &args) {
        log::debug!("{:?}", e);
        eprintln!("listfile: {}", e);
        process::exit(1);
    }
}
