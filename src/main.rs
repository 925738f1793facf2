//! CLI entry point for vaultmap

use std::path::PathBuf;
use std::process;

use clap::Parser;
use vaultmap::{Folder, IndexFilter, summarize, summarize_tree};

#[derive(Parser, Debug)]
#[command(name = "vaultmap")]
#[command(about = "Summarize a note vault's folder tree as compact JSON for LLM agents")]
#[command(version)]
struct Args {
    /// Vault root directory
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Keep empty folders in the listing instead of eliding them
    #[arg(short = 'f', long = "full-listing")]
    full_listing: bool,

    /// Only index files matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "include")]
    include: Vec<String>,

    /// Skip files matching pattern (can be used multiple times)
    #[arg(short = 'X', long = "exclude")]
    exclude: Vec<String>,

    /// Print the JSON tree without the schema preamble
    #[arg(long = "no-preamble")]
    no_preamble: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.include.is_empty() && args.exclude.is_empty() {
        None
    } else {
        match IndexFilter::from_patterns(&args.include, &args.exclude) {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("vaultmap: invalid pattern: {}", e);
                process::exit(1);
            }
        }
    };

    let vault = match Folder::from_disk(&args.path) {
        Ok(vault) => vault,
        Err(e) => {
            eprintln!("vaultmap: cannot read '{}': {}", args.path.display(), e);
            process::exit(1);
        }
    };

    let result = if args.no_preamble {
        summarize_tree(&vault, filter.as_ref(), args.full_listing)
    } else {
        summarize(&vault, filter.as_ref(), args.full_listing)
    };

    match result {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            eprintln!("vaultmap: error encoding summary: {}", e);
            process::exit(1);
        }
    }
}
