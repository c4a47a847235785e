mod check;
mod model;
mod progress;
mod report;
use model::*;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// Source directory, followed by one or more destination directories
    #[clap(value_parser)]
    roots: Vec<PathBuf>,

    /// Leave out entries whose path (relative to their root) matches this regex
    #[clap(short, long, value_parser)]
    exclude: Vec<String>,

    /// Don't print the directories being scanned
    #[clap(short, long, value_parser)]
    quiet: bool,

    /// Show a spinner with the directory being scanned instead of one line each
    #[clap(short, long, value_parser)]
    progress: bool,

    /// Only count the size of the files that could be hashed
    #[clap(long, value_parser)]
    hashed_only: bool,

    /// Use this config file instead of the one in the home directory
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Set fake home directory
    #[clap(short = 'H', long, value_parser)]
    home_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.roots.len() < 2 {
        println!("Usage: backcheck <source> <dest> [<dest> ...]");
        return Ok(());
    }

    let home_dir = match args.home_dir {
        Some(val) => val,
        None => abst_fs::home_dir().context("could not resolve home_dir path")?,
    };
    let config = Config::load(&home_dir, args.config.as_deref())?;

    let mut roots = args.roots.into_iter();
    let source = roots.next().context("missing source directory")?;
    let process_config = ProcessConfig::from(
        config,
        source,
        roots.collect(),
        &args.exclude,
        Flags {
            quiet: args.quiet,
            progress: args.progress,
            hashed_only: args.hashed_only,
        },
    )?;

    let outcome = check::check(&process_config);
    if !outcome.is_clean() {
        let mut reasons = format!("{} scan errors", outcome.scan_errors);
        if outcome.report_failed {
            reasons += ", report not written";
        }
        eprintln!(
            "{} the check is incomplete ({reasons})",
            "warning:".yellow().bold()
        );
        std::process::exit(1);
    }
    Ok(())
}
