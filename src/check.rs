use crate::model::ProcessConfig;
use crate::progress::Progress;
use crate::report::{self, Summary};

use colored::Colorize;
use fs_index::{build_index, missing_files, MissingSet};

pub struct Outcome {
    pub missing: MissingSet,
    pub scan_errors: usize,
    pub report_failed: bool,
}
impl Outcome {
    /// Whether every file was scanned and the report (if any) was written
    pub fn is_clean(&self) -> bool {
        self.scan_errors == 0 && !self.report_failed
    }
}

/// Index the source, then all the destinations together, and report the source
/// files whose content is found in none of the destinations
pub fn check(config: &ProcessConfig) -> Outcome {
    let mut progress = Progress::from(&config.flags, "source");
    let source = build_index(&[&config.source], &config.options, &mut progress);
    progress.finish();

    let mut progress = Progress::from(&config.flags, "destination");
    let dest = build_index(config.destinations.as_slice(), &config.options, &mut progress);
    progress.finish();

    let missing = missing_files(&source.index, &dest.index);
    println!();
    print!(
        "{}",
        Summary {
            source: &source,
            dest: &dest,
            missing: &missing,
        }
    );

    let mut outcome = Outcome {
        missing,
        scan_errors: source.errors.len() + dest.errors.len(),
        report_failed: false,
    };
    if outcome.missing.is_empty() {
        return outcome;
    }

    let report_path = config.report_path();
    println!(
        "\nWriting missing file report to: {}",
        report_path.display()
    );
    if let Err(err) = report::write_report(&report_path, &outcome.missing) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        outcome.report_failed = true;
    }
    outcome
}
