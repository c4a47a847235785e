use crate::model::Flags;

use colored::Colorize;
use fs_index::{ScanError, ScanObserver};
use indicatif::{ProgressBar, ProgressStyle};

use std::path::Path;

/// How the directories visited by a scan are shown. Errors are always printed to
/// stderr, one per line
pub enum Progress {
    Lines,
    Spinner(ProgressBar),
    Quiet,
}
impl Progress {
    pub fn from(flags: &Flags, name: &'static str) -> Progress {
        if flags.quiet {
            Progress::Quiet
        } else if flags.progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} [{prefix}]\t{elapsed_precise}\t{wide_msg}"),
            );
            pb.set_prefix(name);
            pb.enable_steady_tick(100);
            Progress::Spinner(pb)
        } else {
            Progress::Lines
        }
    }
    pub fn finish(self) {
        if let Progress::Spinner(pb) = self {
            pb.finish_and_clear();
        }
    }
}
impl ScanObserver for Progress {
    fn directory(&mut self, path: &Path) {
        match self {
            Progress::Lines => println!("{}", path.display()),
            Progress::Spinner(pb) => pb.set_message(path.display().to_string()),
            Progress::Quiet => {}
        }
    }
    fn error(&mut self, err: &ScanError) {
        let line = format!("{} {err}", "error:".red().bold());
        match self {
            // the spinner draws on stderr, print above it instead of through it
            Progress::Spinner(pb) => pb.println(line),
            _ => eprintln!("{line}"),
        }
    }
}
