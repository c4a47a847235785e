use colored::Colorize;
use fs_index::{MissingSet, Scan};

use anyhow::{Context, Result};

use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

const SIZE_NAMES: [(f64, &str); 4] = [
    (1024.0 * 1024.0 * 1024.0 * 1024.0, "TiB"),
    (1024.0 * 1024.0 * 1024.0, "GiB"),
    (1024.0 * 1024.0, "MiB"),
    (1024.0, "KiB"),
];

/// Human readable size in binary units, using the largest unit the size exceeds
pub fn fmt_size(size: f64) -> String {
    for (unit, name) in SIZE_NAMES {
        if size > unit {
            return format!("{:.2} {}", size / unit, name);
        }
    }
    format!("{:.0} B", size)
}

pub fn fmt_speed(bytes: u64, elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return String::from("n/a");
    }
    format!("{}/s", fmt_size(bytes as f64 / secs))
}

pub struct Summary<'a> {
    pub source: &'a Scan,
    pub dest: &'a Scan,
    pub missing: &'a MissingSet,
}
impl std::fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Summary {
            source,
            dest,
            missing,
        } = self;
        writeln!(
            f,
            "                 total read time: {:?}\n",
            source.elapsed + dest.elapsed
        )?;

        writeln!(f, "              source files count: {}", source.index.len())?;
        writeln!(
            f,
            "               source files size: {}",
            fmt_size(source.index.total_bytes() as f64)
        )?;
        writeln!(
            f,
            "         source files read speed: {}\n",
            fmt_speed(source.index.total_bytes(), source.elapsed)
        )?;

        writeln!(f, "         destination files count: {}", dest.index.len())?;
        writeln!(
            f,
            "          destination files size: {}",
            fmt_size(dest.index.total_bytes() as f64)
        )?;
        writeln!(
            f,
            "    destination files read speed: {}\n",
            fmt_speed(dest.index.total_bytes(), dest.elapsed)
        )?;

        let errors = source.errors.len() + dest.errors.len();
        if errors > 0 {
            writeln!(
                f,
                "                     scan errors: {} {}",
                errors,
                "(partial scan)".yellow()
            )?;
        }
        let count = missing.len().to_string();
        let count = if missing.is_empty() {
            count.green()
        } else {
            count.red().bold()
        };
        writeln!(f, "                   MISSING files: {count}")
    }
}

/// Write the missing paths to the report at `path`, replacing any previous one
pub fn write_report(path: &Path, missing: &MissingSet) -> Result<()> {
    let file = abst_fs::create_file(path).context("could not create missing file report")?;
    missing
        .write_to(BufWriter::new(file))
        .with_context(|| format!("could not write missing file report at {}", path.display()))
}
