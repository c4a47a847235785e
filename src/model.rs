use fs_index::{ExcludeList, IndexOptions, SizeAccounting};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

pub const DEFAULT_REPORT_NAME: &str = "missing_files.txt";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub exclude_list: Vec<String>,
    pub report_name: String,
    pub size_accounting: SizeAccounting,
}
impl Default for Config {
    fn default() -> Self {
        Config {
            exclude_list: Vec::new(),
            report_name: String::from(DEFAULT_REPORT_NAME),
            size_accounting: SizeAccounting::Stat,
        }
    }
}
impl Config {
    fn path(home_dir: &Path) -> PathBuf {
        home_dir
            .join(".config")
            .join("backcheck")
            .join("config.toml")
    }
    /// Load the config at `explicit` if given (it must exist), otherwise the one in
    /// the home directory, falling back to the defaults if there is none
    pub fn load(home_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Config::path(home_dir);
                if !path.exists() {
                    return Ok(Config::default());
                }
                path
            }
        };
        let config: Config = abst_fs::load(&path)
            .with_context(|| format!("failed to load config at {}", path.display()))?;
        Ok(config)
    }
}

pub struct Flags {
    pub quiet: bool,
    pub progress: bool,
    pub hashed_only: bool,
}
pub struct ProcessConfig {
    pub source: PathBuf,
    pub destinations: Vec<PathBuf>,
    pub options: IndexOptions,
    pub report_name: String,
    pub flags: Flags,
}
impl ProcessConfig {
    /// Merge the command line on top of the config: exclude rules are added to the
    /// configured ones, flags override settings
    pub fn from(
        config: Config,
        source: PathBuf,
        destinations: Vec<PathBuf>,
        exclude: &[String],
        flags: Flags,
    ) -> Result<ProcessConfig> {
        if destinations.is_empty() {
            anyhow::bail!("at least one destination directory is needed");
        }
        let report_name = config.report_name;
        if report_name.is_empty()
            || Path::new(&report_name).file_name() != Some(std::ffi::OsStr::new(&report_name))
        {
            anyhow::bail!("report name [{report_name}] should be a plain file name");
        }

        let exclude_list = ExcludeList::from(&config.exclude_list)
            .context("invalid exclude rule in config")?
            .join(exclude)
            .context("invalid exclude rule on command line")?;
        let accounting = if flags.hashed_only {
            SizeAccounting::Hashed
        } else {
            config.size_accounting
        };

        Ok(ProcessConfig {
            source,
            destinations,
            options: IndexOptions {
                exclude_list,
                accounting,
            },
            report_name,
            flags,
        })
    }
    pub fn report_path(&self) -> PathBuf {
        self.source.join(&self.report_name)
    }
}
