use regex::Regex;
use thiserror::Error;

use std::path::{Component, Path};

/// Rules deciding which entries of a tree are left out of the index. Each rule is
/// matched against the path relative to the scanned root, using `/` as separator
/// and with a trailing `/` for directories
#[derive(Debug, Clone, Default)]
pub struct ExcludeList {
    list: Vec<Regex>,
}
#[derive(Error, Debug)]
pub enum ExcludeListError {
    #[error("Exclude List Error: Failed to parse rule to regex\nrule: {rule}\nreason: {err}")]
    UnparsableRule { rule: String, err: regex::Error },
}
fn unparerr<S: std::string::ToString>(rule: S) -> impl Fn(regex::Error) -> ExcludeListError {
    move |err: regex::Error| -> ExcludeListError {
        ExcludeListError::UnparsableRule {
            rule: rule.to_string(),
            err,
        }
    }
}
impl ExcludeList {
    pub fn empty() -> ExcludeList {
        ExcludeList { list: Vec::new() }
    }
    pub fn from(rules: &[String]) -> Result<ExcludeList, ExcludeListError> {
        ExcludeList::empty().join(rules)
    }
    pub fn join(self, rules: &[String]) -> Result<ExcludeList, ExcludeListError> {
        let mut list = self.list;
        for rule in rules {
            let rgx = Regex::new(rule).map_err(unparerr(rule))?;
            list.push(rgx);
        }
        Ok(ExcludeList { list })
    }
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn should_exclude(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.list.is_empty() {
            return false;
        }
        let path_as_string = {
            let mut tmp = rel_path
                .components()
                .filter_map(|comp| match comp {
                    Component::Normal(name) => Some(name.to_string_lossy()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("/");
            if is_dir {
                tmp.push('/');
            }
            tmp
        };

        self.list
            .iter()
            .any(|rule| rule.is_match(path_as_string.as_str()))
    }
}
