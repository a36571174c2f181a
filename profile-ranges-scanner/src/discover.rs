use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use ahash::HashSet;
use walkdir::WalkDir;

/// A directory holding the measurements of one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub path: PathBuf,
    /// The scenario kind, i.e. the directory name.
    pub kind: String,
}

impl Scenario {
    pub fn new(path: impl Into<PathBuf>, kind: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: kind.into(),
        }
    }
}

/// Decides whether a directory is a scenario by looking at its basename.
#[derive(Debug, Clone, Default)]
pub struct ScenarioFilter {
    kinds: HashSet<String>,
}

impl ScenarioFilter {
    pub fn new<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the scenario kind if `name` is one of the recognized labels.
    pub fn kind_of<'a>(&self, name: &'a OsStr) -> Option<&'a str> {
        name.to_str().filter(|name| self.kinds.contains(*name))
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| self.kind_of(name))
            .is_some()
    }
}

/// Lazily walks a result tree and yields every scenario directory below the root.
///
/// Directories that are not scenarios are still descended into, so scenarios may be nested at
/// any depth. Entries are visited in file name order. Unreadable entries are skipped.
pub struct ScenarioDirs<'a> {
    walker: walkdir::IntoIter,
    filter: &'a ScenarioFilter,
}

impl<'a> ScenarioDirs<'a> {
    pub fn new(root: impl AsRef<Path>, filter: &'a ScenarioFilter) -> Self {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();
        Self { walker, filter }
    }
}

impl Iterator for ScenarioDirs<'_> {
    type Item = Scenario;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(%err, "skipping unreadable entry in result tree");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let Some(kind) = self.filter.kind_of(entry.file_name()) else {
                continue;
            };
            let kind = kind.to_owned();

            return Some(Scenario {
                path: entry.into_path(),
                kind,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> ScenarioFilter {
        ScenarioFilter::new(["cold", "warm", "preload"])
    }

    #[test]
    fn test_filter_matches_basename_only() {
        let filter = default_filter();
        assert!(filter.matches(Path::new("OUTPUT/app/cold")));
        assert!(filter.matches(Path::new("warm")));
        assert!(!filter.matches(Path::new("OUTPUT/cold/scratch")));
        assert!(!filter.matches(Path::new("OUTPUT/colder")));
        assert!(!ScenarioFilter::default().matches(Path::new("cold")));
    }

    #[test]
    fn test_walk_yields_only_scenarios() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["cold", "warm", "preload", "scratch"] {
            std::fs::create_dir_all(dir.path().join("app").join(name)).unwrap();
        }
        // A file named like a scenario is not a scenario.
        std::fs::write(dir.path().join("app").join("scratch").join("cold"), "").unwrap();

        let filter = default_filter();
        let scenarios = ScenarioDirs::new(dir.path(), &filter).collect::<Vec<_>>();

        assert_eq!(
            scenarios,
            [
                Scenario::new(dir.path().join("app").join("cold"), "cold"),
                Scenario::new(dir.path().join("app").join("preload"), "preload"),
                Scenario::new(dir.path().join("app").join("warm"), "warm"),
            ]
        );
    }

    #[test]
    fn test_walk_descends_into_scenarios_and_skips_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("cold");
        std::fs::create_dir_all(root.join("warm")).unwrap();

        let filter = default_filter();
        let scenarios = ScenarioDirs::new(&root, &filter).collect::<Vec<_>>();

        assert_eq!(scenarios, [Scenario::new(root.join("warm"), "warm")]);
    }

    #[test]
    fn test_walk_of_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let filter = default_filter();
        assert_eq!(
            ScenarioDirs::new(dir.path().join("missing"), &filter).count(),
            0
        );
    }
}
