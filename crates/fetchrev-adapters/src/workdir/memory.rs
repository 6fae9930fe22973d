//! In-memory working-directory adapter for testing.

use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use fetchrev_core::{
    application::{ApplicationError, ports::WorkingDirectory},
    error::FetchResult,
};

/// Something that happened to the in-memory working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirEvent {
    /// A directory that did not exist was created.
    Created(PathBuf),
    /// The current directory changed.
    Entered(PathBuf),
}

/// In-memory working directory for testing.
///
/// Clones share state, so a test can keep one handle and give another to
/// the service under test.
#[derive(Debug, Clone)]
pub struct MemoryWorkingDirectory {
    inner: Arc<RwLock<MemoryWorkingDirectoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryWorkingDirectoryInner {
    cwd: PathBuf,
    directories: HashSet<PathBuf>,
    events: Vec<DirEvent>,
}

impl MemoryWorkingDirectory {
    /// Start in `cwd`, which exists along with its ancestors.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let mut inner = MemoryWorkingDirectoryInner {
            cwd: cwd.clone(),
            ..Default::default()
        };
        inner.directories.extend(cwd.ancestors().map(Path::to_path_buf));

        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// The current directory (testing helper).
    pub fn cwd(&self) -> PathBuf {
        let inner = self.inner.read().unwrap();
        inner.cwd.clone()
    }

    /// Everything that happened so far, in order.
    pub fn events(&self) -> Vec<DirEvent> {
        let inner = self.inner.read().unwrap();
        inner.events.clone()
    }

    /// Resolve `path` against the current directory, dropping `.` and `..`.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let inner = self.inner.read().unwrap();
        normalize(&inner.cwd, path)
    }

    /// Whether `path` is a known directory (testing helper).
    pub fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.directories.contains(&normalize(&inner.cwd, path))
    }

    /// Mark a directory as existing without recording an event.
    pub fn seed_dir(&self, path: &Path) {
        let mut inner = self.inner.write().unwrap();
        let path = normalize(&inner.cwd, path);
        inner.directories.extend(path.ancestors().map(Path::to_path_buf));
    }
}

impl WorkingDirectory for MemoryWorkingDirectory {
    fn current_dir(&self) -> FetchResult<PathBuf> {
        let inner = self.inner.read().map_err(|_| poisoned("read current directory"))?;
        Ok(inner.cwd.clone())
    }

    fn change_dir(&self, path: &Path) -> FetchResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned("change directory to"))?;
        let target = normalize(&inner.cwd, path);

        if !inner.directories.contains(&target) {
            return Err(ApplicationError::Environment {
                operation: "change directory to",
                path: target,
                reason: "No such file or directory".into(),
            }
            .into());
        }

        inner.events.push(DirEvent::Entered(target.clone()));
        inner.cwd = target;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FetchResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned("create directory"))?;
        let target = normalize(&inner.cwd, path);

        let mut missing: Vec<PathBuf> = target
            .ancestors()
            .map(Path::to_path_buf)
            .filter(|p| !inner.directories.contains(p))
            .collect();
        missing.reverse();

        for dir in missing {
            inner.directories.insert(dir.clone());
            inner.events.push(DirEvent::Created(dir));
        }

        Ok(())
    }
}

fn normalize(cwd: &Path, path: &Path) -> PathBuf {
    let mut out = if path.is_absolute() {
        PathBuf::new()
    } else {
        cwd.to_path_buf()
    };

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }

    out
}

fn poisoned(operation: &'static str) -> fetchrev_core::error::FetchError {
    ApplicationError::Environment {
        operation,
        path: PathBuf::new(),
        reason: "working directory state lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_existing_directory() {
        let wd = MemoryWorkingDirectory::new("/home/dev");
        assert_eq!(wd.current_dir().unwrap(), PathBuf::from("/home/dev"));
        assert!(wd.exists(Path::new("/home")));
        assert!(wd.events().is_empty());
    }

    #[test]
    fn relative_paths_resolve_against_cwd() {
        let wd = MemoryWorkingDirectory::new("/home/dev");
        wd.create_dir_all(Path::new("./workspace/../deps/x")).unwrap();

        assert!(wd.exists(Path::new("/home/dev/deps/x")));
        assert!(!wd.exists(Path::new("/home/dev/workspace")));
        assert_eq!(
            wd.events(),
            vec![
                DirEvent::Created(PathBuf::from("/home/dev/deps")),
                DirEvent::Created(PathBuf::from("/home/dev/deps/x")),
            ]
        );
    }

    #[test]
    fn exists_follows_the_current_directory() {
        let wd = MemoryWorkingDirectory::new("/srv");
        wd.seed_dir(Path::new("repo/sub"));
        assert!(wd.exists(Path::new("repo")));

        wd.change_dir(Path::new("repo")).unwrap();
        assert!(wd.exists(Path::new("sub")));
        assert!(wd.exists(Path::new("..")));
        assert!(!wd.exists(Path::new("repo")));
    }

    #[test]
    fn create_existing_records_nothing() {
        let wd = MemoryWorkingDirectory::new("/srv");
        wd.create_dir_all(Path::new("/srv")).unwrap();
        assert!(wd.events().is_empty());
    }

    #[test]
    fn change_into_missing_directory_fails() {
        let wd = MemoryWorkingDirectory::new("/srv");
        assert!(wd.change_dir(Path::new("nope")).is_err());
        assert_eq!(wd.cwd(), PathBuf::from("/srv"));
    }

    #[test]
    fn clones_share_state() {
        let wd = MemoryWorkingDirectory::new("/srv");
        let other = wd.clone();
        other.seed_dir(Path::new("repo"));
        wd.change_dir(Path::new("repo")).unwrap();
        assert_eq!(other.cwd(), PathBuf::from("/srv/repo"));
    }
}
