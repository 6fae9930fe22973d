//! Local working-directory adapter using `std::env` and `std::fs`.

use std::io;
use std::path::{Path, PathBuf};

use fetchrev_core::{application::ports::WorkingDirectory, error::FetchResult};
use tracing::trace;

/// Production adapter over the real process working directory.
///
/// The working directory is process-global: every instance sees and changes
/// the same one.
#[derive(Debug, Clone, Copy)]
pub struct LocalWorkingDirectory;

impl LocalWorkingDirectory {
    /// Create a new local working-directory adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalWorkingDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkingDirectory for LocalWorkingDirectory {
    fn current_dir(&self) -> FetchResult<PathBuf> {
        std::env::current_dir()
            .map_err(|e| map_io_error(Path::new("."), e, "read current directory"))
    }

    fn change_dir(&self, path: &Path) -> FetchResult<()> {
        trace!(path = %path.display(), "chdir");
        std::env::set_current_dir(path).map_err(|e| map_io_error(path, e, "change directory to"))
    }

    fn create_dir_all(&self, path: &Path) -> FetchResult<()> {
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }

        builder
            .create(path)
            .map_err(|e| map_io_error(path, e, "create directory"))
    }
}

fn map_io_error(
    path: &Path,
    e: io::Error,
    operation: &'static str,
) -> fetchrev_core::error::FetchError {
    use fetchrev_core::application::ApplicationError;

    ApplicationError::Environment {
        operation,
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
