//! Clone Service - main application orchestrator.
//!
//! This service coordinates the clone-at-revision workflow:
//! 1. Detect the transport scheme by probing candidates in order
//! 2. Capture the working directory and prepare the target root
//! 3. Enter the root and run the backend's clone plan
//! 4. Restore the working directory on every exit path
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, WorkingDirectory},
    },
    domain::{ClonePlan, Invocation, Phase, PlanStep, RepoAddress, Revision, VcsKind, Vcs},
    error::FetchResult,
};

/// The process has one working directory; every region that changes it
/// holds this lock.
static WORKDIR_LOCK: Mutex<()> = Mutex::new(());

fn lock_workdir() -> MutexGuard<'static, ()> {
    // A panic inside the region still restored the directory on unwind.
    WORKDIR_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Information about a backend for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendInfo {
    pub tag: String,
    pub name: String,
    pub program: String,
    pub schemes: Vec<String>,
    pub revision_query: String,
    pub update_template: String,
}

/// Main clone service.
///
/// Stateless across calls: holds only its adapters.
pub struct CloneService {
    runner: Box<dyn CommandRunner>,
    workdir: Box<dyn WorkingDirectory>,
}

impl CloneService {
    /// Create a new clone service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use fetchrev_core::application::{CloneService, ports::*};
    ///
    /// let service = CloneService::new(
    ///     runner,  // impl CommandRunner
    ///     workdir, // impl WorkingDirectory
    /// );
    /// ```
    pub fn new(runner: Box<dyn CommandRunner>, workdir: Box<dyn WorkingDirectory>) -> Self {
        Self { runner, workdir }
    }

    /// Find the first scheme in the backend's candidate list whose probe succeeds.
    ///
    /// Runs one probe per candidate, in order, stopping at the first success.
    #[instrument(skip_all, fields(vcs = %vcs, address = %address))]
    pub fn detect_scheme(
        &self,
        vcs: Vcs,
        address: &RepoAddress,
        verbose: bool,
    ) -> FetchResult<&'static str> {
        let backend = vcs.backend();

        for &scheme in backend.schemes {
            let probe = backend.probe(&address.qualified(scheme));

            // A failed probe only rules out this scheme.
            match self.run(Phase::Probe, &probe, verbose) {
                Ok(()) => {
                    info!(scheme, "Scheme detected");
                    return Ok(scheme);
                }
                Err(e) => debug!(scheme, error = %e, "Scheme did not answer"),
            }
        }

        warn!("No scheme answered");
        Err(ApplicationError::SchemeNotFound {
            address: address.to_string(),
            kind: vcs.kind(),
        }
        .into())
    }

    /// Clone `address` at `revision` under `root`.
    ///
    /// `root` is created (with parents) if missing. Nothing on disk changes
    /// before a scheme is found. The working directory is restored whether
    /// the clone succeeds or fails.
    ///
    /// On error a partial working copy may remain under `root` (for git, a
    /// clone whose checkout failed). Removing it is the caller's job.
    #[instrument(
        skip_all,
        fields(
            vcs = %vcs,
            address = %address,
            revision = %revision,
            root = %root.display()
        )
    )]
    pub fn clone(
        &self,
        vcs: Vcs,
        address: &RepoAddress,
        revision: &Revision,
        root: &Path,
        verbose: bool,
    ) -> FetchResult<()> {
        info!("Cloning {} repository", vcs.kind().display_name());

        // 1. Detect scheme
        let scheme = self.detect_scheme(vcs, address, verbose)?;
        let url = address.qualified(scheme);

        let _lock = lock_workdir();

        // 2. Capture working directory
        let original = self.workdir.current_dir()?;

        // 3. Prepare root
        let root = original.join(root);
        self.workdir.create_dir_all(&root)?;

        // 4 + 5. Enter root; restoration is scheduled from here on
        let _restore = DirGuard::enter(self.workdir.as_ref(), original, &root)?;

        // 6. Run the backend's plan
        let plan = vcs.backend().clone_plan(&url, address, revision);
        self.run_plan(plan, verbose)?;

        info!(url = %url, "Clone completed successfully");
        Ok(())
    }

    /// Move an existing working copy at `checkout` to `revision` using the
    /// backend's update command.
    #[instrument(
        skip_all,
        fields(vcs = %vcs, checkout = %checkout.display(), revision = %revision)
    )]
    pub fn update(
        &self,
        vcs: Vcs,
        checkout: &Path,
        revision: &Revision,
        verbose: bool,
    ) -> FetchResult<()> {
        let _lock = lock_workdir();

        let original = self.workdir.current_dir()?;
        let checkout = original.join(checkout);
        let _restore = DirGuard::enter(self.workdir.as_ref(), original, &checkout)?;

        let invocation = vcs.backend().update_invocation(revision);
        self.run(Phase::Update, &invocation, verbose)?;

        info!("Update completed successfully");
        Ok(())
    }

    /// List every registered backend.
    pub fn list_backends() -> Vec<BackendInfo> {
        VcsKind::ALL
            .into_iter()
            .map(|kind| {
                let backend = Vcs::new(kind).backend();
                BackendInfo {
                    tag: kind.as_str().to_string(),
                    name: kind.display_name().to_string(),
                    program: backend.program.to_string(),
                    schemes: backend.schemes.iter().map(|s| s.to_string()).collect(),
                    revision_query: backend.revision_query.to_string(),
                    update_template: backend.update_template.to_string(),
                }
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Run each step in order, stopping at the first failure.
    fn run_plan(&self, plan: ClonePlan, verbose: bool) -> FetchResult<()> {
        for step in plan {
            match step {
                PlanStep::Run { phase, invocation } => self.run(phase, &invocation, verbose)?,
                PlanStep::RunIn {
                    dir,
                    phase,
                    invocation,
                } => {
                    let here = self.workdir.current_dir()?;
                    let target = here.join(dir);
                    let _back = DirGuard::enter(self.workdir.as_ref(), here, &target)?;
                    self.run(phase, &invocation, verbose)?;
                }
            }
        }
        Ok(())
    }

    fn run(&self, phase: Phase, invocation: &Invocation, verbose: bool) -> FetchResult<()> {
        debug!(%phase, command = %invocation, "Running");

        self.runner.exec(invocation, verbose).map_err(|e| {
            ApplicationError::CommandFailed {
                phase,
                command: invocation.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Changes into a directory and changes back to `original` when dropped.
struct DirGuard<'a> {
    workdir: &'a dyn WorkingDirectory,
    original: PathBuf,
}

impl<'a> DirGuard<'a> {
    fn enter(
        workdir: &'a dyn WorkingDirectory,
        original: PathBuf,
        target: &Path,
    ) -> FetchResult<Self> {
        workdir.change_dir(target)?;
        debug!(dir = %target.display(), "Entered directory");
        Ok(Self { workdir, original })
    }
}

impl Drop for DirGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.workdir.change_dir(&self.original) {
            warn!(
                error = %e,
                path = %self.original.display(),
                "Failed to restore working directory"
            );
        } else {
            debug!(dir = %self.original.display(), "Restored directory");
        }
    }
}
