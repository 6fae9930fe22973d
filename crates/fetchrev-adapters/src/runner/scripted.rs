//! Scripted command runner for testing.
//!
//! Records every invocation and fails the ones matched by registered rules.
//! Bound to a [`MemoryWorkingDirectory`], it also stamps each call with the
//! in-memory current directory and creates the directory a successful
//! `git clone` would have created.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use fetchrev_core::{
    application::ports::{CommandRunner, ExecError},
    domain::{Invocation, RepoAddress},
};

use crate::workdir::MemoryWorkingDirectory;

type FailRule = Arc<dyn Fn(&Invocation) -> bool + Send + Sync>;

/// One call made through a [`ScriptedRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Current directory at call time, when bound to a workdir.
    pub cwd: Option<PathBuf>,
    pub invocation: Invocation,
    pub verbose: bool,
}

/// Test runner that succeeds unless told otherwise.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    inner: Arc<RwLock<ScriptedRunnerInner>>,
    workdir: Option<MemoryWorkingDirectory>,
}

#[derive(Default)]
struct ScriptedRunnerInner {
    calls: Vec<RecordedCall>,
    fail_rules: Vec<FailRule>,
}

impl ScriptedRunner {
    /// A runner on which every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp calls with `workdir`'s current directory and simulate clones in it.
    pub fn bound_to(mut self, workdir: &MemoryWorkingDirectory) -> Self {
        self.workdir = Some(workdir.clone());
        self
    }

    /// Fail every invocation for which `rule` returns true.
    pub fn fail_when<F>(self, rule: F) -> Self
    where
        F: Fn(&Invocation) -> bool + Send + Sync + 'static,
    {
        self.inner.write().unwrap().fail_rules.push(Arc::new(rule));
        self
    }

    /// Fail every invocation whose first argument is `subcommand`.
    pub fn fail_subcommand(self, subcommand: &'static str) -> Self {
        self.fail_when(move |inv| inv.args.first().map(String::as_str) == Some(subcommand))
    }

    /// Fail every invocation.
    pub fn fail_all(self) -> Self {
        self.fail_when(|_| true)
    }

    /// All calls made so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.read().unwrap().calls.clone()
    }

    /// All calls rendered as command lines.
    pub fn commands(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|c| c.invocation.to_string())
            .collect()
    }

    fn simulate_clone(&self, invocation: &Invocation) {
        let Some(workdir) = &self.workdir else {
            return;
        };
        if invocation.program != "git" || invocation.args.first().map(String::as_str) != Some("clone")
        {
            return;
        }
        let Some(url) = invocation.args.get(1) else {
            return;
        };

        let bare = url.split_once("://").map_or(url.as_str(), |(_, rest)| rest);
        if let Ok(address) = RepoAddress::new(bare) {
            workdir.seed_dir(Path::new(address.checkout_dir()));
        }
    }
}

impl CommandRunner for ScriptedRunner {
    fn exec(&self, invocation: &Invocation, verbose: bool) -> Result<(), ExecError> {
        let cwd = self.workdir.as_ref().map(MemoryWorkingDirectory::cwd);

        let mut inner = self.inner.write().map_err(|_| ExecError::Spawn {
            program: invocation.program.clone(),
            reason: "scripted runner lock poisoned".into(),
        })?;

        inner.calls.push(RecordedCall {
            cwd,
            invocation: invocation.clone(),
            verbose,
        });

        if inner.fail_rules.iter().any(|rule| rule(invocation)) {
            return Err(ExecError::Status { code: Some(1) });
        }
        drop(inner);

        self.simulate_clone(invocation);
        Ok(())
    }
}

impl fmt::Debug for ScriptedRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (calls, rules) = self
            .inner
            .read()
            .map(|inner| (inner.calls.len(), inner.fail_rules.len()))
            .unwrap_or_default();

        f.debug_struct("ScriptedRunner")
            .field("calls", &calls)
            .field("fail_rules", &rules)
            .field("bound", &self.workdir.is_some())
            .finish()
    }
}
