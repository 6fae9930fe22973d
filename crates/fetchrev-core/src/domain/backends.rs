//! VCS backend registry.
//!
//! # Design Rationale
//!
//! Each supported version-control system is described exactly once by a
//! static [`BackendDef`]. A definition is pure data plus pure functions that
//! turn an address and a revision into [`Invocation`]s. Nothing here runs a
//! process; the application layer executes what these functions describe.
//!
//! [`backend`] is an exhaustive `match` over [`VcsKind`], so a new kind does
//! not compile until it has a definition here.

use std::fmt;
use std::path::PathBuf;

use crate::domain::value_objects::{RepoAddress, Revision, VcsKind};

/// Placeholder substituted by [`BackendDef::update_invocation`].
pub const TAG_PLACEHOLDER: &str = "{tag}";

// ── Invocation ───────────────────────────────────────────────────────────────

/// One external program invocation: program name plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ── Phase ────────────────────────────────────────────────────────────────────

/// The logical step an invocation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Checking one candidate scheme. Failures here are logged and the next
    /// scheme is tried.
    Probe,
    Clone,
    Checkout,
    Update,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Probe => "probe",
            Self::Clone => "clone",
            Self::Checkout => "checkout",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Clone plans ──────────────────────────────────────────────────────────────

/// A single step of a clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    /// Run in the current directory.
    Run {
        phase: Phase,
        invocation: Invocation,
    },
    /// Enter `dir` (relative to the current directory), run, and come back.
    RunIn {
        dir: PathBuf,
        phase: Phase,
        invocation: Invocation,
    },
}

impl PlanStep {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Run { phase, .. } | Self::RunIn { phase, .. } => *phase,
        }
    }

    pub fn invocation(&self) -> &Invocation {
        match self {
            Self::Run { invocation, .. } | Self::RunIn { invocation, .. } => invocation,
        }
    }
}

/// Ordered steps that materialize a working copy in the current directory.
pub type ClonePlan = Vec<PlanStep>;

// ── Backend definitions ──────────────────────────────────────────────────────

/// Everything the domain knows about one version-control system.
#[derive(Debug, PartialEq, Eq)]
pub struct BackendDef {
    pub kind: VcsKind,

    /// Executable name looked up on `PATH`.
    pub program: &'static str,

    /// Candidate transport schemes, in preference order.
    pub schemes: &'static [&'static str],

    /// Read-only subcommand used to check that `<scheme>://<address>` answers.
    pub probe_command: &'static str,

    /// Shell command that prints the checked-out revision. Metadata only.
    pub revision_query: &'static str,

    /// Command that moves a working copy to `{tag}`.
    pub update_template: &'static str,
}

pub static GIT: BackendDef = BackendDef {
    kind: VcsKind::Git,
    program: "git",
    schemes: &["git", "https", "http", "git+ssh"],
    probe_command: "ls-remote",
    revision_query: "git rev-parse --verify HEAD",
    update_template: "git checkout {tag}",
};

pub static MERCURIAL: BackendDef = BackendDef {
    kind: VcsKind::Mercurial,
    program: "hg",
    schemes: &["https", "http", "ssh"],
    probe_command: "identify",
    revision_query: "hg --debug id -i",
    update_template: "hg update -r {tag}",
};

pub static BAZAAR: BackendDef = BackendDef {
    kind: VcsKind::Bazaar,
    program: "bzr",
    schemes: &["https", "http", "bzr", "bzr+ssh"],
    probe_command: "info",
    revision_query: "bzr revno",
    update_template: "bzr update -r revno:{tag}",
};

pub static SUBVERSION: BackendDef = BackendDef {
    kind: VcsKind::Subversion,
    program: "svn",
    schemes: &["https", "http", "svn", "svn+ssh"],
    probe_command: "info",
    revision_query: r#"svn info | grep "Revision" | awk '{print $2}'"#,
    update_template: "svn up -r{tag}",
};

/// Single source of truth for backends, in registry order.
pub static BACKEND_REGISTRY: [&BackendDef; 4] = [&GIT, &MERCURIAL, &BAZAAR, &SUBVERSION];

/// The definition for `kind`.
pub fn backend(kind: VcsKind) -> &'static BackendDef {
    match kind {
        VcsKind::Git => &GIT,
        VcsKind::Mercurial => &MERCURIAL,
        VcsKind::Bazaar => &BAZAAR,
        VcsKind::Subversion => &SUBVERSION,
    }
}

impl BackendDef {
    /// The remote-probe invocation for a fully qualified url.
    pub fn probe(&self, url: &str) -> Invocation {
        Invocation::new(self.program, [self.probe_command, url])
    }

    /// The steps that clone `url` at `revision` into the current directory.
    ///
    /// `address` is the bare address `url` was built from; git uses it to
    /// find the directory its clone creates.
    pub fn clone_plan(&self, url: &str, address: &RepoAddress, revision: &Revision) -> ClonePlan {
        let rev = revision.as_str();

        match self.kind {
            // git cannot clone at a revision: clone, then check out inside.
            VcsKind::Git => vec![
                PlanStep::Run {
                    phase: Phase::Clone,
                    invocation: Invocation::new(self.program, ["clone", url]),
                },
                PlanStep::RunIn {
                    dir: PathBuf::from(address.checkout_dir()),
                    phase: Phase::Checkout,
                    invocation: Invocation::new(self.program, ["checkout", rev]),
                },
            ],
            VcsKind::Mercurial => vec![PlanStep::Run {
                phase: Phase::Clone,
                invocation: Invocation::new(self.program, ["clone", "-r", rev, url]),
            }],
            VcsKind::Bazaar => vec![PlanStep::Run {
                phase: Phase::Clone,
                invocation: Invocation::new(self.program, ["branch", url, "-r", rev]),
            }],
            VcsKind::Subversion => vec![PlanStep::Run {
                phase: Phase::Clone,
                invocation: Invocation::new(self.program, ["checkout", "-r", rev, url]),
            }],
        }
    }

    /// Render `update_template` for `revision`.
    pub fn update_invocation(&self, revision: &Revision) -> Invocation {
        let rendered = self
            .update_template
            .replace(TAG_PLACEHOLDER, revision.as_str());
        let mut words = rendered.split_whitespace();
        let program = words.next().unwrap_or(self.program);

        Invocation::new(program, words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> RepoAddress {
        RepoAddress::new(s).unwrap()
    }

    fn rev(s: &str) -> Revision {
        Revision::new(s).unwrap()
    }

    #[test]
    fn registry_has_one_entry_per_kind() {
        for kind in VcsKind::ALL {
            let matching = BACKEND_REGISTRY.iter().filter(|b| b.kind == kind).count();
            assert_eq!(matching, 1, "{kind} registered {matching} times");
            assert_eq!(backend(kind).kind, kind);
        }
    }

    #[test]
    fn scheme_preference_order() {
        assert_eq!(GIT.schemes, ["git", "https", "http", "git+ssh"]);
        assert_eq!(MERCURIAL.schemes, ["https", "http", "ssh"]);
        assert_eq!(BAZAAR.schemes, ["https", "http", "bzr", "bzr+ssh"]);
        assert_eq!(SUBVERSION.schemes, ["https", "http", "svn", "svn+ssh"]);
    }

    #[test]
    fn probe_commands() {
        let url = "https://example.org/acme/widget";
        assert_eq!(GIT.probe(url).to_string(), format!("git ls-remote {url}"));
        assert_eq!(MERCURIAL.probe(url).to_string(), format!("hg identify {url}"));
        assert_eq!(BAZAAR.probe(url).to_string(), format!("bzr info {url}"));
        assert_eq!(SUBVERSION.probe(url).to_string(), format!("svn info {url}"));
    }

    #[test]
    fn git_plan_clones_then_checks_out_inside() {
        let address = addr("example.org/acme/widget");
        let plan = GIT.clone_plan("git://example.org/acme/widget", &address, &rev("v1.2.0"));

        assert_eq!(
            plan,
            vec![
                PlanStep::Run {
                    phase: Phase::Clone,
                    invocation: Invocation::new("git", ["clone", "git://example.org/acme/widget"]),
                },
                PlanStep::RunIn {
                    dir: PathBuf::from("widget"),
                    phase: Phase::Checkout,
                    invocation: Invocation::new("git", ["checkout", "v1.2.0"]),
                },
            ]
        );
    }

    #[test]
    fn single_step_plans() {
        let address = addr("example.org/repo");
        let url = "https://example.org/repo";

        let hg = MERCURIAL.clone_plan(url, &address, &rev("1.0"));
        assert_eq!(hg.len(), 1);
        assert_eq!(hg[0].invocation().to_string(), format!("hg clone -r 1.0 {url}"));

        let bzr = BAZAAR.clone_plan(url, &address, &rev("42"));
        assert_eq!(bzr[0].invocation().to_string(), format!("bzr branch {url} -r 42"));

        let svn = SUBVERSION.clone_plan(url, &address, &rev("1234"));
        assert_eq!(svn[0].invocation().to_string(), format!("svn checkout -r 1234 {url}"));
        assert_eq!(svn[0].phase(), Phase::Clone);
    }

    #[test]
    fn negative_revision_reaches_the_command_line() {
        let address = addr("launchpad.net/foo");
        let url = "https://launchpad.net/foo";

        let bzr = BAZAAR.clone_plan(url, &address, &rev("-1"));
        assert_eq!(bzr[0].invocation().to_string(), format!("bzr branch {url} -r -1"));

        let hg = MERCURIAL.clone_plan(url, &address, &rev("-1"));
        assert_eq!(hg[0].invocation().args, ["clone", "-r", "-1", url]);
    }

    #[test]
    fn update_templates_render() {
        assert_eq!(
            GIT.update_invocation(&rev("v2")),
            Invocation::new("git", ["checkout", "v2"])
        );
        assert_eq!(
            MERCURIAL.update_invocation(&rev("v2")).to_string(),
            "hg update -r v2"
        );
        assert_eq!(
            BAZAAR.update_invocation(&rev("7")).to_string(),
            "bzr update -r revno:7"
        );
        assert_eq!(
            SUBVERSION.update_invocation(&rev("99")),
            Invocation::new("svn", ["up", "-r99"])
        );
    }

    #[test]
    fn every_update_template_has_placeholder() {
        for def in BACKEND_REGISTRY {
            assert!(def.update_template.contains(TAG_PLACEHOLDER), "{}", def.kind);
            assert!(def.update_template.starts_with(def.program));
        }
    }
}
