//! End-to-end clone workflows over the in-memory adapters.

use std::path::{Path, PathBuf};

use fetchrev_adapters::{DirEvent, MemoryWorkingDirectory, ScriptedRunner};
use fetchrev_core::{
    application::{ApplicationError, CloneService},
    domain::{Phase, RepoAddress, Revision, Vcs, VcsKind},
    error::FetchError,
};

const HOME: &str = "/home/dev";

fn setup(runner: ScriptedRunner) -> (CloneService, ScriptedRunner, MemoryWorkingDirectory) {
    let workdir = MemoryWorkingDirectory::new(HOME);
    let runner = runner.bound_to(&workdir);
    let service = CloneService::new(Box::new(runner.clone()), Box::new(workdir.clone()));
    (service, runner, workdir)
}

fn at(cwd: &str, command: &str) -> (Option<PathBuf>, String) {
    (Some(PathBuf::from(cwd)), command.to_string())
}

fn trace(runner: &ScriptedRunner) -> Vec<(Option<PathBuf>, String)> {
    runner
        .calls()
        .into_iter()
        .map(|c| (c.cwd, c.invocation.to_string()))
        .collect()
}

#[test]
fn git_clone_probes_clones_checks_out_and_restores() {
    let (service, runner, workdir) = setup(ScriptedRunner::new());
    let vcs: Vcs = "git".parse().unwrap();

    service
        .clone(
            vcs,
            &RepoAddress::new("example.org/acme/widget").unwrap(),
            &Revision::new("v1.2.0").unwrap(),
            Path::new("./workspace"),
            false,
        )
        .unwrap();

    assert_eq!(
        trace(&runner),
        vec![
            at(HOME, "git ls-remote git://example.org/acme/widget"),
            at("/home/dev/workspace", "git clone git://example.org/acme/widget"),
            at("/home/dev/workspace/widget", "git checkout v1.2.0"),
        ]
    );
    assert_eq!(
        workdir.events(),
        vec![
            DirEvent::Created(PathBuf::from("/home/dev/workspace")),
            DirEvent::Entered(PathBuf::from("/home/dev/workspace")),
            DirEvent::Entered(PathBuf::from("/home/dev/workspace/widget")),
            DirEvent::Entered(PathBuf::from("/home/dev/workspace")),
            DirEvent::Entered(PathBuf::from(HOME)),
        ]
    );
    assert_eq!(workdir.cwd(), PathBuf::from(HOME));
}

#[test]
fn hg_with_no_answering_scheme_creates_nothing() {
    let (service, runner, workdir) = setup(ScriptedRunner::new().fail_subcommand("identify"));
    let vcs: Vcs = "hg".parse().unwrap();

    let err = service
        .clone(
            vcs,
            &RepoAddress::new("hg.example.org/repo").unwrap(),
            &Revision::new("1.0").unwrap(),
            Path::new("./workspace"),
            false,
        )
        .unwrap_err();

    assert_eq!(
        err,
        FetchError::Application(ApplicationError::SchemeNotFound {
            address: "hg.example.org/repo".into(),
            kind: VcsKind::Mercurial,
        })
    );
    assert_eq!(
        runner.commands(),
        [
            "hg identify https://hg.example.org/repo",
            "hg identify http://hg.example.org/repo",
            "hg identify ssh://hg.example.org/repo",
        ]
    );
    assert!(!workdir.exists(Path::new("/home/dev/workspace")));
    assert!(workdir.events().is_empty());
}

#[test]
fn git_falls_back_to_https_when_git_protocol_fails() {
    let runner = ScriptedRunner::new()
        .fail_when(|inv| inv.args.iter().any(|a| a.starts_with("git://")));
    let (service, runner, _) = setup(runner);

    let scheme = service
        .detect_scheme(
            Vcs::new(VcsKind::Git),
            &RepoAddress::new("example.org/acme/widget").unwrap(),
            false,
        )
        .unwrap();

    assert_eq!(scheme, "https");
    assert_eq!(runner.calls().len(), 2);
}

#[test]
fn failed_checkout_leaves_clone_and_restores_cwd() {
    let (service, _, workdir) = setup(ScriptedRunner::new().fail_subcommand("checkout"));

    let err = service
        .clone(
            Vcs::new(VcsKind::Git),
            &RepoAddress::new("example.org/acme/widget").unwrap(),
            &Revision::new("no-such-tag").unwrap(),
            Path::new("workspace"),
            false,
        )
        .unwrap_err();

    assert!(matches!(
        err,
        FetchError::Application(ApplicationError::CommandFailed {
            phase: Phase::Checkout,
            ..
        })
    ));
    assert_eq!(workdir.cwd(), PathBuf::from(HOME));
    assert!(workdir.exists(Path::new("/home/dev/workspace/widget")));
}

#[test]
fn existing_root_is_reused() {
    let (service, _, workdir) = setup(ScriptedRunner::new());
    workdir.seed_dir(Path::new("/srv/deps"));

    service
        .clone(
            Vcs::new(VcsKind::Subversion),
            &RepoAddress::new("svn.example.org/trunk").unwrap(),
            &Revision::new("1200").unwrap(),
            Path::new("/srv/deps"),
            true,
        )
        .unwrap();

    assert!(
        !workdir
            .events()
            .iter()
            .any(|e| matches!(e, DirEvent::Created(_)))
    );
    assert_eq!(workdir.cwd(), PathBuf::from(HOME));
}

#[test]
fn verbose_flag_reaches_every_command() {
    let (service, runner, _) = setup(ScriptedRunner::new());

    service
        .clone(
            Vcs::new(VcsKind::Bazaar),
            &RepoAddress::new("launchpad.net/foo").unwrap(),
            &Revision::new("3").unwrap(),
            Path::new("deps"),
            true,
        )
        .unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|c| c.verbose));
    assert_eq!(
        calls[1].invocation.to_string(),
        "bzr branch https://launchpad.net/foo -r 3"
    );
}

#[test]
fn update_runs_in_checkout_and_restores() {
    let (service, runner, workdir) = setup(ScriptedRunner::new());
    workdir.seed_dir(Path::new("deps/widget"));

    service
        .update(
            Vcs::new(VcsKind::Git),
            Path::new("deps/widget"),
            &Revision::new("v2.0.0").unwrap(),
            false,
        )
        .unwrap();

    assert_eq!(
        trace(&runner),
        vec![at("/home/dev/deps/widget", "git checkout v2.0.0")]
    );
    assert_eq!(workdir.cwd(), PathBuf::from(HOME));
}

#[test]
fn update_of_missing_checkout_is_environment_error() {
    let (service, runner, _) = setup(ScriptedRunner::new());

    let err = service
        .update(
            Vcs::new(VcsKind::Mercurial),
            Path::new("nowhere"),
            &Revision::new("tip").unwrap(),
            false,
        )
        .unwrap_err();

    assert!(matches!(
        err,
        FetchError::Application(ApplicationError::Environment { .. })
    ));
    assert!(runner.calls().is_empty());
}
