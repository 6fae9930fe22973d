//! Domain value objects: VcsKind, RepoAddress, Revision.
//!
//! # Design
//!
//! These are pure value types, equality-by-value, no identity.
//! They hold NO backend behaviour. Everything a backend knows about its
//! commands and schemes lives in `backends.rs`. This file's only job is to
//! define the types, their string representations, and their parsers.
//!
//! # Adding a New VCS
//!
//! 1. Add the `VcsKind` variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a `BackendDef` in `backends.rs` and its arm in `backend()`
//! 4. The compiler points at every other match that needs the new arm

use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

// ── VcsKind ──────────────────────────────────────────────────────────────────

/// A supported version-control system.
///
/// The set is closed at four. Parsing is lenient (case, long names); the
/// strict document form is the `Vcs` handle's serde impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VcsKind {
    Git,
    Mercurial,
    Bazaar,
    Subversion,
}

impl VcsKind {
    /// Every kind, in registry order.
    pub const ALL: [VcsKind; 4] = [Self::Git, Self::Mercurial, Self::Bazaar, Self::Subversion];

    /// The short serialized tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Mercurial => "hg",
            Self::Bazaar => "bzr",
            Self::Subversion => "svn",
        }
    }

    /// Human-readable name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Git => "Git",
            Self::Mercurial => "Mercurial",
            Self::Bazaar => "Bazaar",
            Self::Subversion => "Subversion",
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VcsKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "git" => Ok(Self::Git),
            "hg" | "mercurial" => Ok(Self::Mercurial),
            "bzr" | "bazaar" => Ok(Self::Bazaar),
            "svn" | "subversion" => Ok(Self::Subversion),
            _ => Err(DomainError::UnknownVcsKind {
                value: s.to_string(),
            }),
        }
    }
}

// ── RepoAddress ───────────────────────────────────────────────────────────────

/// A repository address without a transport scheme, e.g. `github.com/org/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoAddress(String);

impl RepoAddress {
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let address = address.into();

        let invalid = |reason: &str| DomainError::InvalidAddress {
            address: address.clone(),
            reason: reason.to_string(),
        };

        if address.trim().is_empty() {
            return Err(invalid("address is empty"));
        }
        if address.contains("://") {
            return Err(invalid("address must not include a transport scheme"));
        }
        if address.chars().any(char::is_whitespace) {
            return Err(invalid("address must not contain whitespace"));
        }
        if address.starts_with('-') {
            return Err(invalid("address must not start with '-'"));
        }

        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<scheme>://<address>`
    pub fn qualified(&self, scheme: &str) -> String {
        format!("{scheme}://{}", self.0)
    }

    /// Name of the directory `git clone` creates for this address.
    ///
    /// Last non-empty path segment, minus one trailing `.git`.
    pub fn checkout_dir(&self) -> &str {
        let last = self
            .0
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(self.0.as_str());

        match last.strip_suffix(".git") {
            Some(stem) if !stem.is_empty() => stem,
            _ => last,
        }
    }
}

impl fmt::Display for RepoAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RepoAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ── Revision ──────────────────────────────────────────────────────────────────

/// A tag, branch, revision number or commit id to check out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    pub fn new(revision: impl Into<String>) -> Result<Self, DomainError> {
        let revision = revision.into();

        let invalid = |reason: &str| DomainError::InvalidRevision {
            revision: revision.clone(),
            reason: reason.to_string(),
        };

        if revision.is_empty() {
            return Err(invalid("revision is empty"));
        }
        if revision.chars().any(char::is_whitespace) {
            return Err(invalid("revision must not contain whitespace"));
        }
        // Would be parsed as an option by the VCS program. Negative revision
        // numbers (`-1` is the tip for bzr and hg) stay allowed.
        let option_like = revision
            .strip_prefix('-')
            .is_some_and(|rest| rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()));
        if option_like {
            return Err(invalid("revision must not start with '-'"));
        }

        Ok(Self(revision))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Revision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
