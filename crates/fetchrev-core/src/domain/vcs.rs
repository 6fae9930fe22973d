//! The `Vcs` handle: a selected backend.
//!
//! A handle is created by decoding a short tag (`"git"`, `"hg"`, `"bzr"`,
//! `"svn"`), usually from the `vcs` field of a larger document, or directly
//! from a [`VcsKind`]. It holds a read-only reference to a registry entry and
//! no other state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::domain::{
    backends::{BackendDef, backend},
    error::DomainError,
    value_objects::VcsKind,
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vcs {
    backend: &'static BackendDef,
}

impl Vcs {
    pub fn new(kind: VcsKind) -> Self {
        Self {
            backend: backend(kind),
        }
    }

    pub fn kind(&self) -> VcsKind {
        self.backend.kind
    }

    /// The serialized tag.
    pub fn tag(&self) -> &'static str {
        self.backend.kind.as_str()
    }

    pub fn backend(&self) -> &'static BackendDef {
        self.backend
    }
}

impl From<VcsKind> for Vcs {
    fn from(kind: VcsKind) -> Self {
        Self::new(kind)
    }
}

impl FromStr for Vcs {
    type Err = DomainError;

    /// Only the four short tags are accepted here; aliases are a CLI nicety
    /// and do not belong in documents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "git" => VcsKind::Git,
            "hg" => VcsKind::Mercurial,
            "bzr" => VcsKind::Bazaar,
            "svn" => VcsKind::Subversion,
            other => {
                return Err(DomainError::UnknownVcsKind {
                    value: other.to_string(),
                });
            }
        };
        Ok(Self::new(kind))
    }
}

impl fmt::Debug for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vcs").field(&self.kind()).finish()
    }
}

impl fmt::Display for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Vcs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Vcs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(de::Error::custom)
    }
}
