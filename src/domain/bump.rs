use crate::domain::Version;
use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Version bump type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    /// Parse a bump kind from its tag ("major", "minor" or "patch")
    ///
    /// Matching is exact; any other tag fails with `InvalidBumpKind`.
    pub fn parse(tag: &str) -> Result<Self> {
        tag.parse()
    }
}

impl FromStr for BumpKind {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(BumpError::InvalidBumpKind(other.to_string())),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpKind::Major => write!(f, "major"),
            BumpKind::Minor => write!(f, "minor"),
            BumpKind::Patch => write!(f, "patch"),
        }
    }
}

/// A single mutation of a manifest's version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Bump(BumpKind),
    AddPreRelease(String),
    RemovePreRelease,
}

impl Change {
    /// New version produced from `current`
    pub fn apply_to(&self, current: &Version) -> Result<Version> {
        match self {
            Change::Bump(kind) => current.bump(*kind),
            Change::AddPreRelease(identifier) => Ok(current.with_pre_release(identifier.as_str())),
            Change::RemovePreRelease => Ok(current.without_pre_release()),
        }
    }
}
