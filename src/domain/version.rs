use crate::domain::BumpKind;
use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// One of the three numeric segments of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => write!(f, "major"),
            Component::Minor => write!(f, "minor"),
            Component::Patch => write!(f, "patch"),
        }
    }
}

/// Version in the `MAJOR.MINOR.PATCH[-prerelease]` shape
///
/// The pre-release label is opaque: it is kept verbatim and never compared
/// or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<String>,
}

impl Version {
    /// Create a new release version (no pre-release label)
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    /// Parse a version string (e.g., "1.2.3" or "1.2.3-beta.1")
    ///
    /// The input is split on the first `-`; everything after it is the
    /// pre-release label, taken verbatim. The rest must be exactly three
    /// dot-separated non-negative integers.
    ///
    /// # Errors
    /// * `InvalidFormat` - main part does not have exactly three segments
    /// * `InvalidComponent` - a segment is not a non-negative integer
    pub fn parse(input: &str) -> Result<Self> {
        let (main, pre_release) = match input.split_once('-') {
            Some((main, pre)) => (main, Some(pre)),
            None => (input, None),
        };

        let parts: Vec<&str> = main.split('.').collect();
        if parts.len() != 3 {
            return Err(BumpError::InvalidFormat(input.to_string()));
        }

        let major = parse_component(Component::Major, parts[0])?;
        let minor = parse_component(Component::Minor, parts[1])?;
        let patch = parse_component(Component::Patch, parts[2])?;

        Ok(Version {
            major,
            minor,
            patch,
            pre_release: pre_release
                .filter(|pre| !pre.is_empty())
                .map(str::to_string),
        })
    }

    /// Bump according to bump kind, dropping any pre-release label
    ///
    /// # Errors
    /// * `Overflow` - the incremented component is already `u64::MAX`
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        Ok(match kind {
            BumpKind::Major => Version::new(increment(Component::Major, self.major)?, 0, 0),
            BumpKind::Minor => {
                Version::new(self.major, increment(Component::Minor, self.minor)?, 0)
            }
            BumpKind::Patch => Version::new(
                self.major,
                self.minor,
                increment(Component::Patch, self.patch)?,
            ),
        })
    }

    /// Same numbers with `identifier` as the pre-release label, replacing any existing one
    pub fn with_pre_release(&self, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Version {
            pre_release: (!identifier.is_empty()).then_some(identifier),
            ..Version::new(self.major, self.minor, self.patch)
        }
    }

    /// Same numbers without a pre-release label
    pub fn without_pre_release(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }
}

fn parse_component(component: Component, text: &str) -> Result<u64> {
    text.parse::<u64>()
        .map_err(|_| BumpError::InvalidComponent {
            component,
            text: text.to_string(),
        })
}

fn increment(component: Component, value: u64) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or(BumpError::Overflow { component, value })
}

/// Render version components as `major.minor.patch[-pre_release]`
///
/// An empty `pre_release` renders no suffix.
pub fn format_version(major: u64, minor: u64, patch: u64, pre_release: &str) -> String {
    if pre_release.is_empty() {
        format!("{}.{}.{}", major, minor, patch)
    } else {
        format!("{}.{}.{}-{}", major, minor, patch, pre_release)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pre_release = self.pre_release.as_deref().unwrap_or_default();
        f.write_str(&format_version(
            self.major,
            self.minor,
            self.patch,
            pre_release,
        ))
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}
