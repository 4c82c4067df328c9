//! Read-mutate-write pipeline over a manifest's version field.
//!
//! Every operation is an independent transaction: read the manifest from the
//! store, parse its version, compute the new one, write the whole manifest
//! back and return the new version string. Nothing is cached between calls.
//! A failed write leaves the file as it was before the call.

use std::path::Path;

use tracing::debug;

use crate::domain::{BumpKind, Change, Version};
use crate::error::Result;
use crate::manifest::Manifest;
use crate::store::{FileStore, FsStore};

/// Version field before and after one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    pub from: String,
    pub to: String,
}

/// Applies version mutations to manifests held by a [FileStore]
#[derive(Debug, Clone)]
pub struct ManifestBumper<S> {
    store: S,
    trailing_newline: bool,
}

impl ManifestBumper<FsStore> {
    /// Bumper over the local filesystem
    pub fn fs() -> Self {
        ManifestBumper::new(FsStore)
    }
}

impl<S: FileStore> ManifestBumper<S> {
    /// Create a bumper over `store`, writing a trailing newline by default
    pub fn new(store: S) -> Self {
        ManifestBumper {
            store,
            trailing_newline: true,
        }
    }

    /// Whether rewritten manifests end with a newline
    pub fn trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read and decode the manifest at `path`
    pub fn read_manifest(&self, path: &Path) -> Result<Manifest> {
        let bytes = self.store.read(path)?;
        Manifest::from_slice(path, &bytes)
    }

    /// Encode `manifest` canonically and replace the file at `path`
    pub fn write_manifest(&self, path: &Path, manifest: &Manifest) -> Result<()> {
        let content = manifest.to_json(self.trailing_newline)?;
        self.store.write(path, content.as_bytes())
    }

    /// Raw version field, without semantic validation
    pub fn get_version(&self, path: &Path) -> Result<String> {
        Ok(self.read_manifest(path)?.version)
    }

    /// `(major+1).0.0`, dropping any pre-release
    pub fn bump_major(&self, path: &Path) -> Result<String> {
        self.bump(path, BumpKind::Major)
    }

    /// `major.(minor+1).0`, dropping any pre-release
    pub fn bump_minor(&self, path: &Path) -> Result<String> {
        self.bump(path, BumpKind::Minor)
    }

    /// `major.minor.(patch+1)`, dropping any pre-release
    pub fn bump_patch(&self, path: &Path) -> Result<String> {
        self.bump(path, BumpKind::Patch)
    }

    /// Bump by a kind tag ("major", "minor" or "patch")
    ///
    /// An unknown tag fails with `InvalidBumpKind` before the manifest is read.
    pub fn bump_by(&self, path: &Path, tag: &str) -> Result<String> {
        let kind = BumpKind::parse(tag)?;
        self.bump(path, kind)
    }

    pub fn bump(&self, path: &Path, kind: BumpKind) -> Result<String> {
        Ok(self.apply(path, &Change::Bump(kind))?.to)
    }

    /// Set the pre-release label, replacing any existing one
    pub fn add_pre_release(&self, path: &Path, identifier: &str) -> Result<String> {
        let change = Change::AddPreRelease(identifier.to_string());
        Ok(self.apply(path, &change)?.to)
    }

    /// Clear the pre-release label
    pub fn remove_pre_release(&self, path: &Path) -> Result<String> {
        Ok(self.apply(path, &Change::RemovePreRelease)?.to)
    }

    /// Apply `change` with a single read and a single write of the manifest
    pub fn apply(&self, path: &Path, change: &Change) -> Result<VersionChange> {
        let manifest = self.read_manifest(path)?;
        let current = Version::parse(&manifest.version)?;
        let next = change.apply_to(&current)?.to_string();

        debug!(path = %path.display(), from = %current, to = %next, "updating version");

        self.write_manifest(path, &manifest.with_version(next.as_str()))?;
        Ok(VersionChange {
            from: manifest.version,
            to: next,
        })
    }
}

/// Read the manifest at `path` from the filesystem
pub fn read_manifest(path: impl AsRef<Path>) -> Result<Manifest> {
    ManifestBumper::fs().read_manifest(path.as_ref())
}

/// Write `manifest` to `path` in canonical form
pub fn write_manifest(path: impl AsRef<Path>, manifest: &Manifest) -> Result<()> {
    ManifestBumper::fs().write_manifest(path.as_ref(), manifest)
}

pub fn get_version(path: impl AsRef<Path>) -> Result<String> {
    ManifestBumper::fs().get_version(path.as_ref())
}

pub fn bump_major(path: impl AsRef<Path>) -> Result<String> {
    ManifestBumper::fs().bump_major(path.as_ref())
}

pub fn bump_minor(path: impl AsRef<Path>) -> Result<String> {
    ManifestBumper::fs().bump_minor(path.as_ref())
}

pub fn bump_patch(path: impl AsRef<Path>) -> Result<String> {
    ManifestBumper::fs().bump_patch(path.as_ref())
}

pub fn bump_by(path: impl AsRef<Path>, tag: &str) -> Result<String> {
    ManifestBumper::fs().bump_by(path.as_ref(), tag)
}

pub fn add_pre_release(path: impl AsRef<Path>, identifier: &str) -> Result<String> {
    ManifestBumper::fs().add_pre_release(path.as_ref(), identifier)
}

pub fn remove_pre_release(path: impl AsRef<Path>) -> Result<String> {
    ManifestBumper::fs().remove_pre_release(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Component;
    use crate::error::BumpError;
    use crate::store::MemoryStore;

    const PATH: &str = "package.json";

    fn bumper_with(version: &str) -> ManifestBumper<MemoryStore> {
        let store = MemoryStore::new();
        let manifest = Manifest::new("test-package", version);
        store.insert(PATH, manifest.to_json(true).unwrap());
        ManifestBumper::new(store)
    }

    fn path() -> &'static Path {
        Path::new(PATH)
    }

    #[test]
    fn test_bump_major() {
        let bumper = bumper_with("1.2.3");
        assert_eq!(bumper.bump_major(path()).unwrap(), "2.0.0");
        assert_eq!(bumper.get_version(path()).unwrap(), "2.0.0");
    }

    #[test]
    fn test_bump_minor() {
        let bumper = bumper_with("1.2.3");
        assert_eq!(bumper.bump_minor(path()).unwrap(), "1.3.0");
    }

    #[test]
    fn test_bump_patch() {
        let bumper = bumper_with("1.2.3");
        assert_eq!(bumper.bump_patch(path()).unwrap(), "1.2.4");
    }

    #[test]
    fn test_bump_by_dispatches() {
        let bumper = bumper_with("1.2.3");
        assert_eq!(bumper.bump_by(path(), "minor").unwrap(), "1.3.0");
        assert_eq!(bumper.bump_by(path(), "patch").unwrap(), "1.3.1");
        assert_eq!(bumper.bump_by(path(), "major").unwrap(), "2.0.0");
    }

    #[test]
    fn test_bump_by_unknown_tag_leaves_file_untouched() {
        let bumper = bumper_with("1.2.3");
        let before = bumper.store().contents(PATH);

        let err = bumper.bump_by(path(), "prerelease").unwrap_err();
        assert!(matches!(err, BumpError::InvalidBumpKind(ref tag) if tag == "prerelease"));
        assert_eq!(bumper.store().contents(PATH), before);
    }

    #[test]
    fn test_bump_by_unknown_tag_checked_before_read() {
        let bumper = ManifestBumper::new(MemoryStore::new());
        let err = bumper.bump_by(path(), "huge").unwrap_err();
        assert!(matches!(err, BumpError::InvalidBumpKind(_)));
    }

    #[test]
    fn test_pre_release_overwrite() {
        let bumper = bumper_with("1.2.3");
        assert_eq!(bumper.add_pre_release(path(), "beta").unwrap(), "1.2.3-beta");
        assert_eq!(bumper.add_pre_release(path(), "rc1").unwrap(), "1.2.3-rc1");
    }

    #[test]
    fn test_remove_then_bump_patch() {
        let bumper = bumper_with("1.2.3-beta");
        assert_eq!(bumper.remove_pre_release(path()).unwrap(), "1.2.3");
        assert_eq!(bumper.bump_patch(path()).unwrap(), "1.2.4");
    }

    #[test]
    fn test_bump_strips_pre_release() {
        let bumper = bumper_with("1.2.3-beta.2");
        assert_eq!(bumper.bump_minor(path()).unwrap(), "1.3.0");
    }

    #[test]
    fn test_remove_pre_release_without_label() {
        let bumper = bumper_with("1.2.3");
        assert_eq!(bumper.remove_pre_release(path()).unwrap(), "1.2.3");
    }

    #[test]
    fn test_invalid_version_propagates_without_write() {
        let bumper = bumper_with("a.2.3");
        let before = bumper.store().contents(PATH);

        match bumper.bump_patch(path()) {
            Err(BumpError::InvalidComponent { component, text }) => {
                assert_eq!(component, Component::Major);
                assert_eq!(text, "a");
            }
            other => panic!("expected InvalidComponent, got {:?}", other),
        }
        assert_eq!(bumper.store().contents(PATH), before);
    }

    #[test]
    fn test_invalid_format_propagates() {
        let bumper = bumper_with("1.2");
        assert!(matches!(
            bumper.add_pre_release(path(), "beta"),
            Err(BumpError::InvalidFormat(ref v)) if v == "1.2"
        ));
    }

    #[test]
    fn test_get_version_does_not_validate() {
        let bumper = bumper_with("latest");
        assert_eq!(bumper.get_version(path()).unwrap(), "latest");
    }

    #[test]
    fn test_missing_manifest_is_io_error() {
        let bumper = ManifestBumper::new(MemoryStore::new());
        let err = bumper.bump_major(path()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_write_failure_keeps_previous_content() {
        let bumper = bumper_with("1.2.3");
        bumper.store().set_read_only(true);

        let err = bumper.bump_major(path()).unwrap_err();
        assert!(matches!(err, BumpError::Io { .. }));
        assert_eq!(bumper.get_version(path()).unwrap(), "1.2.3");
    }

    #[test]
    fn test_other_fields_preserved() {
        let store = MemoryStore::new();
        store.insert(
            PATH,
            r#"{"name":"pkg","version":"0.9.9","description":"d","private":true,"license":"MIT","scripts":{"test":"go test"}}"#,
        );
        let bumper = ManifestBumper::new(store);

        bumper.bump_minor(path()).unwrap();

        let manifest = bumper.read_manifest(path()).unwrap();
        assert_eq!(manifest.name, "pkg");
        assert_eq!(manifest.version, "0.10.0");
        assert_eq!(manifest.description, "d");
        assert!(manifest.private);
        assert_eq!(manifest.license, "MIT");
        assert_eq!(manifest.scripts.get("test").map(String::as_str), Some("go test"));
    }

    #[test]
    fn test_bump_at_largest_component_fails_without_write() {
        let bumper = bumper_with("18446744073709551615.0.0");
        let before = bumper.store().contents(PATH);

        match bumper.bump_major(path()) {
            Err(BumpError::Overflow { component, value }) => {
                assert_eq!(component, Component::Major);
                assert_eq!(value, u64::MAX);
            }
            other => panic!("expected Overflow, got {:?}", other),
        }
        assert_eq!(bumper.store().contents(PATH), before);

        // lower components still bump
        assert_eq!(
            bumper.bump_patch(path()).unwrap(),
            "18446744073709551615.0.1"
        );
    }

    #[test]
    fn test_apply_reports_both_versions() {
        let bumper = bumper_with("1.2.3-beta");
        let change = bumper.apply(path(), &Change::Bump(BumpKind::Minor)).unwrap();
        assert_eq!(change.from, "1.2.3-beta");
        assert_eq!(change.to, "1.3.0");
        assert_eq!(bumper.get_version(path()).unwrap(), "1.3.0");
    }

    #[test]
    fn test_trailing_newline_toggle() {
        let store = MemoryStore::new();
        store.insert(PATH, r#"{"version":"1.0.0"}"#);
        let bumper = ManifestBumper::new(store).trailing_newline(false);

        bumper.bump_patch(path()).unwrap();
        let content = bumper.store().contents(PATH).unwrap();
        assert!(content.ends_with('}'));
    }
}
