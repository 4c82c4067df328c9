//! bump-pkg - semantic version bumping for `package.json` manifests.
//!
//! Reads a manifest, parses its `MAJOR.MINOR.PATCH[-prerelease]` version,
//! applies a bump or pre-release change and writes the manifest back.

pub mod bumper;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod store;
pub mod ui;

pub use bumper::{
    add_pre_release, bump_by, bump_major, bump_minor, bump_patch, get_version, read_manifest,
    remove_pre_release, write_manifest, ManifestBumper, VersionChange,
};
pub use domain::{format_version, BumpKind, Change, Component, Version};
pub use error::{BumpError, Result};
pub use manifest::Manifest;
pub use store::{FileStore, FsStore, MemoryStore};
