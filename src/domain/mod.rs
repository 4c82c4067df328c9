//! Domain logic - version rules independent of manifest storage

pub mod bump;
pub mod version;

pub use bump::{BumpKind, Change};
pub use version::{format_version, Component, Version};
