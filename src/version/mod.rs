//! Version checking layer
//!
//! Fetches the latest published version of a package, resolves the locally
//! installed one, and compares the two.
//!
//! # Modules
//!
//! - [`checker`]: Update check orchestration and the [`checker::VersionCheck`] outcome
//! - [`installed`]: Installed-version source chain
//! - [`registry`]: Registry trait for fetching the latest published version
//! - [`registries`]: Concrete registry implementations (PyPI)
//! - [`semver`]: Tolerant dotted-version normalization and comparison
//! - [`error`]: Registry error types

pub mod checker;
pub mod error;
pub mod installed;
pub mod registries;
pub mod registry;
pub mod semver;
