//! Checks whether the locally installed package version is current against
//! the package index it is published to.
//!
//! The crate exposes a single high-level entry point,
//! [`version::checker::UpdateChecker`], which resolves the installed version
//! through an ordered chain of sources, fetches the latest published version
//! from a registry, and compares the two with a tolerant dotted-version
//! comparator. The check never fails: every lookup error degrades to a
//! well-defined default in the returned [`version::checker::VersionCheck`].

pub mod config;
pub mod version;
