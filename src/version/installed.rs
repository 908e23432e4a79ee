//! Installed-version resolution
//!
//! The locally installed version is resolved by trying an ordered list of
//! sources, stopping at the first one that produces a value. When every
//! source comes up empty, the sentinel [`UNKNOWN_VERSION`] is reported.

use tracing::debug;

use crate::config::INSTALLED_VERSION_VAR;

/// Sentinel reported when no source can produce an installed version
pub const UNKNOWN_VERSION: &str = "unknown";

/// A single strategy for producing the locally installed version string
pub trait VersionSource: Send + Sync {
    /// Attempt to produce a version string
    ///
    /// `None` means "not available here, try the next source".
    fn installed_version(&self) -> Option<String>;
}

/// Reads the version recorded by the deployment in an environment variable
pub struct EnvVersionSource {
    var: String,
}

impl EnvVersionSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl VersionSource for EnvVersionSource {
    fn installed_version(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|v| !v.is_empty())
    }
}

/// Reports the version this crate was compiled with
pub struct BuildVersionSource;

impl VersionSource for BuildVersionSource {
    fn installed_version(&self) -> Option<String> {
        option_env!("CARGO_PKG_VERSION").map(str::to_owned)
    }
}

/// The default resolution order: deployment-recorded version first, then the
/// compiled-in crate version.
pub fn default_sources() -> Vec<Box<dyn VersionSource>> {
    vec![
        Box::new(EnvVersionSource::new(INSTALLED_VERSION_VAR)),
        Box::new(BuildVersionSource),
    ]
}

/// Resolve the installed version through `sources`, first success wins
pub fn resolve_installed_version(sources: &[Box<dyn VersionSource>]) -> String {
    match sources.iter().find_map(|source| source.installed_version()) {
        Some(version) => version,
        None => {
            debug!("No source produced an installed version, reporting {UNKNOWN_VERSION:?}");
            UNKNOWN_VERSION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct FixedVersionSource(Option<&'static str>);

    impl VersionSource for FixedVersionSource {
        fn installed_version(&self) -> Option<String> {
            self.0.map(str::to_owned)
        }
    }

    #[test]
    fn resolve_installed_version_stops_at_first_success() {
        let sources: Vec<Box<dyn VersionSource>> = vec![
            Box::new(FixedVersionSource(None)),
            Box::new(FixedVersionSource(Some("1.2.3"))),
            Box::new(FixedVersionSource(Some("9.9.9"))),
        ];

        assert_eq!(resolve_installed_version(&sources), "1.2.3");
    }

    #[test]
    fn resolve_installed_version_reports_unknown_when_all_sources_fail() {
        let sources: Vec<Box<dyn VersionSource>> = vec![
            Box::new(FixedVersionSource(None)),
            Box::new(FixedVersionSource(None)),
        ];

        assert_eq!(resolve_installed_version(&sources), UNKNOWN_VERSION);
    }

    #[test]
    fn resolve_installed_version_reports_unknown_for_empty_chain() {
        assert_eq!(resolve_installed_version(&[]), UNKNOWN_VERSION);
    }

    #[test]
    fn build_version_source_reports_crate_version() {
        assert_eq!(
            BuildVersionSource.installed_version(),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    #[serial]
    fn env_version_source_reads_variable_when_set() {
        // SAFETY: serialized with the other env-mutating test
        unsafe { std::env::set_var("UPDATE_CHECK_TEST_VERSION", "2.0.0") };
        let source = EnvVersionSource::new("UPDATE_CHECK_TEST_VERSION");

        assert_eq!(source.installed_version(), Some("2.0.0".to_string()));

        unsafe { std::env::remove_var("UPDATE_CHECK_TEST_VERSION") };
    }

    #[test]
    #[serial]
    fn env_version_source_skips_unset_or_empty_variable() {
        unsafe { std::env::remove_var("UPDATE_CHECK_TEST_VERSION") };
        let source = EnvVersionSource::new("UPDATE_CHECK_TEST_VERSION");
        assert_eq!(source.installed_version(), None);

        unsafe { std::env::set_var("UPDATE_CHECK_TEST_VERSION", "") };
        assert_eq!(source.installed_version(), None);
        unsafe { std::env::remove_var("UPDATE_CHECK_TEST_VERSION") };
    }
}
