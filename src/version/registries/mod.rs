//! Registry implementations for fetching the latest published version

pub mod pypi;

pub use pypi::PypiRegistry;
