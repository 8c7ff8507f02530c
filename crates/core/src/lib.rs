//! Canvass core types and collaborator traits

pub mod error;
pub mod i18n;
pub mod state;
pub mod tracing;
pub mod types;
pub mod validation;

#[cfg(any(test, feature = "tests"))]
pub mod tests;

pub use error::{Error, Result};
pub use i18n::{Catalog, KeyTranslator, Translate};
pub use state::{EnvironmentAuthenticator, LicenseCheck, StateBackend};
pub use types::*;
