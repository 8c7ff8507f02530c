//! Canvass console screens
//!
//! State and view models behind the account settings pages, the API key
//! dialog and the survey list. Rendering is left to the embedding frontend;
//! data access goes through the collaborator traits of `canvass-core`.

pub mod api_keys;
pub mod config;
pub mod error;
pub mod notify;
pub mod pages;

pub use crate::config::ConsoleConfig;
pub use error::{ConsoleError, Result};
pub use notify::{LogNotifier, Notifier};
pub use pages::{PageContext, PageResponse};
