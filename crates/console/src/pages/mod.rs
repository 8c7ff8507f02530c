//! Server-side page models
//!
//! Each page resolves its data through the collaborators in [`PageContext`]
//! and returns a view describing exactly what to render.

pub mod profile;
pub mod surveys;

use crate::config::ConsoleConfig;
use canvass_core::{EnvironmentAuthenticator, LicenseCheck, StateBackend, Translate};
use serde::Serialize;
use std::sync::Arc;

pub use profile::{ProfilePage, ProfilePageView};
pub use surveys::{SurveysPage, SurveysPageParams, SurveysPageView};

/// Collaborators shared by every page
#[derive(Clone)]
pub struct PageContext {
    pub state: Arc<dyn StateBackend>,
    pub auth: Arc<dyn EnvironmentAuthenticator>,
    pub license: Arc<dyn LicenseCheck>,
    pub translator: Arc<dyn Translate>,
    pub config: Arc<ConsoleConfig>,
}

/// Outcome of loading a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PageResponse<T> {
    Render(T),
    Redirect(String),
}

impl<T> PageResponse<T> {
    pub fn into_view(self) -> Option<T> {
        match self {
            Self::Render(view) => Some(view),
            Self::Redirect(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageHeader {
    pub title: String,
    /// Call to action shown next to the title
    pub cta: Option<Link>,
}

pub(crate) fn billing_path(environment_id: &str) -> String {
    format!("/environments/{environment_id}/settings/billing")
}
