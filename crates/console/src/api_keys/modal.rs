//! Add-API-key dialog

use super::editor::{EditorError, PermissionEditor, RowKey, RowUpdate, SubmitApiKey};
use crate::notify::Notifier;
use canvass_core::{
    AccessType, ApiKeyPermission, Environment, OrganizationAccessCategory, OrganizationProject,
    Translate,
};
use std::sync::Arc;
use tracing::debug;

pub const TITLE_KEY: &str = "environments.project.api_keys.add_api_key";
pub const LABEL_KEY: &str = "environments.project.api_keys.api_key_label";
pub const LABEL_PLACEHOLDER: &str = "e.g. GitHub, PostHog, Slack";
pub const PROJECT_ACCESS_KEY: &str = "environments.project.api_keys.project_access";
pub const ADD_PERMISSION_KEY: &str = "environments.settings.api_keys.add_permission";
pub const ORGANIZATION_ACCESS_KEY: &str = "environments.project.api_keys.organization_access";
pub const ORGANIZATION_ACCESS_DESCRIPTION_KEY: &str =
    "environments.project.api_keys.organization_access_description";
pub const SECURITY_WARNING_KEY: &str = "environments.project.api_keys.api_key_security_warning";
pub const DUPLICATE_ACCESS_KEY: &str = "environments.project.api_keys.duplicate_access";

/// Translation key of an organization access category's row label
pub const fn organization_access_label_key(category: OrganizationAccessCategory) -> &'static str {
    match category {
        OrganizationAccessCategory::AccessControl => "environments.project.api_keys.access_control",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationAccessRow {
    pub category: OrganizationAccessCategory,
    pub display_name: String,
    pub read: bool,
    pub write: bool,
}

/// User interactions the dialog reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    Open,
    Cancel,
    LabelChanged(String),
    AddRow,
    UpdateRow(RowKey, RowUpdate),
    RemoveRow(RowKey),
    OrganizationAccessToggled {
        category: OrganizationAccessCategory,
        access: AccessType,
        value: bool,
    },
}

pub struct AddApiKeyModal {
    open: bool,
    is_creating: bool,
    editor: PermissionEditor,
    translator: Arc<dyn Translate>,
}

impl AddApiKeyModal {
    pub fn new(projects: Vec<OrganizationProject>, translator: Arc<dyn Translate>) -> Self {
        Self {
            open: false,
            is_creating: false,
            editor: PermissionEditor::new(projects),
            translator,
        }
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn editor(&self) -> &PermissionEditor {
        &self.editor
    }

    /// In-flight flag owned by the caller while its submit is pending
    pub const fn set_creating(&mut self, is_creating: bool) {
        self.is_creating = is_creating;
    }

    pub fn update(&mut self, message: ModalMessage) {
        match message {
            ModalMessage::Open => self.open = true,
            ModalMessage::Cancel => {
                self.open = false;
                self.editor.reset();
                debug!("api key dialog cancelled");
            }
            ModalMessage::LabelChanged(label) => self.editor.set_label(label),
            ModalMessage::AddRow => {
                self.editor.add_row();
            }
            ModalMessage::UpdateRow(key, update) => {
                self.editor.update_row(key, update);
            }
            ModalMessage::RemoveRow(key) => {
                self.editor.remove_row(key);
            }
            ModalMessage::OrganizationAccessToggled {
                category,
                access,
                value,
            } => self.editor.set_organization_access(category, access, value),
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        !self.editor.can_submit() || self.is_creating
    }

    /// Submit the form through `submitter`
    ///
    /// Returns `Ok(true)` once the key was handed off, `Ok(false)` when the
    /// form could not be submitted (disabled, or duplicate access which is
    /// reported through `notifier`). Errors from the submitter propagate.
    /// Announcing the created key is left to the submitter's owner.
    pub async fn submit<S>(
        &mut self,
        submitter: &S,
        notifier: &dyn Notifier,
    ) -> canvass_core::Result<bool>
    where
        S: SubmitApiKey + ?Sized,
    {
        if self.is_submit_disabled() {
            return Ok(false);
        }

        match self.editor.submit(submitter).await {
            Ok(()) => Ok(true),
            Err(EditorError::DuplicateAccess) => {
                notifier.error(&self.translator.t(DUPLICATE_ACCESS_KEY));
                Ok(false)
            }
            Err(EditorError::Submit(err)) => Err(err),
        }
    }

    pub fn title(&self) -> String {
        self.translator.t(TITLE_KEY)
    }

    pub fn project_options(&self) -> Vec<ProjectOption> {
        self.editor
            .projects()
            .iter()
            .map(|p| ProjectOption {
                id: p.id.clone(),
                name: p.name.clone(),
            })
            .collect()
    }

    /// Environments selectable for a project; empty for unknown projects
    pub fn environment_options(&self, project_id: &str) -> &[Environment] {
        self.editor
            .projects()
            .iter()
            .find(|p| p.id == project_id)
            .map(|p| p.environments.as_slice())
            .unwrap_or_default()
    }

    pub const fn permission_options(&self) -> [ApiKeyPermission; 3] {
        ApiKeyPermission::ALL
    }

    pub fn organization_access_rows(&self) -> Vec<OrganizationAccessRow> {
        self.editor
            .organization_access()
            .iter()
            .map(|(category, flags)| OrganizationAccessRow {
                category,
                display_name: self.translator.t(organization_access_label_key(category)),
                read: flags.read,
                write: flags.write,
            })
            .collect()
    }
}
