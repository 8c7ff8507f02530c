//! Form state for assembling the permissions of a new API key

use async_trait::async_trait;
use canvass_core::{
    AccessType, ApiKeyPermission, CreateApiKeyRequest, EnvironmentPermission, EnvironmentType,
    OrganizationAccess, OrganizationAccessCategory, OrganizationProject,
};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Persists a new API key; owned by the embedding application
#[async_trait]
pub trait SubmitApiKey: Send + Sync {
    async fn submit(&self, request: CreateApiKeyRequest) -> canvass_core::Result<()>;
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("The same project environment was selected more than once")]
    DuplicateAccess,

    #[error(transparent)]
    Submit(#[from] canvass_core::Error),
}

/// Identifier of a permission row, rendered as `permission-<n>`
///
/// Keys come from a per-editor counter and are never handed out twice, so a
/// key held by the UI can't silently point at a different row after removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(u64);

impl RowKey {
    #[must_use]
    pub const fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "permission-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRow {
    pub key: RowKey,
    pub project_id: String,
    pub environment_id: String,
    pub permission: ApiKeyPermission,
    pub project_name: String,
    pub environment_type: EnvironmentType,
}

/// A single-field change to a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowUpdate {
    /// Switch project; the environment resets to the project's first one
    Project(String),
    Environment(String),
    Permission(ApiKeyPermission),
}

#[derive(Debug, Clone)]
pub struct PermissionEditor {
    projects: Vec<OrganizationProject>,
    label: String,
    rows: Vec<PermissionRow>,
    organization_access: OrganizationAccess,
    next_key: u64,
}

impl PermissionEditor {
    pub fn new(projects: Vec<OrganizationProject>) -> Self {
        Self {
            projects,
            label: String::new(),
            rows: Vec::new(),
            organization_access: OrganizationAccess::default(),
            next_key: 0,
        }
    }

    pub fn projects(&self) -> &[OrganizationProject] {
        &self.projects
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn rows(&self) -> &[PermissionRow] {
        &self.rows
    }

    pub fn row(&self, key: RowKey) -> Option<&PermissionRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub const fn organization_access(&self) -> &OrganizationAccess {
        &self.organization_access
    }

    fn project(&self, project_id: &str) -> Option<&OrganizationProject> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Append a row bound to the first project and its first environment
    ///
    /// Returns `None` without changing anything when there is no project with
    /// an environment to default to.
    pub fn add_row(&mut self) -> Option<RowKey> {
        let project = self.projects.first()?;
        let environment = project.environments.first()?;

        let key = RowKey(self.next_key);
        self.next_key += 1;

        self.rows.push(PermissionRow {
            key,
            project_id: project.id.clone(),
            environment_id: environment.id.clone(),
            permission: ApiKeyPermission::Read,
            project_name: project.name.clone(),
            environment_type: environment.environment_type,
        });
        debug!(row = %key, rows = self.rows.len(), "permission row added");
        Some(key)
    }

    /// Apply a field update to one row, returning whether anything changed
    pub fn update_row(&mut self, key: RowKey, update: RowUpdate) -> bool {
        let Some(index) = self.rows.iter().position(|r| r.key == key) else {
            return false;
        };

        match update {
            RowUpdate::Project(project_id) => {
                let Some(project) = self.project(&project_id) else {
                    return false;
                };
                let Some(environment) = project.environments.first() else {
                    return false;
                };
                let (project_name, environment_id, environment_type) = (
                    project.name.clone(),
                    environment.id.clone(),
                    environment.environment_type,
                );

                let row = &mut self.rows[index];
                row.project_id = project_id;
                row.project_name = project_name;
                row.environment_id = environment_id;
                row.environment_type = environment_type;
            }
            RowUpdate::Environment(environment_id) => {
                let environment_type = self
                    .project(&self.rows[index].project_id)
                    .and_then(|p| p.environment(&environment_id))
                    .map(|e| e.environment_type);

                let row = &mut self.rows[index];
                row.environment_id = environment_id;
                if let Some(environment_type) = environment_type {
                    row.environment_type = environment_type;
                }
            }
            RowUpdate::Permission(permission) => {
                self.rows[index].permission = permission;
            }
        }

        debug!(row = %key, "permission row updated");
        true
    }

    /// Remove a row; unknown keys are ignored and other keys stay stable
    pub fn remove_row(&mut self, key: RowKey) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.key != key);
        let removed = self.rows.len() != before;
        if removed {
            debug!(row = %key, rows = self.rows.len(), "permission row removed");
        }
        removed
    }

    pub fn set_organization_access(
        &mut self,
        category: OrganizationAccessCategory,
        access: AccessType,
        value: bool,
    ) {
        self.organization_access.set(category, access, value);
    }

    /// Whether two rows target the same project environment
    pub fn has_duplicate_access(&self) -> bool {
        let unique: HashSet<(&str, &str)> = self
            .rows
            .iter()
            .map(|r| (r.project_id.as_str(), r.environment_id.as_str()))
            .collect();
        unique.len() < self.rows.len()
    }

    /// A label is required, plus at least one row or organization flag
    pub fn can_submit(&self) -> bool {
        if self.label.trim().is_empty() {
            return false;
        }
        !self.rows.is_empty() || self.organization_access.any_granted()
    }

    /// The payload the current state would submit
    pub fn request(&self) -> CreateApiKeyRequest {
        CreateApiKeyRequest {
            label: self.label.clone(),
            environment_permissions: self
                .rows
                .iter()
                .map(|r| EnvironmentPermission {
                    environment_id: r.environment_id.clone(),
                    permission: r.permission,
                })
                .collect(),
            organization_access: self.organization_access.clone(),
        }
    }

    /// Hand the assembled key to `submitter`, then reset the form
    ///
    /// Duplicate project environments abort before the submitter is called.
    /// On any error the form is left as it was.
    pub async fn submit<S>(&mut self, submitter: &S) -> Result<(), EditorError>
    where
        S: SubmitApiKey + ?Sized,
    {
        if self.has_duplicate_access() {
            warn!(rows = self.rows.len(), "duplicate project environment access");
            return Err(EditorError::DuplicateAccess);
        }

        let request = self.request();
        let permissions = request.environment_permissions.len();
        submitter.submit(request).await?;

        info!(permissions, "api key submitted");
        self.reset();
        Ok(())
    }

    /// Clear label, rows and organization access
    pub fn reset(&mut self) {
        self.label.clear();
        self.rows.clear();
        self.organization_access = OrganizationAccess::default();
    }
}
