//! In-memory implementation of the collaborator traits for testing

use crate::{
    EnvironmentAuth, EnvironmentAuthenticator, Error, LicenseCheck, Organization,
    OrganizationProject, Project, Result, StateBackend, User,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<String, User>,
    single_owner_orgs: HashMap<String, Vec<Organization>>,
    org_projects: HashMap<String, Vec<String>>,
    projects: Vec<Project>,
    survey_counts: HashMap<String, u64>,
    auth: HashMap<String, EnvironmentAuth>,
}

/// In-memory backend implementing every collaborator trait
///
/// Also serves as the reference implementation exercised by
/// [`StateBackendTestSuite`](super::state::StateBackendTestSuite).
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    tables: RwLock<Tables>,
    pub two_factor_auth_enabled: bool,
    pub multi_org_enabled: bool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_license(mut self, two_factor_auth_enabled: bool, multi_org_enabled: bool) -> Self {
        self.two_factor_auth_enabled = two_factor_auth_enabled;
        self.multi_org_enabled = multi_org_enabled;
        self
    }

    pub async fn insert_user(&self, user: User) {
        self.tables.write().await.users.insert(user.id.clone(), user);
    }

    pub async fn insert_project(&self, org_id: &str, project: Project) {
        let mut tables = self.tables.write().await;
        tables
            .org_projects
            .entry(org_id.to_string())
            .or_default()
            .push(project.id.clone());
        tables.projects.retain(|p| p.id != project.id);
        tables.projects.push(project);
    }

    pub async fn set_single_owner_organizations(&self, user_id: &str, orgs: Vec<Organization>) {
        self.tables
            .write()
            .await
            .single_owner_orgs
            .insert(user_id.to_string(), orgs);
    }

    pub async fn set_survey_count(&self, environment_id: &str, count: u64) {
        self.tables
            .write()
            .await
            .survey_counts
            .insert(environment_id.to_string(), count);
    }

    pub async fn set_environment_auth(&self, auth: EnvironmentAuth) {
        self.tables
            .write()
            .await
            .auth
            .insert(auth.environment.id.clone(), auth);
    }
}

#[async_trait]
impl StateBackend for InMemoryBackend {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.tables.read().await.users.get(user_id).cloned())
    }

    async fn get_user_locale(&self, user_id: &str) -> Result<Option<String>> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .get(user_id)
            .and_then(|user| user.locale.clone()))
    }

    async fn get_organizations_where_user_is_single_owner(
        &self,
        user_id: &str,
    ) -> Result<Vec<Organization>> {
        Ok(self
            .tables
            .read()
            .await
            .single_owner_orgs
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_organization_projects(&self, org_id: &str) -> Result<Vec<OrganizationProject>> {
        let tables = self.tables.read().await;
        let Some(ids) = tables.org_projects.get(org_id) else {
            return Ok(Vec::new());
        };

        Ok(ids
            .iter()
            .filter_map(|id| tables.projects.iter().find(|p| &p.id == id))
            .cloned()
            .map(OrganizationProject::from)
            .collect())
    }

    async fn get_project_by_environment_id(
        &self,
        environment_id: &str,
    ) -> Result<Option<Project>> {
        Ok(self
            .tables
            .read()
            .await
            .projects
            .iter()
            .find(|p| p.environments.iter().any(|e| e.id == environment_id))
            .cloned())
    }

    async fn get_survey_count(&self, environment_id: &str) -> Result<u64> {
        Ok(self
            .tables
            .read()
            .await
            .survey_counts
            .get(environment_id)
            .copied()
            .unwrap_or(0))
    }
}

#[async_trait]
impl EnvironmentAuthenticator for InMemoryBackend {
    async fn environment_auth(&self, environment_id: &str) -> Result<EnvironmentAuth> {
        self.tables
            .read()
            .await
            .auth
            .get(environment_id)
            .cloned()
            .ok_or_else(|| Error::EnvironmentNotFound(environment_id.to_string()))
    }
}

#[async_trait]
impl LicenseCheck for InMemoryBackend {
    async fn is_two_factor_auth_enabled(&self) -> Result<bool> {
        Ok(self.two_factor_auth_enabled)
    }

    async fn is_multi_org_enabled(&self) -> Result<bool> {
        Ok(self.multi_org_enabled)
    }
}
