use crate::{EnvironmentAuth, Organization, OrganizationProject, Project, Result, User};
use async_trait::async_trait;

#[async_trait]
pub trait StateBackend: Send + Sync {
    // User management
    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;
    async fn get_user_locale(&self, user_id: &str) -> Result<Option<String>>;

    // Organization management
    async fn get_organizations_where_user_is_single_owner(
        &self,
        user_id: &str,
    ) -> Result<Vec<Organization>>;
    async fn list_organization_projects(&self, org_id: &str) -> Result<Vec<OrganizationProject>>;

    // Project management
    async fn get_project_by_environment_id(&self, environment_id: &str)
    -> Result<Option<Project>>;

    // Survey management
    async fn get_survey_count(&self, environment_id: &str) -> Result<u64>;
}

/// Resolves the session and membership flags for an environment
#[async_trait]
pub trait EnvironmentAuthenticator: Send + Sync {
    async fn environment_auth(&self, environment_id: &str) -> Result<EnvironmentAuth>;
}

/// Enterprise license feature checks
#[async_trait]
pub trait LicenseCheck: Send + Sync {
    async fn is_two_factor_auth_enabled(&self) -> Result<bool>;
    async fn is_multi_org_enabled(&self) -> Result<bool>;
}
