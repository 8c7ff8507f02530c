use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IdentityProvider {
    #[default]
    Email,
    Google,
    Github,
    AzureAd,
    OpenId,
    Saml,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub identity_provider: IdentityProvider,
    #[serde(default)]
    pub two_factor_enabled: bool,
    pub image_url: Option<String>,
    pub locale: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the user signs in with email and password
    pub fn uses_email_login(&self) -> bool {
        self.identity_provider == IdentityProvider::Email
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user: SessionUser,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentType {
    Production,
    Development,
}

impl EnvironmentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Environment {
    pub id: String,
    #[serde(rename = "type")]
    pub environment_type: EnvironmentType,
}

impl Environment {
    pub fn new(id: impl Into<String>, environment_type: EnvironmentType) -> Self {
        Self {
            id: id.into(),
            environment_type,
        }
    }
}

/// Result of resolving the caller's membership for an environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentAuth {
    pub session: Session,
    pub environment: Environment,
    /// Member only has access to billing settings
    pub is_billing: bool,
    pub is_read_only: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProjectChannel {
    Link,
    App,
    Website,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ProjectIndustry {
    ECommerce,
    Saas,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TemplateRole {
    Marketing,
    Sales,
    CustomerSuccess,
    ProductManager,
    PeopleManager,
}

/// A single entry of the template gallery's prefilled filter row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TemplateFilter {
    Channel(ProjectChannel),
    Industry(ProjectIndustry),
    Role(TemplateRole),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectConfig {
    pub channel: Option<ProjectChannel>,
    pub industry: Option<ProjectIndustry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandColor {
    pub light: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStyling {
    pub brand_color: Option<BrandColor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub environments: Vec<Environment>,
    #[serde(default)]
    pub config: ProjectConfig,
    pub styling: Option<ProjectStyling>,
    #[serde(default)]
    pub team_ids: Vec<String>,
}

impl Project {
    /// Light-mode brand color, if the project styling defines one
    pub fn brand_color(&self) -> Option<&str> {
        self.styling
            .as_ref()
            .and_then(|s| s.brand_color.as_ref())
            .and_then(|c| c.light.as_deref())
    }
}

/// Project as listed for an organization, the input of the API key editor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganizationProject {
    pub id: String,
    pub name: String,
    pub environments: Vec<Environment>,
}

impl OrganizationProject {
    pub fn environment(&self, environment_id: &str) -> Option<&Environment> {
        self.environments.iter().find(|e| e.id == environment_id)
    }
}

impl From<Project> for OrganizationProject {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            environments: project.environments,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyPermission {
    #[default]
    Read,
    Write,
    Manage,
}

impl ApiKeyPermission {
    pub const ALL: [Self; 3] = [Self::Read, Self::Write, Self::Manage];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Manage => "manage",
        }
    }
}

impl fmt::Display for ApiKeyPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Organization-wide capability group an API key can be granted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum OrganizationAccessCategory {
    AccessControl,
}

impl OrganizationAccessCategory {
    pub const ALL: [Self; 1] = [Self::AccessControl];

    pub const fn key(self) -> &'static str {
        match self {
            Self::AccessControl => "accessControl",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    Read,
    Write,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessFlags {
    pub read: bool,
    pub write: bool,
}

impl AccessFlags {
    pub const fn get(self, access: AccessType) -> bool {
        match access {
            AccessType::Read => self.read,
            AccessType::Write => self.write,
        }
    }

    pub fn set(&mut self, access: AccessType, value: bool) {
        match access {
            AccessType::Read => self.read = value,
            AccessType::Write => self.write = value,
        }
    }

    pub const fn any(self) -> bool {
        self.read || self.write
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct OrganizationAccess(BTreeMap<OrganizationAccessCategory, AccessFlags>);

impl OrganizationAccess {
    pub fn get(&self, category: OrganizationAccessCategory) -> AccessFlags {
        self.0.get(&category).copied().unwrap_or_default()
    }

    pub fn set(&mut self, category: OrganizationAccessCategory, access: AccessType, value: bool) {
        self.0.entry(category).or_default().set(access, value);
    }

    /// True if any flag of any category is switched on
    pub fn any_granted(&self) -> bool {
        self.0.values().any(|flags| flags.any())
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrganizationAccessCategory, AccessFlags)> + '_ {
        self.0.iter().map(|(category, flags)| (*category, *flags))
    }
}

impl Default for OrganizationAccess {
    fn default() -> Self {
        Self(
            OrganizationAccessCategory::ALL
                .into_iter()
                .map(|category| (category, AccessFlags::default()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentPermission {
    pub environment_id: String,
    pub permission: ApiKeyPermission,
}

/// Payload handed to the API key creation collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyRequest {
    pub label: String,
    pub environment_permissions: Vec<EnvironmentPermission>,
    pub organization_access: OrganizationAccess,
}
