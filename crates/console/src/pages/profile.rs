//! Account settings: profile page

use super::{Link, PageContext, billing_path};
use canvass_core::{Error, Organization, Result, User};
use serde::Serialize;
use tracing::instrument;

pub const UPGRADE_SELF_HOSTING_URL: &str = "https://canvass.app/upgrade-self-hosting-license";
pub const LEARN_MORE_SELF_HOSTING_URL: &str = "https://canvass.app/learn-more-self-hosting-license";

/// Tabs of the account settings navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountTab {
    Profile,
    Notifications,
}

impl AccountTab {
    pub const ALL: [Self; 2] = [Self::Profile, Self::Notifications];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Notifications => "notifications",
        }
    }

    const fn label_key(self) -> &'static str {
        match self {
            Self::Profile => "common.profile",
            Self::Notifications => "common.notifications",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountNavbar {
    pub active: AccountTab,
    pub tabs: Vec<Link>,
}

impl AccountNavbar {
    fn new(ctx: &PageContext, environment_id: &str, active: AccountTab) -> Self {
        let tabs = AccountTab::ALL
            .into_iter()
            .map(|tab| Link {
                text: ctx.translator.t(tab.label_key()),
                href: format!("/environments/{environment_id}/settings/{}", tab.id()),
            })
            .collect();
        Self { active, tabs }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsCard<T> {
    pub title: String,
    pub description: String,
    pub content: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileDetails {
    pub user: User,
    pub email_verification_disabled: bool,
    pub is_password_reset_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarSettings {
    pub environment_id: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradePrompt {
    pub title: String,
    pub description: String,
    pub buttons: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SecuritySection {
    /// The license lacks two-factor auth and the user has not set it up
    UpgradePrompt(UpgradePrompt),
    AccountSecurity { two_factor_enabled: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteAccountSettings {
    pub is_cloud: bool,
    pub organizations_with_single_owner: Vec<Organization>,
    pub is_multi_org_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsId {
    pub title: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePageView {
    pub title: String,
    pub navbar: AccountNavbar,
    pub personal_information: SettingsCard<ProfileDetails>,
    pub avatar: SettingsCard<AvatarSettings>,
    /// Only present for users signing in with email and password
    pub security: Option<SettingsCard<SecuritySection>>,
    pub delete_account: SettingsCard<DeleteAccountSettings>,
    pub settings_id: SettingsId,
}

pub struct ProfilePage {
    ctx: PageContext,
}

impl ProfilePage {
    pub const fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn load(&self, environment_id: &str) -> Result<ProfilePageView> {
        let ctx = &self.ctx;
        let is_two_factor_auth_enabled = ctx.license.is_two_factor_auth_enabled().await?;
        let is_multi_org_enabled = ctx.license.is_multi_org_enabled().await?;

        let auth = ctx.auth.environment_auth(environment_id).await?;
        let user_id = auth.session.user.id.as_str();

        let organizations_with_single_owner = ctx
            .state
            .get_organizations_where_user_is_single_owner(user_id)
            .await?;

        let Some(user) = ctx.state.get_user(user_id).await? else {
            return Err(Error::UserNotFound(ctx.translator.t("common.user_not_found")));
        };

        let is_password_reset_enabled =
            !ctx.config.password_reset_disabled && user.uses_email_login();

        let security = user.uses_email_login().then(|| SettingsCard {
            title: ctx.translator.t("common.security"),
            description: ctx
                .translator
                .t("environments.settings.profile.security_description"),
            content: if !is_two_factor_auth_enabled && !user.two_factor_enabled {
                SecuritySection::UpgradePrompt(self.upgrade_prompt(environment_id))
            } else {
                SecuritySection::AccountSecurity {
                    two_factor_enabled: user.two_factor_enabled,
                }
            },
        });

        Ok(ProfilePageView {
            title: ctx.translator.t("common.account_settings"),
            navbar: AccountNavbar::new(ctx, environment_id, AccountTab::Profile),
            avatar: SettingsCard {
                title: ctx.translator.t("common.avatar"),
                description: ctx
                    .translator
                    .t("environments.settings.profile.organization_identification"),
                content: AvatarSettings {
                    environment_id: environment_id.to_string(),
                    image_url: user.image_url.clone(),
                },
            },
            security,
            delete_account: SettingsCard {
                title: ctx.translator.t("environments.settings.profile.delete_account"),
                description: ctx
                    .translator
                    .t("environments.settings.profile.confirm_delete_account"),
                content: DeleteAccountSettings {
                    is_cloud: ctx.config.is_cloud,
                    organizations_with_single_owner,
                    is_multi_org_enabled,
                },
            },
            settings_id: SettingsId {
                title: ctx.translator.t("common.profile"),
                id: user.id.clone(),
            },
            personal_information: SettingsCard {
                title: ctx
                    .translator
                    .t("environments.settings.profile.personal_information"),
                description: ctx
                    .translator
                    .t("environments.settings.profile.update_personal_info"),
                content: ProfileDetails {
                    user,
                    email_verification_disabled: ctx.config.email_verification_disabled,
                    is_password_reset_enabled,
                },
            },
        })
    }

    fn upgrade_prompt(&self, environment_id: &str) -> UpgradePrompt {
        let ctx = &self.ctx;
        let (trial_text, trial_href, learn_more_href) = if ctx.config.is_cloud {
            (
                ctx.translator.t("common.start_free_trial"),
                billing_path(environment_id),
                billing_path(environment_id),
            )
        } else {
            (
                ctx.translator.t("common.request_trial_license"),
                UPGRADE_SELF_HOSTING_URL.to_string(),
                LEARN_MORE_SELF_HOSTING_URL.to_string(),
            )
        };

        UpgradePrompt {
            title: ctx
                .translator
                .t("environments.settings.profile.unlock_two_factor_authentication"),
            description: ctx
                .translator
                .t("environments.settings.profile.two_factor_authentication_description"),
            buttons: vec![
                Link {
                    text: trial_text,
                    href: trial_href,
                },
                Link {
                    text: ctx.translator.t("common.learn_more"),
                    href: learn_more_href,
                },
            ],
        }
    }
}
