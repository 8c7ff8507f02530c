//! Survey list page

use super::{Link, PageContext, PageHeader, PageResponse, billing_path};
use canvass_core::{Error, Project, ProjectChannel, Result, TemplateFilter, TemplateRole};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Document title of the page
pub const PAGE_TITLE: &str = "Your Surveys";

/// Query string of the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveysPageParams {
    pub role: Option<TemplateRole>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyListProps {
    pub environment_id: String,
    pub is_read_only: bool,
    pub public_domain: String,
    pub user_id: String,
    pub surveys_per_page: u32,
    pub current_project_channel: Option<ProjectChannel>,
    pub locale: String,
}

/// Project as the template gallery expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateProject {
    pub project: Project,
    pub brand_color: Option<String>,
    pub highlight_border_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateListProps {
    pub environment_id: String,
    pub project: TemplateProject,
    pub user_id: String,
    /// Channel, industry and role, in that order
    pub prefilled_filters: [Option<TemplateFilter>; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SurveysContent {
    List {
        header: PageHeader,
        list: SurveyListProps,
    },
    /// No surveys yet and the member may not create any
    ReadOnlyEmpty { title: String, warning: String },
    /// No surveys yet; start from a template
    Templates {
        title: String,
        templates: TemplateListProps,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveysPageView {
    pub title: &'static str,
    pub content: SurveysContent,
}

pub struct SurveysPage {
    ctx: PageContext,
}

impl SurveysPage {
    pub const fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn load(
        &self,
        environment_id: &str,
        params: &SurveysPageParams,
    ) -> Result<PageResponse<SurveysPageView>> {
        let ctx = &self.ctx;

        let Some(project) = ctx
            .state
            .get_project_by_environment_id(environment_id)
            .await?
        else {
            return Err(Error::ProjectNotFound(
                ctx.translator.t("common.project_not_found"),
            ));
        };

        let auth = ctx.auth.environment_auth(environment_id).await?;

        let prefilled_filters = [
            project.config.channel.map(TemplateFilter::Channel),
            project.config.industry.map(TemplateFilter::Industry),
            params.role.map(TemplateFilter::Role),
        ];

        if auth.is_billing {
            debug!("billing member redirected to billing settings");
            return Ok(PageResponse::Redirect(billing_path(environment_id)));
        }

        let survey_count = ctx.state.get_survey_count(environment_id).await?;
        let user_id = auth.session.user.id.clone();
        let current_project_channel = project.config.channel;
        let locale = ctx
            .state
            .get_user_locale(&user_id)
            .await?
            .unwrap_or_else(|| ctx.config.default_locale.clone());

        let content = if survey_count > 0 {
            let cta = (!auth.is_read_only).then(|| Link {
                text: ctx.translator.t("environments.surveys.new_survey"),
                href: format!("/environments/{}/surveys/templates", auth.environment.id),
            });

            SurveysContent::List {
                header: PageHeader {
                    title: ctx.translator.t("common.surveys"),
                    cta,
                },
                list: SurveyListProps {
                    environment_id: auth.environment.id.clone(),
                    is_read_only: auth.is_read_only,
                    public_domain: ctx.config.public_domain.clone(),
                    user_id,
                    surveys_per_page: ctx.config.surveys_per_page,
                    current_project_channel,
                    locale,
                },
            }
        } else if auth.is_read_only {
            SurveysContent::ReadOnlyEmpty {
                title: ctx.translator.t("environments.surveys.no_surveys_created_yet"),
                warning: ctx.translator.t(
                    "environments.surveys.read_only_user_not_allowed_to_create_survey_warning",
                ),
            }
        } else {
            SurveysContent::Templates {
                title: ctx
                    .translator
                    .t("environments.surveys.all_set_time_to_create_first_survey"),
                templates: TemplateListProps {
                    environment_id: auth.environment.id.clone(),
                    project: TemplateProject {
                        brand_color: project.brand_color().map(str::to_string),
                        highlight_border_color: None,
                        project,
                    },
                    user_id,
                    prefilled_filters,
                },
            }
        };

        Ok(PageResponse::Render(SurveysPageView {
            title: PAGE_TITLE,
            content,
        }))
    }
}
