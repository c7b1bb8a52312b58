//! Default use cases for `TestAppStateBuilder`. Each one fails loudly so a
//! handler test that reaches a slot it did not configure shows up as a 500.

use async_trait::async_trait;

use crate::modules::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminError, LoginAdminRequest, LoginAdminResponse,
};
use crate::modules::contact::application::domain::{ContactForm, MessageDetail, MessageSummary};
use crate::modules::contact::application::use_cases::{
    delete_message::{DeleteMessageError, IDeleteMessageUseCase},
    get_message::{GetMessageError, IGetMessageUseCase},
    list_messages::{IListMessagesUseCase, ListMessagesError},
    submit_contact::{ISubmitContactUseCase, SubmitContactError},
};
use crate::modules::content::application::domain::entities::ContentRecord;
use crate::modules::content::application::ports::outgoing::ContentListFilter;
use crate::modules::content::application::use_cases::{
    content_command::ContentCommand,
    create_content::{CreateContentError, ICreateContentUseCase},
    delete_content::{DeleteContentError, IDeleteContentUseCase},
    get_content::{GetContentError, IGetContentUseCase},
    list_content::{IListContentUseCase, ListContentError},
    update_content::{IUpdateContentUseCase, UpdateContentError},
};
use crate::modules::dashboard::application::domain::DashboardSummary;
use crate::modules::dashboard::application::use_cases::get_dashboard::{
    GetDashboardError, IGetDashboardUseCase,
};
use crate::modules::portfolio::application::domain::{PortfolioData, ServiceDetail};
use crate::modules::portfolio::application::use_cases::{
    get_portfolio::{GetPortfolioError, IGetPortfolioUseCase},
    get_service_detail::{GetServiceDetailError, IGetServiceDetailUseCase},
};
use crate::modules::project::application::domain::{ProjectCard, ProjectRecord};
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::modules::project::application::use_cases::{
    archive_project::{ArchiveProjectError, IArchiveProjectUseCase},
    create_project::{CreateProjectError, ICreateProjectUseCase},
    get_project::{GetProjectError, IGetProjectUseCase, ProjectDetail},
    list_project_categories::{IListProjectCategoriesUseCase, ListProjectCategoriesError},
    list_projects::{IListProjectsUseCase, ListProjectsError},
    list_public_projects::{IListPublicProjectsUseCase, ListPublicProjectsError},
    project_command::ProjectCommand,
    toggle_project::{IToggleProjectUseCase, ProjectFlag, ToggleProjectError},
    update_project::{IUpdateProjectUseCase, UpdateProjectError},
    upload_thumbnail::{IUploadThumbnailUseCase, UploadThumbnailError},
};
use crate::modules::service::application::domain::{ServiceRecord, ServiceView};
use crate::modules::service::application::ports::outgoing::ServiceListFilter;
use crate::modules::service::application::use_cases::{
    archive_service::{ArchiveServiceError, IArchiveServiceUseCase},
    create_service::{CreateServiceError, ICreateServiceUseCase},
    get_service::{GetServiceError, IGetServiceUseCase},
    list_public_services::{IListPublicServicesUseCase, ListPublicServicesError},
    list_services::{IListServicesUseCase, ListServicesError},
    service_command::ServiceCommand,
    toggle_service::{IToggleServiceUseCase, ToggleServiceError},
    update_service::{IUpdateServiceUseCase, UpdateServiceError},
};
use crate::shared::i18n::Locale;
use crate::shared::pagination::{ArchiveAction, PageRequest, PageResult};

const UNUSED: &str = "not used in this test";

fn unused() -> String {
    UNUSED.to_string()
}

// ---------------------------------------------------------------- services

pub struct StubListServicesUseCase;

#[async_trait]
impl IListServicesUseCase for StubListServicesUseCase {
    async fn execute(
        &self,
        _filter: ServiceListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ServiceRecord>, ListServicesError> {
        Ok(PageResult::empty(page))
    }
}

pub struct StubListPublicServicesUseCase;

#[async_trait]
impl IListPublicServicesUseCase for StubListPublicServicesUseCase {
    async fn execute(&self, _locale: Locale) -> Result<Vec<ServiceView>, ListPublicServicesError> {
        Ok(vec![])
    }
}

pub struct StubGetServiceUseCase;

#[async_trait]
impl IGetServiceUseCase for StubGetServiceUseCase {
    async fn execute(&self, _id: i32) -> Result<ServiceRecord, GetServiceError> {
        Err(GetServiceError::NotFound)
    }
}

pub struct StubCreateServiceUseCase;

#[async_trait]
impl ICreateServiceUseCase for StubCreateServiceUseCase {
    async fn execute(&self, _command: ServiceCommand) -> Result<ServiceRecord, CreateServiceError> {
        Err(CreateServiceError::RepositoryError(unused()))
    }
}

pub struct StubUpdateServiceUseCase;

#[async_trait]
impl IUpdateServiceUseCase for StubUpdateServiceUseCase {
    async fn execute(
        &self,
        _id: i32,
        _command: ServiceCommand,
    ) -> Result<ServiceRecord, UpdateServiceError> {
        Err(UpdateServiceError::RepositoryError(unused()))
    }
}

pub struct StubToggleServiceUseCase;

#[async_trait]
impl IToggleServiceUseCase for StubToggleServiceUseCase {
    async fn execute(&self, _id: i32) -> Result<ServiceRecord, ToggleServiceError> {
        Err(ToggleServiceError::NotFound)
    }
}

pub struct StubArchiveServiceUseCase;

#[async_trait]
impl IArchiveServiceUseCase for StubArchiveServiceUseCase {
    async fn execute(&self, _id: i32, _action: ArchiveAction) -> Result<(), ArchiveServiceError> {
        Err(ArchiveServiceError::NotFound)
    }
}

// ---------------------------------------------------------------- projects

pub struct StubListProjectsUseCase;

#[async_trait]
impl IListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(
        &self,
        _filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProjectRecord>, ListProjectsError> {
        Ok(PageResult::empty(page))
    }
}

pub struct StubListPublicProjectsUseCase;

#[async_trait]
impl IListPublicProjectsUseCase for StubListPublicProjectsUseCase {
    async fn execute(
        &self,
        _filter: ProjectListFilter,
        page: PageRequest,
        _locale: Locale,
    ) -> Result<PageResult<ProjectCard>, ListPublicProjectsError> {
        Ok(PageResult::empty(page))
    }
}

pub struct StubListProjectCategoriesUseCase;

#[async_trait]
impl IListProjectCategoriesUseCase for StubListProjectCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<String>, ListProjectCategoriesError> {
        Ok(vec![])
    }
}

pub struct StubGetProjectUseCase;

#[async_trait]
impl IGetProjectUseCase for StubGetProjectUseCase {
    async fn execute(&self, _id: i32) -> Result<ProjectDetail, GetProjectError> {
        Err(GetProjectError::NotFound)
    }
}

pub struct StubCreateProjectUseCase;

#[async_trait]
impl ICreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _command: ProjectCommand) -> Result<ProjectRecord, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(unused()))
    }
}

pub struct StubUpdateProjectUseCase;

#[async_trait]
impl IUpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _id: i32,
        _command: ProjectCommand,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        Err(UpdateProjectError::RepositoryError(unused()))
    }
}

pub struct StubToggleProjectUseCase;

#[async_trait]
impl IToggleProjectUseCase for StubToggleProjectUseCase {
    async fn execute(
        &self,
        _id: i32,
        _flag: ProjectFlag,
    ) -> Result<ProjectRecord, ToggleProjectError> {
        Err(ToggleProjectError::NotFound)
    }
}

pub struct StubArchiveProjectUseCase;

#[async_trait]
impl IArchiveProjectUseCase for StubArchiveProjectUseCase {
    async fn execute(&self, _id: i32, _action: ArchiveAction) -> Result<(), ArchiveProjectError> {
        Err(ArchiveProjectError::NotFound)
    }
}

pub struct StubUploadThumbnailUseCase;

#[async_trait]
impl IUploadThumbnailUseCase for StubUploadThumbnailUseCase {
    async fn execute(
        &self,
        _id: i32,
        _content_type: Option<&str>,
        _bytes: &[u8],
    ) -> Result<ProjectRecord, UploadThumbnailError> {
        Err(UploadThumbnailError::StorageError(unused()))
    }
}

// ---------------------------------------------------------------- content

pub struct StubListContentUseCase;

#[async_trait]
impl IListContentUseCase for StubListContentUseCase {
    async fn execute(
        &self,
        _filter: ContentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ContentRecord>, ListContentError> {
        Ok(PageResult::empty(page))
    }
}

pub struct StubGetContentUseCase;

#[async_trait]
impl IGetContentUseCase for StubGetContentUseCase {
    async fn execute(&self, _id: i32) -> Result<ContentRecord, GetContentError> {
        Err(GetContentError::NotFound)
    }
}

pub struct StubCreateContentUseCase;

#[async_trait]
impl ICreateContentUseCase for StubCreateContentUseCase {
    async fn execute(&self, _command: ContentCommand) -> Result<ContentRecord, CreateContentError> {
        Err(CreateContentError::RepositoryError(unused()))
    }
}

pub struct StubUpdateContentUseCase;

#[async_trait]
impl IUpdateContentUseCase for StubUpdateContentUseCase {
    async fn execute(
        &self,
        _id: i32,
        _command: ContentCommand,
    ) -> Result<ContentRecord, UpdateContentError> {
        Err(UpdateContentError::RepositoryError(unused()))
    }
}

pub struct StubDeleteContentUseCase;

#[async_trait]
impl IDeleteContentUseCase for StubDeleteContentUseCase {
    async fn execute(&self, _id: i32) -> Result<(), DeleteContentError> {
        Err(DeleteContentError::NotFound)
    }
}

// ---------------------------------------------------------------- contact

pub struct StubSubmitContactUseCase;

#[async_trait]
impl ISubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, _form: ContactForm) -> Result<(), SubmitContactError> {
        Err(SubmitContactError::RepositoryError(unused()))
    }
}

pub struct StubListMessagesUseCase;

#[async_trait]
impl IListMessagesUseCase for StubListMessagesUseCase {
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<MessageSummary>, ListMessagesError> {
        Ok(PageResult::empty(page))
    }
}

pub struct StubGetMessageUseCase;

#[async_trait]
impl IGetMessageUseCase for StubGetMessageUseCase {
    async fn execute(&self, _id: i32) -> Result<MessageDetail, GetMessageError> {
        Err(GetMessageError::NotFound)
    }
}

pub struct StubDeleteMessageUseCase;

#[async_trait]
impl IDeleteMessageUseCase for StubDeleteMessageUseCase {
    async fn execute(&self, _id: i32) -> Result<(), DeleteMessageError> {
        Err(DeleteMessageError::NotFound)
    }
}

// ---------------------------------------------------------------- public site

pub struct StubGetPortfolioUseCase;

#[async_trait]
impl IGetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self, _locale: Locale) -> Result<PortfolioData, GetPortfolioError> {
        Err(GetPortfolioError::RepositoryError(unused()))
    }
}

pub struct StubGetServiceDetailUseCase;

#[async_trait]
impl IGetServiceDetailUseCase for StubGetServiceDetailUseCase {
    async fn execute(
        &self,
        _slug: &str,
        _locale: Locale,
    ) -> Result<ServiceDetail, GetServiceDetailError> {
        Err(GetServiceDetailError::NotFound)
    }
}

// ---------------------------------------------------------------- admin

pub struct StubGetDashboardUseCase;

#[async_trait]
impl IGetDashboardUseCase for StubGetDashboardUseCase {
    async fn execute(&self) -> Result<DashboardSummary, GetDashboardError> {
        Err(GetDashboardError::RepositoryError(unused()))
    }
}

pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(
        &self,
        _request: LoginAdminRequest,
    ) -> Result<LoginAdminResponse, LoginAdminError> {
        Err(LoginAdminError::InvalidCredentials)
    }
}
