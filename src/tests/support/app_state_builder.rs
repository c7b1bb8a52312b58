use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::use_cases::{
    delete_message::IDeleteMessageUseCase, get_message::IGetMessageUseCase,
    list_messages::IListMessagesUseCase, submit_contact::ISubmitContactUseCase,
};
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::use_cases::{
    create_content::ICreateContentUseCase, delete_content::IDeleteContentUseCase,
    get_content::IGetContentUseCase, list_content::IListContentUseCase,
    update_content::IUpdateContentUseCase,
};
use crate::modules::dashboard::application::use_cases::get_dashboard::IGetDashboardUseCase;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::use_cases::{
    get_portfolio::IGetPortfolioUseCase, get_service_detail::IGetServiceDetailUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::use_cases::{
    archive_project::IArchiveProjectUseCase, create_project::ICreateProjectUseCase,
    get_project::IGetProjectUseCase, list_project_categories::IListProjectCategoriesUseCase,
    list_projects::IListProjectsUseCase, list_public_projects::IListPublicProjectsUseCase,
    toggle_project::IToggleProjectUseCase, update_project::IUpdateProjectUseCase,
    upload_thumbnail::IUploadThumbnailUseCase,
};
use crate::modules::service::application::service_use_cases::ServiceUseCases;
use crate::modules::service::application::use_cases::{
    archive_service::IArchiveServiceUseCase, create_service::ICreateServiceUseCase,
    get_service::IGetServiceUseCase, list_public_services::IListPublicServicesUseCase,
    list_services::IListServicesUseCase, toggle_service::IToggleServiceUseCase,
    update_service::IUpdateServiceUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Assembles an `AppState` out of stubs; each `with_*` swaps one use case.
pub struct TestAppStateBuilder {
    service: ServiceUseCases,
    project: ProjectUseCases,
    content: ContentUseCases,
    contact: ContactUseCases,
    portfolio: PortfolioUseCases,
    dashboard: Arc<dyn IGetDashboardUseCase + Send + Sync>,
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            service: ServiceUseCases {
                list: Arc::new(StubListServicesUseCase),
                list_public: Arc::new(StubListPublicServicesUseCase),
                get: Arc::new(StubGetServiceUseCase),
                create: Arc::new(StubCreateServiceUseCase),
                update: Arc::new(StubUpdateServiceUseCase),
                toggle: Arc::new(StubToggleServiceUseCase),
                archive: Arc::new(StubArchiveServiceUseCase),
            },
            project: ProjectUseCases {
                list: Arc::new(StubListProjectsUseCase),
                list_public: Arc::new(StubListPublicProjectsUseCase),
                categories: Arc::new(StubListProjectCategoriesUseCase),
                get: Arc::new(StubGetProjectUseCase),
                create: Arc::new(StubCreateProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                toggle: Arc::new(StubToggleProjectUseCase),
                archive: Arc::new(StubArchiveProjectUseCase),
                upload_thumbnail: Arc::new(StubUploadThumbnailUseCase),
            },
            content: ContentUseCases {
                list: Arc::new(StubListContentUseCase),
                get: Arc::new(StubGetContentUseCase),
                create: Arc::new(StubCreateContentUseCase),
                update: Arc::new(StubUpdateContentUseCase),
                delete: Arc::new(StubDeleteContentUseCase),
            },
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitContactUseCase),
                list: Arc::new(StubListMessagesUseCase),
                get: Arc::new(StubGetMessageUseCase),
                delete: Arc::new(StubDeleteMessageUseCase),
            },
            portfolio: PortfolioUseCases {
                get: Arc::new(StubGetPortfolioUseCase),
                service_detail: Arc::new(StubGetServiceDetailUseCase),
            },
            dashboard: Arc::new(StubGetDashboardUseCase),
            login_admin: Arc::new(StubLoginAdminUseCase),
        }
    }
}

impl TestAppStateBuilder {
    // Services
    pub fn with_list_services(mut self, uc: impl IListServicesUseCase + 'static) -> Self {
        self.service.list = Arc::new(uc);
        self
    }

    pub fn with_list_public_services(
        mut self,
        uc: impl IListPublicServicesUseCase + 'static,
    ) -> Self {
        self.service.list_public = Arc::new(uc);
        self
    }

    pub fn with_get_service(mut self, uc: impl IGetServiceUseCase + 'static) -> Self {
        self.service.get = Arc::new(uc);
        self
    }

    pub fn with_create_service(mut self, uc: impl ICreateServiceUseCase + 'static) -> Self {
        self.service.create = Arc::new(uc);
        self
    }

    pub fn with_update_service(mut self, uc: impl IUpdateServiceUseCase + 'static) -> Self {
        self.service.update = Arc::new(uc);
        self
    }

    pub fn with_toggle_service(mut self, uc: impl IToggleServiceUseCase + 'static) -> Self {
        self.service.toggle = Arc::new(uc);
        self
    }

    pub fn with_archive_service(mut self, uc: impl IArchiveServiceUseCase + 'static) -> Self {
        self.service.archive = Arc::new(uc);
        self
    }

    // Projects
    pub fn with_list_projects(mut self, uc: impl IListProjectsUseCase + 'static) -> Self {
        self.project.list = Arc::new(uc);
        self
    }

    pub fn with_list_public_projects(
        mut self,
        uc: impl IListPublicProjectsUseCase + 'static,
    ) -> Self {
        self.project.list_public = Arc::new(uc);
        self
    }

    pub fn with_project_categories(
        mut self,
        uc: impl IListProjectCategoriesUseCase + 'static,
    ) -> Self {
        self.project.categories = Arc::new(uc);
        self
    }

    pub fn with_get_project(mut self, uc: impl IGetProjectUseCase + 'static) -> Self {
        self.project.get = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl ICreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl IUpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_toggle_project(mut self, uc: impl IToggleProjectUseCase + 'static) -> Self {
        self.project.toggle = Arc::new(uc);
        self
    }

    pub fn with_archive_project(mut self, uc: impl IArchiveProjectUseCase + 'static) -> Self {
        self.project.archive = Arc::new(uc);
        self
    }

    pub fn with_upload_thumbnail(mut self, uc: impl IUploadThumbnailUseCase + 'static) -> Self {
        self.project.upload_thumbnail = Arc::new(uc);
        self
    }

    // Content
    pub fn with_list_content(mut self, uc: impl IListContentUseCase + 'static) -> Self {
        self.content.list = Arc::new(uc);
        self
    }

    pub fn with_get_content(mut self, uc: impl IGetContentUseCase + 'static) -> Self {
        self.content.get = Arc::new(uc);
        self
    }

    pub fn with_create_content(mut self, uc: impl ICreateContentUseCase + 'static) -> Self {
        self.content.create = Arc::new(uc);
        self
    }

    pub fn with_update_content(mut self, uc: impl IUpdateContentUseCase + 'static) -> Self {
        self.content.update = Arc::new(uc);
        self
    }

    pub fn with_delete_content(mut self, uc: impl IDeleteContentUseCase + 'static) -> Self {
        self.content.delete = Arc::new(uc);
        self
    }

    // Contact
    pub fn with_submit_contact(mut self, uc: impl ISubmitContactUseCase + 'static) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_messages(mut self, uc: impl IListMessagesUseCase + 'static) -> Self {
        self.contact.list = Arc::new(uc);
        self
    }

    pub fn with_get_message(mut self, uc: impl IGetMessageUseCase + 'static) -> Self {
        self.contact.get = Arc::new(uc);
        self
    }

    pub fn with_delete_message(mut self, uc: impl IDeleteMessageUseCase + 'static) -> Self {
        self.contact.delete = Arc::new(uc);
        self
    }

    // Public site
    pub fn with_get_portfolio(mut self, uc: impl IGetPortfolioUseCase + 'static) -> Self {
        self.portfolio.get = Arc::new(uc);
        self
    }

    pub fn with_service_detail(mut self, uc: impl IGetServiceDetailUseCase + 'static) -> Self {
        self.portfolio.service_detail = Arc::new(uc);
        self
    }

    // Admin
    pub fn with_dashboard(mut self, uc: impl IGetDashboardUseCase + 'static) -> Self {
        self.dashboard = Arc::new(uc);
        self
    }

    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            service: self.service,
            project: self.project,
            content: self.content,
            contact: self.contact,
            portfolio: self.portfolio,
            dashboard: self.dashboard,
            login_admin: self.login_admin,
        })
    }
}
