use std::sync::Arc;

use super::use_cases::{
    archive_project::IArchiveProjectUseCase, create_project::ICreateProjectUseCase,
    get_project::IGetProjectUseCase, list_project_categories::IListProjectCategoriesUseCase,
    list_projects::IListProjectsUseCase, list_public_projects::IListPublicProjectsUseCase,
    toggle_project::IToggleProjectUseCase, update_project::IUpdateProjectUseCase,
    upload_thumbnail::IUploadThumbnailUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn IListProjectsUseCase + Send + Sync>,
    pub list_public: Arc<dyn IListPublicProjectsUseCase + Send + Sync>,
    pub categories: Arc<dyn IListProjectCategoriesUseCase + Send + Sync>,
    pub get: Arc<dyn IGetProjectUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateProjectUseCase + Send + Sync>,
    pub toggle: Arc<dyn IToggleProjectUseCase + Send + Sync>,
    pub archive: Arc<dyn IArchiveProjectUseCase + Send + Sync>,
    pub upload_thumbnail: Arc<dyn IUploadThumbnailUseCase + Send + Sync>,
}
