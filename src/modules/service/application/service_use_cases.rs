use std::sync::Arc;

use super::use_cases::{
    archive_service::IArchiveServiceUseCase, create_service::ICreateServiceUseCase,
    get_service::IGetServiceUseCase, list_public_services::IListPublicServicesUseCase,
    list_services::IListServicesUseCase, toggle_service::IToggleServiceUseCase,
    update_service::IUpdateServiceUseCase,
};

#[derive(Clone)]
pub struct ServiceUseCases {
    pub list: Arc<dyn IListServicesUseCase + Send + Sync>,
    pub list_public: Arc<dyn IListPublicServicesUseCase + Send + Sync>,
    pub get: Arc<dyn IGetServiceUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateServiceUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateServiceUseCase + Send + Sync>,
    pub toggle: Arc<dyn IToggleServiceUseCase + Send + Sync>,
    pub archive: Arc<dyn IArchiveServiceUseCase + Send + Sync>,
}
