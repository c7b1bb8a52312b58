use std::sync::Arc;

use super::use_cases::{
    create_content::ICreateContentUseCase, delete_content::IDeleteContentUseCase,
    get_content::IGetContentUseCase, list_content::IListContentUseCase,
    update_content::IUpdateContentUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub list: Arc<dyn IListContentUseCase + Send + Sync>,
    pub get: Arc<dyn IGetContentUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateContentUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateContentUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteContentUseCase + Send + Sync>,
}
