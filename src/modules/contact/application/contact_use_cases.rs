use std::sync::Arc;

use super::use_cases::{
    delete_message::IDeleteMessageUseCase, get_message::IGetMessageUseCase,
    list_messages::IListMessagesUseCase, submit_contact::ISubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn ISubmitContactUseCase + Send + Sync>,
    pub list: Arc<dyn IListMessagesUseCase + Send + Sync>,
    pub get: Arc<dyn IGetMessageUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteMessageUseCase + Send + Sync>,
}
