use std::sync::Arc;

use super::use_cases::{
    get_portfolio::IGetPortfolioUseCase, get_service_detail::IGetServiceDetailUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get: Arc<dyn IGetPortfolioUseCase + Send + Sync>,
    pub service_detail: Arc<dyn IGetServiceDetailUseCase + Send + Sync>,
}
