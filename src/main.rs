pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::config::AppConfig;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::modules::auth::application::use_cases::login_admin::{
    AdminCredentials, ILoginAdminUseCase, LoginAdminUseCase,
};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::use_cases::{
    delete_message::DeleteMessageUseCase, get_message::GetMessageUseCase,
    list_messages::ListMessagesUseCase, submit_contact::SubmitContactUseCase,
};
use crate::modules::content::adapter::outgoing::{ContentQueryPostgres, ContentRepositoryPostgres};
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::use_cases::{
    create_content::CreateContentUseCase, delete_content::DeleteContentUseCase,
    get_content::GetContentUseCase, list_content::ListContentUseCase,
    update_content::UpdateContentUseCase,
};
use crate::modules::dashboard::application::use_cases::get_dashboard::{
    GetDashboardUseCase, IGetDashboardUseCase,
};
use crate::modules::media::adapter::outgoing::LocalFileStorage;
use crate::modules::media::application::domain::UploadPolicy;
use crate::modules::media::application::ports::outgoing::FileStorage;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::use_cases::{
    get_portfolio::GetPortfolioUseCase, get_service_detail::GetServiceDetailUseCase,
};
use crate::modules::project::adapter::outgoing::{
    ProjectArchiverPostgres, ProjectQueryPostgres, ProjectRepositoryPostgres,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::use_cases::{
    archive_project::ArchiveProjectUseCase, create_project::CreateProjectUseCase,
    get_project::GetProjectUseCase, list_project_categories::ListProjectCategoriesUseCase,
    list_projects::ListProjectsUseCase, list_public_projects::ListPublicProjectsUseCase,
    toggle_project::ToggleProjectUseCase, update_project::UpdateProjectUseCase,
    upload_thumbnail::UploadThumbnailUseCase,
};
use crate::modules::service::adapter::outgoing::{
    ServiceArchiverPostgres, ServiceQueryPostgres, ServiceRepositoryPostgres,
};
use crate::modules::service::application::service_use_cases::ServiceUseCases;
use crate::modules::service::application::use_cases::{
    archive_service::ArchiveServiceUseCase, create_service::CreateServiceUseCase,
    get_service::GetServiceUseCase, list_public_services::ListPublicServicesUseCase,
    list_services::ListServicesUseCase, toggle_service::ToggleServiceUseCase,
    update_service::UpdateServiceUseCase,
};
use crate::modules::skill::adapter::outgoing::SkillQueryPostgres;
use crate::modules::statistic::adapter::outgoing::StatisticQueryPostgres;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub service: ServiceUseCases,
    pub project: ProjectUseCases,
    pub content: ContentUseCases,
    pub contact: ContactUseCases,
    pub portfolio: PortfolioUseCases,
    pub dashboard: Arc<dyn IGetDashboardUseCase + Send + Sync>,
    pub login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
}

fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

/// `hash-password <password>` prints an argon2 hash for `ADMIN_PASSWORD_HASH`.
#[cfg(not(tarpaulin_include))]
async fn hash_password(password: &str) -> anyhow::Result<()> {
    let hasher = Argon2Hasher::from_env().context("invalid argon2 parameters")?;
    let hash = hasher
        .hash_password(password)
        .await
        .context("failed to hash password")?;

    println!("{hash}");
    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    load_env_files();

    let args: Vec<String> = std::env::args().collect();
    if args.get(1).map(String::as_str) == Some("hash-password") {
        let password = args
            .get(2)
            .context("usage: portfolio_site hash-password <password>")?;
        return hash_password(password).await;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let hasher = Argon2Hasher::from_env().context("invalid argon2 parameters")?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let service_query = ServiceQueryPostgres::new(Arc::clone(&db_arc));
    let service_repo = ServiceRepositoryPostgres::new(Arc::clone(&db_arc));
    let service_archiver = ServiceArchiverPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_archiver = ProjectArchiverPostgres::new(Arc::clone(&db_arc));
    let content_query = ContentQueryPostgres::new(Arc::clone(&db_arc));
    let content_repo = ContentRepositoryPostgres::new(Arc::clone(&db_arc));
    let skill_query = SkillQueryPostgres::new(Arc::clone(&db_arc));
    let statistic_query = StatisticQueryPostgres::new(Arc::clone(&db_arc));

    let storage: Arc<dyn FileStorage> = Arc::new(LocalFileStorage::new(
        config.storage_root.clone(),
        config.storage_public_prefix.clone(),
    ));

    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let hasher_arc: Arc<dyn PasswordHasher> = Arc::new(hasher);

    let service = ServiceUseCases {
        list: Arc::new(ListServicesUseCase::new(service_query.clone())),
        list_public: Arc::new(ListPublicServicesUseCase::new(service_query.clone())),
        get: Arc::new(GetServiceUseCase::new(service_query.clone())),
        create: Arc::new(CreateServiceUseCase::new(service_repo.clone())),
        update: Arc::new(UpdateServiceUseCase::new(
            service_query.clone(),
            service_repo.clone(),
        )),
        toggle: Arc::new(ToggleServiceUseCase::new(service_repo)),
        archive: Arc::new(ArchiveServiceUseCase::new(service_archiver)),
    };

    let project = ProjectUseCases {
        list: Arc::new(ListProjectsUseCase::new(project_query.clone())),
        list_public: Arc::new(ListPublicProjectsUseCase::new(project_query.clone())),
        categories: Arc::new(ListProjectCategoriesUseCase::new(project_query.clone())),
        get: Arc::new(GetProjectUseCase::new(project_query.clone())),
        create: Arc::new(CreateProjectUseCase::new(
            project_repo.clone(),
            service_query.clone(),
            skill_query.clone(),
        )),
        update: Arc::new(UpdateProjectUseCase::new(
            project_query.clone(),
            project_repo.clone(),
            service_query.clone(),
            skill_query.clone(),
        )),
        toggle: Arc::new(ToggleProjectUseCase::new(project_repo.clone())),
        archive: Arc::new(ArchiveProjectUseCase::new(project_archiver)),
        upload_thumbnail: Arc::new(UploadThumbnailUseCase::new(
            project_query.clone(),
            project_repo,
            Arc::clone(&storage),
        )),
    };

    let content = ContentUseCases {
        list: Arc::new(ListContentUseCase::new(content_query.clone())),
        get: Arc::new(GetContentUseCase::new(content_query.clone())),
        create: Arc::new(CreateContentUseCase::new(content_repo.clone())),
        update: Arc::new(UpdateContentUseCase::new(
            content_query.clone(),
            content_repo.clone(),
        )),
        delete: Arc::new(DeleteContentUseCase::new(content_repo.clone())),
    };

    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactUseCase::new(content_repo.clone())),
        list: Arc::new(ListMessagesUseCase::new(content_query.clone())),
        get: Arc::new(GetMessageUseCase::new(content_query.clone())),
        delete: Arc::new(DeleteMessageUseCase::new(content_repo)),
    };

    let portfolio = PortfolioUseCases {
        get: Arc::new(GetPortfolioUseCase::new(
            Arc::new(service_query.clone()),
            Arc::new(project_query.clone()),
            Arc::new(skill_query.clone()),
            Arc::new(statistic_query),
            Arc::new(content_query.clone()),
        )),
        service_detail: Arc::new(GetServiceDetailUseCase::new(
            Arc::new(service_query.clone()),
            Arc::new(project_query.clone()),
            Arc::new(skill_query.clone()),
        )),
    };

    let dashboard = GetDashboardUseCase::new(
        Arc::new(service_query),
        Arc::new(project_query),
        Arc::new(skill_query),
        Arc::new(content_query),
    );

    let login_admin = LoginAdminUseCase::new(
        AdminCredentials::new(&config.admin_email, &config.admin_password_hash),
        hasher_arc,
        Arc::clone(&token_provider_arc),
    );

    let state = AppState {
        service,
        project,
        content,
        contact,
        portfolio,
        dashboard: Arc::new(dashboard),
        login_admin: Arc::new(login_admin),
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&storage)))
            .app_data(web::PayloadConfig::new(UploadPolicy::REQUEST_LIMIT_BYTES))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{auth, contact, content, dashboard, media, portfolio, project, service};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json_handler);

    // Public pages
    cfg.service(portfolio::adapter::incoming::web::routes::home_page_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::about_page_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::skills_page_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::projects_page_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::contact_page_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::service_detail_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::switch_language_handler);
    cfg.service(contact::adapter::incoming::web::routes::submit_contact_handler);

    // Public API
    cfg.service(service::adapter::incoming::web::routes::list_public_services_handler);
    cfg.service(project::adapter::incoming::web::routes::list_featured_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::list_projects_by_category_handler);
    cfg.service(project::adapter::incoming::web::routes::list_public_projects_handler);

    // Media
    cfg.service(media::adapter::incoming::web::routes::serve_file_handler);

    // Admin
    cfg.service(auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(dashboard::adapter::incoming::web::routes::get_dashboard_handler);

    cfg.service(service::adapter::incoming::web::routes::list_services_handler);
    cfg.service(service::adapter::incoming::web::routes::create_service_handler);
    cfg.service(service::adapter::incoming::web::routes::get_service_handler);
    cfg.service(service::adapter::incoming::web::routes::update_service_handler);
    cfg.service(service::adapter::incoming::web::routes::toggle_service_handler);
    cfg.service(service::adapter::incoming::web::routes::delete_service_handler);
    cfg.service(service::adapter::incoming::web::routes::restore_service_handler);
    cfg.service(service::adapter::incoming::web::routes::force_delete_service_handler);

    // `categories` must win over `{id}`
    cfg.service(project::adapter::incoming::web::routes::list_project_categories_handler);
    cfg.service(project::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(project::adapter::incoming::web::routes::get_project_handler);
    cfg.service(project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(project::adapter::incoming::web::routes::toggle_project_handler);
    cfg.service(project::adapter::incoming::web::routes::toggle_featured_handler);
    cfg.service(project::adapter::incoming::web::routes::upload_thumbnail_handler);
    cfg.service(project::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(project::adapter::incoming::web::routes::restore_project_handler);
    cfg.service(project::adapter::incoming::web::routes::force_delete_project_handler);

    cfg.service(content::adapter::incoming::web::routes::list_content_types_handler);
    cfg.service(content::adapter::incoming::web::routes::list_content_handler);
    cfg.service(content::adapter::incoming::web::routes::create_content_handler);
    cfg.service(content::adapter::incoming::web::routes::get_content_handler);
    cfg.service(content::adapter::incoming::web::routes::update_content_handler);
    cfg.service(content::adapter::incoming::web::routes::delete_content_handler);

    cfg.service(contact::adapter::incoming::web::routes::list_messages_handler);
    cfg.service(contact::adapter::incoming::web::routes::get_message_handler);
    cfg.service(contact::adapter::incoming::web::routes::delete_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
