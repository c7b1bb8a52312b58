use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {0} value")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub run_migrations: bool,
    pub storage_root: String,
    pub storage_public_prefix: String,
    pub admin_email: String,
    pub admin_password_hash: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &'static str| read(key).ok_or(ConfigError::Missing(key));

        let port = match read("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 8080,
        };

        let run_migrations = match read("RUN_MIGRATIONS").as_deref() {
            None => true,
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") => false,
            Some(_) => return Err(ConfigError::Invalid("RUN_MIGRATIONS")),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: read("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            run_migrations,
            storage_root: read("STORAGE_ROOT").unwrap_or_else(|| "storage/app/public".to_string()),
            storage_public_prefix: read("STORAGE_PUBLIC_PREFIX")
                .unwrap_or_else(|| "/storage".to_string()),
            admin_email: required("ADMIN_EMAIL")?,
            admin_password_hash: required("ADMIN_PASSWORD_HASH")?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
