use anyhow::Context;

/// Environment variable naming the HTTP listen port.
pub const ENV_PORT: &str = "PORT";
/// Environment variable holding the MongoDB connection string.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Environment variable naming the database to use.
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE_NAME: &str = "nonprofit";

/// Settings read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var(ENV_PORT) {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("{} must be a port number, got `{}`", ENV_PORT, raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url =
            std::env::var(ENV_DATABASE_URL).unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let database_name =
            std::env::var(ENV_DATABASE_NAME).unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());

        Ok(Self {
            port,
            database_url,
            database_name,
        })
    }
}

/// Reports whether an environment variable is set to a non-empty value.
///
/// Used by the diagnostic endpoint, which reports presence without ever
/// revealing the value itself.
pub fn env_is_set(name: &str) -> bool {
    std::env::var(name).map(|v| !v.is_empty()).unwrap_or(false)
}
