use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_BOOK_SEARCH_URL: &str = "https://www.googleapis.com/books/v1/volumes";

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub book_search_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `DATABASE_URL` is required. `PORT` and `BOOK_SEARCH_URL` fall back to defaults
    /// when unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Complete configuration
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let book_search_url =
            lookup("BOOK_SEARCH_URL").unwrap_or_else(|| DEFAULT_BOOK_SEARCH_URL.to_string());

        Ok(Self {
            database_url,
            port,
            book_search_url,
        })
    }
}
