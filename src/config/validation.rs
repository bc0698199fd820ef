//! Configuration validation logic.

use crate::config::loader::{Config, DownloaderConfig, MAX_PAGE_SIZE};
use crate::config::query::QuerySpec;
use crate::error::{Error, Result};
use regex::Regex;

/// Minimum length for an Unsplash access key.
const MIN_ACCESS_KEY_LENGTH: usize = 8;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_access_key(&config.downloader.unsplash_app_access_key)?;
    validate_downloader(&config.downloader)?;
    validate_queries(&config.querys)?;

    Ok(())
}

/// Validate the access key.
pub fn validate_access_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::MissingConfig("unsplash_app_access_key".to_string()));
    }

    if key.len() < MIN_ACCESS_KEY_LENGTH {
        return Err(Error::ConfigValidation {
            field: "unsplash_app_access_key".to_string(),
            message: format!(
                "Access key must be at least {} characters (got {})",
                MIN_ACCESS_KEY_LENGTH,
                key.len()
            ),
        });
    }

    // Check for placeholder values
    let key_lower = key.to_lowercase();
    if key_lower.contains("replaceme") || key_lower.contains("your_access_key") {
        return Err(Error::ConfigValidation {
            field: "unsplash_app_access_key".to_string(),
            message: "Access key appears to be a placeholder. Please provide your Unsplash access key."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate paging, concurrency and directory settings.
pub fn validate_downloader(config: &DownloaderConfig) -> Result<()> {
    if config.max_per_page == 0 || config.max_per_page > MAX_PAGE_SIZE {
        return Err(Error::ConfigValidation {
            field: "max_per_page".to_string(),
            message: format!(
                "Page size must be between 1 and {} (got {})",
                MAX_PAGE_SIZE, config.max_per_page
            ),
        });
    }

    if config.workers == 0 {
        return Err(Error::ConfigValidation {
            field: "workers".to_string(),
            message: "At least one download worker is required".to_string(),
        });
    }

    if config.request_timeout_seconds == Some(0) {
        return Err(Error::ConfigValidation {
            field: "request_timeout_seconds".to_string(),
            message: "Timeout must be greater than zero; omit it to disable".to_string(),
        });
    }

    if config.wallpaper_directory.as_os_str().is_empty() {
        return Err(Error::MissingConfig("wallpaper_directory".to_string()));
    }

    if config.log_directory.as_os_str().is_empty() {
        return Err(Error::MissingConfig("log_directory".to_string()));
    }

    url::Url::parse(&config.api_base_url)?;

    Ok(())
}

/// Validate the configured queries.
pub fn validate_queries(queries: &[QuerySpec]) -> Result<()> {
    let collection_pattern = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();

    for (index, query) in queries.iter().enumerate() {
        let field = format!("querys[{}]", index);

        match query {
            QuerySpec::Search { query: text, .. } => {
                if text.trim().is_empty() {
                    return Err(Error::ConfigValidation {
                        field,
                        message: "Search query cannot be empty".to_string(),
                    });
                }
            }
            QuerySpec::Collection { collection_id, .. } => {
                if !collection_pattern.is_match(collection_id) {
                    return Err(Error::ConfigValidation {
                        field,
                        message: format!(
                            "Collection id '{}' contains invalid characters. Only alphanumeric, hyphens, and underscores allowed.",
                            collection_id
                        ),
                    });
                }
            }
        }

        if query.desired_total() == 0 {
            return Err(Error::ConfigValidation {
                field,
                message: "page_count must be at least 1".to_string(),
            });
        }
    }

    Ok(())
}
