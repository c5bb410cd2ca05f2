//! Environment variable parsing helpers and stack configuration
//!
//! Every name, credential, and path the diagnostic tools touch lives in
//! `StackConfig`. Defaults match the deployment's canonical values, so an
//! empty environment targets the standard Inception stack.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Extension trait for parsing environment variables.
///
/// Provides convenient methods for reading env vars with defaults, required
/// values, and type parsing.
pub trait ConfigExt {
    /// Get an environment variable with a default value.
    ///
    /// # Example
    /// ```ignore
    /// let db = String::env_or("INCEPTION_DB_NAME", "wordpress");
    /// ```
    fn env_or(name: &str, default: &str) -> String {
        env::var(name).unwrap_or_else(|_| default.to_string())
    }

    /// Get a required environment variable, returning an error if not set.
    fn env_required(name: &str) -> Result<String> {
        env::var(name).context(format!("{} must be set", name))
    }

    /// Get an environment variable as a boolean.
    ///
    /// Returns `true` if the value is "true" (case-insensitive), otherwise `default`.
    fn env_bool(name: &str, default: bool) -> bool {
        env::var(name)
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(default)
    }

    /// Get an environment variable parsed as a specific type.
    ///
    /// Returns `default` if the variable is not set or fails to parse.
    fn env_parse<T: FromStr>(name: &str, default: T) -> T {
        env::var(name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

// Blanket implementation for all types
impl<T> ConfigExt for T {}

/// Names, credentials, and paths of the target deployment.
#[derive(Debug, Clone)]
pub struct StackConfig {
    pub nginx_container: String,
    pub wordpress_container: String,
    pub mariadb_container: String,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub admin_user: String,
    pub admin_password: String,
    pub domain: String,
    pub wp_path: String,
    pub ssl_cert: String,
    pub network: String,
    pub wordpress_data_dir: String,
    pub mariadb_data_dir: String,
    pub sql_file: String,
}

impl StackConfig {
    pub fn from_env() -> Self {
        Self {
            nginx_container: String::env_or("INCEPTION_NGINX_CONTAINER", "nginx"),
            wordpress_container: String::env_or("INCEPTION_WORDPRESS_CONTAINER", "wordpress"),
            mariadb_container: String::env_or("INCEPTION_MARIADB_CONTAINER", "mariadb"),
            db_name: String::env_or("INCEPTION_DB_NAME", "wordpress"),
            db_user: String::env_or("INCEPTION_DB_USER", "nkannan"),
            db_password: String::env_or("INCEPTION_DB_PASSWORD", "tsuchiura"),
            admin_user: String::env_or("INCEPTION_ADMIN_USER", "nkannan_admin"),
            admin_password: String::env_or("INCEPTION_ADMIN_PASSWORD", "akihabara"),
            domain: String::env_or("INCEPTION_DOMAIN", "nkannan.42.fr"),
            wp_path: String::env_or("INCEPTION_WP_PATH", "/var/www/wordpress"),
            ssl_cert: String::env_or("INCEPTION_SSL_CERT", "/etc/nginx/ssl/inception.crt"),
            network: String::env_or("INCEPTION_NETWORK", "inception"),
            wordpress_data_dir: String::env_or(
                "INCEPTION_WORDPRESS_DATA",
                "/Users/na-kannan/Documents/My-GitHub/42-Inception/data/wordpress",
            ),
            mariadb_data_dir: String::env_or(
                "INCEPTION_MARIADB_DATA",
                "/Users/na-kannan/Documents/My-GitHub/42-Inception/data/mariadb",
            ),
            sql_file: String::env_or("INCEPTION_SQL_FILE", "/tmp/setup.sql"),
        }
    }

    /// Public site URL.
    pub fn site_url(&self) -> String {
        format!("https://{}", self.domain)
    }

    /// WordPress admin panel URL.
    pub fn admin_url(&self) -> String {
        format!("https://{}/wp-admin", self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_standard_stack() {
        let config = StackConfig::from_env();
        assert_eq!(config.mariadb_container, "mariadb");
        assert_eq!(config.db_name, "wordpress");
        assert_eq!(config.db_user, "nkannan");
        assert_eq!(config.site_url(), "https://nkannan.42.fr");
        assert_eq!(config.admin_url(), "https://nkannan.42.fr/wp-admin");
    }

    #[test]
    fn env_or_prefers_the_environment() {
        env::set_var("INCEPTION_TEST_ONLY_VAR", "custom");
        assert_eq!(String::env_or("INCEPTION_TEST_ONLY_VAR", "default"), "custom");
        env::remove_var("INCEPTION_TEST_ONLY_VAR");
        assert_eq!(String::env_or("INCEPTION_TEST_ONLY_VAR", "default"), "default");
    }
}
