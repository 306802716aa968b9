use std::{str::FromStr, time::Duration};

use url::Url;

use crate::server::{error::config::ConfigError, pool::PoolConfig};

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_NAME: &str = "pawpoint";
const DEFAULT_SSLMODE: &str = "prefer";
const DEFAULT_STATEMENT_TIMEOUT_MS: u64 = 15_000;
const DEFAULT_JWT_TTL_MINUTES: i64 = 15;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

const SSLMODES: [&str; 6] = [
    "disable",
    "allow",
    "prefer",
    "require",
    "verify-ca",
    "verify-full",
];

pub struct Config {
    /// Connection URL handed to every pooled connection, including `sslmode` and the
    /// statement timeout for Postgres.
    pub database_url: String,
    pub pool: PoolConfig,
    pub statement_timeout_ms: u64,

    pub jwt_secret: String,
    pub jwt_ttl: chrono::Duration,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// `DATABASE_URL` wins over the `DB_*` parts when both are set. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let statement_timeout_ms = parse_or(&var, "DB_STATEMENT_TIMEOUT_MS", DEFAULT_STATEMENT_TIMEOUT_MS)?;

        let database_url = match var("DATABASE_URL") {
            Some(url) => with_statement_timeout(&url, statement_timeout_ms)?,
            None => postgres_url(&var, statement_timeout_ms)?,
        };

        let pool = PoolConfig {
            min_size: parse_or(&var, "DB_POOL_MIN_SIZE", 1)?,
            max_size: parse_or(&var, "DB_POOL_MAX_SIZE", 10)?,
            connect_timeout: Duration::from_secs(parse_or(&var, "DB_CONNECT_TIMEOUT_SECS", 10)?),
            acquire_timeout: Duration::from_secs(parse_or(&var, "DB_ACQUIRE_TIMEOUT_SECS", 30)?),
            test_on_checkout: parse_or(&var, "DB_TEST_ON_CHECKOUT", false)?,
        };

        if pool.max_size == 0 {
            return Err(invalid("DB_POOL_MAX_SIZE", "0", "must be at least 1"));
        }
        if pool.min_size > pool.max_size {
            return Err(invalid(
                "DB_POOL_MIN_SIZE",
                &pool.min_size.to_string(),
                "must not exceed DB_POOL_MAX_SIZE",
            ));
        }

        let jwt_secret =
            var("JWT_SECRET_KEY").ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET_KEY".to_string()))?;

        let ttl_minutes: i64 = parse_or(&var, "JWT_TTL_MINUTES", DEFAULT_JWT_TTL_MINUTES)?;
        if ttl_minutes <= 0 {
            return Err(invalid(
                "JWT_TTL_MINUTES",
                &ttl_minutes.to_string(),
                "must be positive",
            ));
        }

        Ok(Self {
            database_url,
            pool,
            statement_timeout_ms,
            jwt_secret,
            jwt_ttl: chrono::Duration::minutes(ttl_minutes),
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn invalid(name: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_or<T, F>(var: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(name, &raw, &e.to_string())),
    }
}

/// Assembles a Postgres URL from the `DB_*` variables.
fn postgres_url<F>(var: &F, statement_timeout_ms: u64) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let host = var("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
    let port: u16 = parse_or(var, "DB_PORT", DEFAULT_DB_PORT)?;
    let user = var("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string());
    let name = var("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
    let sslmode = var("DB_SSLMODE").unwrap_or_else(|| DEFAULT_SSLMODE.to_string());

    if !SSLMODES.contains(&sslmode.as_str()) {
        return Err(invalid(
            "DB_SSLMODE",
            &sslmode,
            &format!("must be one of {}", SSLMODES.join(", ")),
        ));
    }

    let mut url = Url::parse("postgres://localhost")
        .map_err(|e| invalid("DB_HOST", &host, &e.to_string()))?;

    url.set_host(Some(&host))
        .map_err(|e| invalid("DB_HOST", &host, &e.to_string()))?;
    url.set_port(Some(port))
        .map_err(|_| invalid("DB_PORT", &port.to_string(), "rejected by URL"))?;
    url.set_username(&user)
        .map_err(|_| invalid("DB_USER", &user, "rejected by URL"))?;
    if let Some(password) = var("DB_PASSWORD") {
        url.set_password(Some(&password))
            .map_err(|_| invalid("DB_PASSWORD", "***", "rejected by URL"))?;
    }
    url.set_path(&format!("/{}", name));
    url.query_pairs_mut()
        .append_pair("sslmode", &sslmode)
        .append_pair("options", &statement_timeout_option(statement_timeout_ms));

    Ok(url.into())
}

/// Adds the statement timeout to a Postgres `DATABASE_URL` that does not set `options`
/// itself. Other schemes pass through unchanged.
fn with_statement_timeout(raw: &str, statement_timeout_ms: u64) -> Result<String, ConfigError> {
    let mut url = Url::parse(raw).map_err(|e| invalid("DATABASE_URL", raw, &e.to_string()))?;

    let is_postgres = matches!(url.scheme(), "postgres" | "postgresql");
    let has_options = url.query_pairs().any(|(key, _)| key == "options");

    if is_postgres && !has_options {
        url.query_pairs_mut()
            .append_pair("options", &statement_timeout_option(statement_timeout_ms));
        return Ok(url.into());
    }

    Ok(raw.to_string())
}

fn statement_timeout_option(statement_timeout_ms: u64) -> String {
    format!("-c statement_timeout={}", statement_timeout_ms)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn requires_jwt_secret() {
        let result = config_from(&[]);

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(name)) if name == "JWT_SECRET_KEY"));
    }

    #[test]
    fn applies_defaults() {
        let config = config_from(&[("JWT_SECRET_KEY", "secret")]).unwrap();

        assert_eq!(config.pool.min_size, 1);
        assert_eq!(config.pool.max_size, 10);
        assert_eq!(config.pool.acquire_timeout, Duration::from_secs(30));
        assert_eq!(config.statement_timeout_ms, 15_000);
        assert_eq!(config.jwt_ttl, chrono::Duration::minutes(15));
        assert_eq!(config.bind_address, "0.0.0.0:5000");

        let url = Url::parse(&config.database_url).unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(5432));
        assert_eq!(url.path(), "/pawpoint");
        let query: HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(query.get("sslmode").map(String::as_str), Some("prefer"));
        assert_eq!(
            query.get("options").map(String::as_str),
            Some("-c statement_timeout=15000")
        );
    }

    #[test]
    fn statement_timeout_reaches_field_and_url() {
        let config = config_from(&[
            ("JWT_SECRET_KEY", "secret"),
            ("DB_STATEMENT_TIMEOUT_MS", "2500"),
        ])
        .unwrap();

        assert_eq!(config.statement_timeout_ms, 2500);
        let url = Url::parse(&config.database_url).unwrap();
        let query: HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(
            query.get("options").map(String::as_str),
            Some("-c statement_timeout=2500")
        );
    }

    #[test]
    fn database_url_overrides_parts() {
        let config = config_from(&[
            ("JWT_SECRET_KEY", "secret"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_HOST", "ignored"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn keeps_existing_postgres_options() {
        let raw = "postgres://u:p@db/app?options=-c%20search_path%3Dclinic";
        let config = config_from(&[("JWT_SECRET_KEY", "secret"), ("DATABASE_URL", raw)]).unwrap();

        assert_eq!(config.database_url, raw);
    }

    #[test]
    fn rejects_min_above_max() {
        let result = config_from(&[
            ("JWT_SECRET_KEY", "secret"),
            ("DB_POOL_MIN_SIZE", "5"),
            ("DB_POOL_MAX_SIZE", "2"),
        ]);

        assert!(matches!(result, Err(ConfigError::InvalidValue { name, .. }) if name == "DB_POOL_MIN_SIZE"));
    }

    #[test]
    fn rejects_unknown_sslmode() {
        let result = config_from(&[("JWT_SECRET_KEY", "secret"), ("DB_SSLMODE", "sometimes")]);

        assert!(matches!(result, Err(ConfigError::InvalidValue { name, .. }) if name == "DB_SSLMODE"));
    }

    #[test]
    fn rejects_unparsable_number() {
        let result = config_from(&[("JWT_SECRET_KEY", "secret"), ("DB_POOL_MAX_SIZE", "many")]);

        assert!(matches!(result, Err(ConfigError::InvalidValue { name, .. }) if name == "DB_POOL_MAX_SIZE"));
    }
}
