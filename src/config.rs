/*
 * Responsibility
 * - 環境変数の読み込み (PORT, AUTH_TYPE, KERBEROS_PRINCIPAL など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::services::auth::AuthMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // Raw AUTH_TYPE value; `auth_mode` is what the gate acts on.
    pub auth_type: String,
    pub auth_mode: AuthMode,
    pub http_path: String,

    pub kerberos_principal: Option<String>,
    pub basic_auth_users: Option<String>,

    pub max_body_bytes: usize,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 10001,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = get("APP_ENV")
            .map(|raw| AppEnv::parse(&raw))
            .unwrap_or(AppEnv::Development);

        let auth_type = get("AUTH_TYPE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "NONE".to_string());
        let auth_mode = auth_type
            .parse::<AuthMode>()
            .map_err(|_| ConfigError::Invalid("AUTH_TYPE"))?;

        let http_path = get("HTTP_PATH")
            .map(|s| s.trim().trim_matches('/').to_string())
            .unwrap_or_else(|| "cliservice".to_string());
        if http_path.is_empty() {
            return Err(ConfigError::Invalid("HTTP_PATH"));
        }

        let kerberos_principal = get("KERBEROS_PRINCIPAL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let basic_auth_users = get("BASIC_AUTH_USERS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let max_body_bytes = match get("HTTP_MAX_BODY_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("HTTP_MAX_BODY_BYTES"))?,
            None => 10 * 1024 * 1024,
        };

        let request_timeout = match get("HTTP_REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid("HTTP_REQUEST_TIMEOUT_SECONDS"))?,
            None => Duration::from_secs(30),
        };

        Ok(Self {
            addr,
            app_env,
            auth_type,
            auth_mode,
            http_path,
            kerberos_principal,
            basic_auth_users,
            max_body_bytes,
            request_timeout,
        })
    }
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
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_serve_basic_on_cliservice() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.addr.port(), 10001);
        assert_eq!(config.auth_type, "NONE");
        assert_eq!(config.auth_mode, AuthMode::Basic);
        assert_eq!(config.http_path, "cliservice");
        assert_eq!(config.kerberos_principal, None);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.app_env.is_production());
    }

    #[test]
    fn kerberos_settings_are_read() {
        let config = config_from(&[
            ("AUTH_TYPE", "kerberos"),
            ("KERBEROS_PRINCIPAL", "HTTP/gate.example.com@EXAMPLE.COM"),
            ("HTTP_PATH", "/rpc/"),
            ("APP_ENV", "prod"),
        ])
        .unwrap();

        assert_eq!(config.auth_type, "kerberos");
        assert_eq!(config.auth_mode, AuthMode::Kerberos);
        assert_eq!(config.http_path, "rpc");
        assert_eq!(
            config.kerberos_principal.as_deref(),
            Some("HTTP/gate.example.com@EXAMPLE.COM")
        );
        assert!(config.app_env.is_production());
    }

    #[test]
    fn invalid_values_fail_startup() {
        assert!(matches!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::Invalid("PORT"))
        ));
        assert!(matches!(
            config_from(&[("HTTP_PATH", "/")]),
            Err(ConfigError::Invalid("HTTP_PATH"))
        ));
        assert!(matches!(
            config_from(&[("HTTP_REQUEST_TIMEOUT_SECONDS", "0")]),
            Err(ConfigError::Invalid("HTTP_REQUEST_TIMEOUT_SECONDS"))
        ));
    }
}
