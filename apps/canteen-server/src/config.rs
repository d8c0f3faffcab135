use std::path::Path;

use anyhow::{Context, Result, bail};
use axum::http::HeaderValue;
use canteen_auth::JwtConfig;
use canteen_db::DbConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use staff::StaffConfig;

const MIN_PASSWORD_LENGTH: usize = 6;

/// Effective server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DbConfig,
    pub logging: LoggingConfig,
    pub auth: JwtConfig,
    pub staff: StaffConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Empty list disables CORS; `*` allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_owned(),
            port: 8080,
            cors_allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, e.g. `info` or `staff=debug,info`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Layered load: defaults, then the YAML file (if any), then `APP__*`
    /// environment variables (`APP__SERVER__PORT=9000`).
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed("APP__").split("__"))
    }

    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8, mock: bool) {
        if let Some(port) = port {
            self.server.port = port;
        }
        match verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
        if mock {
            self.database = DbConfig {
                max_connections: self.database.max_connections,
                connect_timeout_secs: self.database.connect_timeout_secs,
                sqlx_logging: self.database.sqlx_logging,
                ..DbConfig::in_memory()
            };
        }
    }

    /// Checks serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.auth.secret.is_empty() {
            bail!("auth.secret must not be empty");
        }
        if self.auth.token_ttl_secs <= 0 {
            bail!("auth.token_ttl_secs must be positive");
        }
        if self.staff.password_length < MIN_PASSWORD_LENGTH {
            bail!("staff.password_length must be at least {MIN_PASSWORD_LENGTH}");
        }
        if self.database.max_connections == 0 {
            bail!("database.max_connections must be positive");
        }
        if let Some(origin) = self
            .server
            .cors_allowed_origins
            .iter()
            .find(|o| HeaderValue::from_str(o).is_err())
        {
            bail!("server.cors_allowed_origins contains an invalid origin: {origin:?}");
        }
        Ok(())
    }

    /// Pretty JSON rendering with the JWT secret and DSN credentials masked.
    pub fn to_redacted_json(&self) -> Result<String> {
        let mut value = serde_json::to_value(self).context("failed to serialize configuration")?;
        value["auth"]["secret"] = serde_json::Value::from("***");
        let dsn = canteen_db::redact_credentials_in_dsn(Some(&self.database.dsn));
        value["database"]["dsn"] = serde_json::Value::from(dsn);
        serde_json::to_string_pretty(&value).context("failed to render configuration")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let cfg = AppConfig::load_or_default(None).unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert_eq!(cfg.staff.email_domain, "canteen.com");
    }

    #[test]
    fn yaml_overrides_defaults() {
        let file = write_yaml(
            "server:\n  port: 9001\nlogging:\n  format: json\nstaff:\n  email_domain: food.test\n",
        );
        let cfg = AppConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(cfg.server.port, 9001);
        assert_eq!(cfg.server.bind_addr, "127.0.0.1");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.staff.email_domain, "food.test");
        assert_eq!(cfg.staff.password_length, 8);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_yaml("server:\n  prot: 9001\n");
        assert!(AppConfig::load_or_default(Some(file.path())).is_err());
    }

    #[test]
    fn cli_overrides_win() {
        let mut cfg = AppConfig::default();
        cfg.database.max_connections = 3;
        cfg.apply_cli_overrides(Some(7000), 2, true);
        assert_eq!(cfg.server.port, 7000);
        assert_eq!(cfg.logging.level, "debug");
        assert!(canteen_db::is_memory_dsn(&cfg.database.dsn));
        assert_eq!(cfg.database.max_connections, 3);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(AppConfig::default().validate().is_ok());

        let mut cfg = AppConfig::default();
        cfg.auth.secret = String::new();
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.staff.password_length = 2;
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.server.cors_allowed_origins = vec!["bad\norigin".to_owned()];
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn redacted_dump_hides_secrets() {
        let mut cfg = AppConfig::default();
        cfg.auth.secret = "super-secret".to_owned();
        cfg.database.dsn = "postgres://canteen:hunter2@db/canteen".to_owned();
        let dump = cfg.to_redacted_json().unwrap();
        assert!(!dump.contains("super-secret"));
        assert!(!dump.contains("hunter2"));
        assert!(dump.contains("\"port\": 8080"));
    }
}
