use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Which storage backend serves the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Json,
    Postgres,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Postgres => "postgres",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" | "file" => Ok(Self::Json),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend selection together with its connection details.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// JSON documents under `data_dir`.
    Json { data_dir: PathBuf },
    /// Postgres at `database_url`.
    Postgres { database_url: String },
}

impl StorageConfig {
    pub fn backend(&self) -> StorageBackend {
        match self {
            Self::Json { .. } => StorageBackend::Json,
            Self::Postgres { .. } => StorageBackend::Postgres,
        }
    }
}

/// Admin login settings. Present only when `ADMIN_PASSWORD_HASH` is set.
#[derive(Debug, Clone)]
pub struct AdminAuthConfig {
    /// Argon2id PHC hash of the admin password.
    pub password_hash: String,
    pub jwt: JwtConfig,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development except the
/// secrets, which are required only by the features that use them.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageConfig,
    /// `None` leaves admin operations open.
    pub admin: Option<AdminAuthConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `3000`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `STORAGE_BACKEND`      | `json`                   |
    /// | `DATA_DIR`             | `data`                   |
    /// | `DATABASE_URL`         | required for `postgres`  |
    /// | `ADMIN_PASSWORD_HASH`  | unset (auth disabled)    |
    /// | `JWT_SECRET`           | required with auth       |
    /// | `JWT_EXPIRY_MINS`      | `720`                    |
    ///
    /// # Panics
    ///
    /// Panics on unparseable values and on missing required secrets, so
    /// misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(&var("CORS_ORIGINS", "http://localhost:3000"));

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let backend: StorageBackend = var("STORAGE_BACKEND", "json")
            .parse()
            .unwrap_or_else(|e| panic!("STORAGE_BACKEND is invalid: {e}"));

        let storage = match backend {
            StorageBackend::Json => StorageConfig::Json {
                data_dir: PathBuf::from(var("DATA_DIR", "data")),
            },
            StorageBackend::Postgres => StorageConfig::Postgres {
                database_url: lookup("DATABASE_URL")
                    .expect("DATABASE_URL must be set when STORAGE_BACKEND=postgres"),
            },
        };

        let admin = lookup("ADMIN_PASSWORD_HASH")
            .filter(|hash| !hash.trim().is_empty())
            .map(|password_hash| AdminAuthConfig {
                password_hash,
                jwt: JwtConfig::from_lookup(&lookup),
            });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            admin,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_use_json_store_without_auth() {
        let config = config_from(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.storage.backend(), StorageBackend::Json);
        assert!(config.admin.is_none());
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let config = config_from(&[("CORS_ORIGINS", "https://a.example, ,https://b.example ")]);
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn postgres_backend_reads_database_url() {
        let config = config_from(&[
            ("STORAGE_BACKEND", "Postgres"),
            ("DATABASE_URL", "postgres://localhost/folio"),
        ]);
        match config.storage {
            StorageConfig::Postgres { database_url } => {
                assert_eq!(database_url, "postgres://localhost/folio")
            }
            other => panic!("expected postgres storage, got {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "DATABASE_URL")]
    fn postgres_backend_requires_database_url() {
        config_from(&[("STORAGE_BACKEND", "postgres")]);
    }

    #[test]
    fn password_hash_enables_admin_auth() {
        let config = config_from(&[
            ("ADMIN_PASSWORD_HASH", "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"),
            ("JWT_SECRET", "secret"),
            ("JWT_EXPIRY_MINS", "60"),
        ]);
        let admin = config.admin.expect("admin auth should be enabled");
        assert_eq!(admin.jwt.expiry_mins, 60);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!("sqlite".parse::<StorageBackend>().is_err());
        assert_eq!("pg".parse::<StorageBackend>(), Ok(StorageBackend::Postgres));
    }
}
