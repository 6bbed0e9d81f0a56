//! Environment-driven server configuration.

use std::env;

/// Which note store implementation backs this deployment.
///
/// One strategy per deployment; the two are never layered at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Volatile map, lost on shutdown.
    Memory,
    /// Durable SQLite file.
    Sqlite,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Sqlite => "sqlite",
        }
    }

    fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Self::Memory,
            "sqlite" => Self::Sqlite,
            other => {
                log::warn!("unknown NOTEMARK_STORE value `{other}`, defaulting to sqlite");
                Self::Sqlite
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub store: StoreKind,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            database_path: env::var("NOTEMARK_DB")
                .unwrap_or_else(|_| "./.db/notemark.db".to_string()),
            store: env::var("NOTEMARK_STORE")
                .map(|value| StoreKind::from_env_value(&value))
                .unwrap_or(StoreKind::Sqlite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StoreKind;

    #[test]
    fn store_kind_parses_known_values_case_insensitively() {
        assert_eq!(StoreKind::from_env_value("MEMORY"), StoreKind::Memory);
        assert_eq!(StoreKind::from_env_value(" sqlite "), StoreKind::Sqlite);
    }

    #[test]
    fn unknown_store_kind_falls_back_to_sqlite() {
        assert_eq!(StoreKind::from_env_value("postgres"), StoreKind::Sqlite);
    }
}
