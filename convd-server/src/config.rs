//! Environment-driven configuration
//!
//! The store connection is described by either `DATABASE_URL` or the
//! individual `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` / `DB_NAME`
//! variables. The listen port comes from `PORT`. No config files.

use std::net::SocketAddr;

use sqlx::postgres::PgConnectOptions;

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_LISTEN_PORT: u16 = 3000;

/// Database connection settings, resolved from the environment.
///
/// Credentials go through `PgConnectOptions`, never through URL string
/// formatting, so passwords with reserved characters survive intact.
#[derive(Debug, Clone)]
pub enum DbConfig {
    /// A full `DATABASE_URL` connection string.
    Url(String),
    /// Assembled from the individual `DB_*` variables.
    Parts {
        host: String,
        port: u16,
        user: Option<String>,
        password: Option<String>,
        database: Option<String>,
    },
}

impl DbConfig {
    /// Resolve from the environment. `DATABASE_URL` wins when set.
    pub fn from_env() -> Self {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            return Self::Url(url);
        }
        Self::Parts {
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env_port("DB_PORT", DEFAULT_DB_PORT),
            user: std::env::var("DB_USER").ok(),
            password: std::env::var("DB_PASSWORD").ok(),
            database: std::env::var("DB_NAME").ok(),
        }
    }

    /// Produce connect options for the pool.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match self {
            Self::Url(url) => url.parse(),
            Self::Parts {
                host,
                port,
                user,
                password,
                database,
            } => {
                let mut opts = PgConnectOptions::new().host(host).port(*port);
                if let Some(user) = user {
                    opts = opts.username(user);
                }
                if let Some(password) = password {
                    opts = opts.password(password);
                }
                if let Some(database) = database {
                    opts = opts.database(database);
                }
                Ok(opts)
            }
        }
    }
}

/// Listen address from `PORT` (default 3000), bound on all interfaces.
pub fn listen_addr_from_env() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], env_port("PORT", DEFAULT_LISTEN_PORT)))
}

fn env_port(var: &str, default: u16) -> u16 {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_build_connect_options() {
        let config = DbConfig::Parts {
            host: "db.internal".into(),
            port: 5433,
            user: Some("app".into()),
            password: Some("p@ss:word/".into()),
            database: Some("convd".into()),
        };
        let opts = config.connect_options().expect("options");
        assert_eq!(opts.get_host(), "db.internal");
        assert_eq!(opts.get_port(), 5433);
        assert_eq!(opts.get_username(), "app");
        assert_eq!(opts.get_database(), Some("convd"));
    }

    #[test]
    fn url_parses() {
        let config = DbConfig::Url("postgres://localhost/convd".into());
        let opts = config.connect_options().expect("options");
        assert_eq!(opts.get_database(), Some("convd"));
    }

    #[test]
    fn bad_url_is_an_error() {
        let config = DbConfig::Url("not a url".into());
        assert!(config.connect_options().is_err());
    }
}
