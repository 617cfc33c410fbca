use std::net::SocketAddr;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/tarefa";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://tarefa.db";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Settings read from the environment (after `dotenv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `TAREFA_API_URL`: the resource the client talks to.
    pub api_url: String,
    /// `TAREFA_LISTEN_ADDR`: where the reference backend listens.
    pub listen_addr: String,
    /// `DATABASE_URL`
    pub database_url: String,
    /// `TAREFA_CORS_ORIGIN`: front-end origin allowed by the backend.
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            api_url: var("TAREFA_API_URL", DEFAULT_API_URL),
            listen_addr: var("TAREFA_LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            database_url: var("DATABASE_URL", DEFAULT_DATABASE_URL),
            cors_origin: var("TAREFA_CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.listen_addr.parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
