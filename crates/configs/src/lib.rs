use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
}

/// Bind settings of the log store service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_server_port(), worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: default_database_url(), sqlx_logging: false }
    }
}

/// Bind and upstream settings of the proxy (frontend) service.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_proxy_port")]
    pub port: u16,
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,
    #[serde(default = "default_index_path")]
    pub index_path: String,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_proxy_port(),
            upstream_url: default_upstream_url(),
            index_path: default_index_path(),
            worker_threads: Some(4),
        }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_server_port() -> u16 { 5001 }
fn default_proxy_port() -> u16 { 8001 }
fn default_database_url() -> String { "sqlite://logs.db?mode=rwc".into() }
fn default_upstream_url() -> String { "http://127.0.0.1:5001".into() }
fn default_index_path() -> String { "frontend/index.html".into() }

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load the config file if present (defaults otherwise), apply env overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            AppConfig::default()
        };
        cfg.apply_env();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn apply_env(&mut self) {
        self.server.apply_env();
        self.database.apply_env();
        self.proxy.apply_env();
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.validate()?;
        self.proxy.normalize()?;
        Ok(())
    }
}

fn env_port(key: &str) -> Option<u16> {
    std::env::var(key).ok().and_then(|p| p.parse::<u16>().ok())
}

fn env_threads() -> Option<usize> {
    std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok())
}

impl ServerConfig {
    fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") { self.host = host; }
        if let Some(port) = env_port("SERVER_PORT") { self.port = port; }
        if let Some(w) = env_threads() { self.worker_threads = Some(w); }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        self.worker_threads = normalize_threads(self.worker_threads);
        Ok(())
    }

    pub fn bind_addr(&self) -> String { format!("{}:{}", self.host, self.port) }
}

impl DatabaseConfig {
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.trim().is_empty() { self.url = url; }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        if !self.url.to_lowercase().starts_with("sqlite:") {
            return Err(anyhow!("database.url must start with sqlite:"));
        }
        Ok(())
    }

    /// File backing the database, or `None` for an in-memory database.
    pub fn sqlite_path(&self) -> Option<&str> {
        let rest = self.url.strip_prefix("sqlite://").or_else(|| self.url.strip_prefix("sqlite:"))?;
        let path = rest.split('?').next().unwrap_or_default();
        if path.is_empty() || path == ":memory:" {
            return None;
        }
        Some(path)
    }
}

impl ProxyConfig {
    fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("PROXY_HOST") { self.host = host; }
        if let Some(port) = env_port("PROXY_PORT") { self.port = port; }
        if let Ok(url) = std::env::var("UPSTREAM_URL") { self.upstream_url = url; }
        if let Some(w) = env_threads() { self.worker_threads = Some(w); }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("proxy.port must be in 1..=65535"));
        }
        let url = self.upstream_url.trim().trim_end_matches('/').to_string();
        let lower = url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("proxy.upstream_url must start with http:// or https://"));
        }
        self.upstream_url = url;
        self.worker_threads = normalize_threads(self.worker_threads);
        Ok(())
    }

    pub fn bind_addr(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn normalize_threads(w: Option<usize>) -> Option<usize> {
    match w {
        Some(0) | None => Some(4),
        other => other,
    }
}
