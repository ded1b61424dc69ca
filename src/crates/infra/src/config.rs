use config::{Config, ConfigError, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    /// 服务器配置
    server: RawServerConfig,
    /// 数据库配置
    database: RawDatabaseConfig,
}

/// 服务器配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawServerConfig {
    /// 监听地址
    host: String,
    /// 监听端口
    port: u16,
}

impl Default for RawServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// 数据库配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawDatabaseConfig {
    /// 完整连接串，非空时忽略下面的字段
    url: String,
    host: String,
    port: u16,
    user: String,
    password: String,
    name: String,
    max_connections: u32,
    min_connections: u32,
    connect_timeout_secs: u64,
    acquire_timeout_secs: u64,
}

impl Default for RawDatabaseConfig {
    fn default() -> Self {
        Self {
            url: "".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "".to_string(),
            name: "jukebox".to_string(),
            max_connections: 16,
            min_connections: 1,
            connect_timeout_secs: 3,
            acquire_timeout_secs: 8,
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Postgres connection URL. An explicit `url` wins; otherwise it is
    /// assembled from the individual fields. Credentials containing URL
    /// reserved characters have to be given through `url`, already escaped.
    pub fn url(&self) -> String {
        if !self.url.is_empty() {
            return self.url.clone();
        }
        let credentials = if self.password.is_empty() {
            self.user.clone()
        } else {
            format!("{}:{}", self.user, self.password)
        };
        format!(
            "postgres://{}@{}:{}/{}",
            credentials, self.host, self.port, self.name
        )
    }

    /// `host:port/name`, safe to log.
    pub fn target(&self) -> String {
        if !self.url.is_empty() {
            return match self.url.rsplit_once('@') {
                Some((_, target)) => target.to_string(),
                None => self.url.clone(),
            };
        }
        format!("{}:{}/{}", self.host, self.port, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfigImpl {
    server: ServerConfig,
    database: DatabaseConfig,
}

impl AppConfigImpl {
    fn new(data: RawConfig) -> Self {
        let server = ServerConfig {
            host: data.server.host,
            port: data.server.port,
        };
        let database = DatabaseConfig {
            url: data.database.url,
            host: data.database.host,
            port: data.database.port,
            user: data.database.user,
            password: data.database.password,
            name: data.database.name,
            max_connections: data.database.max_connections,
            min_connections: data.database.min_connections,
            connect_timeout_secs: data.database.connect_timeout_secs,
            acquire_timeout_secs: data.database.acquire_timeout_secs,
        };
        AppConfigImpl { server, database }
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone()
    }

    pub fn database(&self) -> DatabaseConfig {
        self.database.clone()
    }

    /// Reads `config.toml` (optional) and `APP_*` environment variables,
    /// e.g. `APP_DATABASE__HOST`. A `.env` file is loaded first if present.
    pub fn load() -> Result<AppConfigImpl, ConfigError> {
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<AppConfigImpl, ConfigError> {
        let raw: RawConfig = config.try_deserialize()?; // serde 自动填充默认值
        Ok(AppConfigImpl::new(raw))
    }
}
