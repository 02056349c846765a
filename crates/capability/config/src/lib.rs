//! 应用运行配置加载。

use std::env;
use std::path::PathBuf;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub jwt_secret: String,
    /// 内存引擎的 JSON 样例数据文件，未配置时引擎为空数据集。
    pub fixture_path: Option<PathBuf>,
    /// 单次引擎调用超时（毫秒），None 表示不限制。
    pub engine_timeout_ms: Option<u64>,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("REPORTS_JWT_SECRET")
            .map_err(|_| ConfigError::Missing("REPORTS_JWT_SECRET".to_string()))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid(
                "REPORTS_JWT_SECRET".to_string(),
                "empty".to_string(),
            ));
        }
        let http_addr =
            env::var("REPORTS_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let fixture_path = read_optional("REPORTS_FIXTURE_PATH").map(PathBuf::from);
        let engine_timeout_ms = Some(read_u64_with_default("REPORTS_ENGINE_TIMEOUT_MS", 30_000)?)
            .filter(|value| *value > 0);

        Ok(Self {
            http_addr,
            jwt_secret,
            fixture_path,
            engine_timeout_ms,
        })
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
