//! Server Configuration

use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Origins granted credentialed CORS access when `ALLOWED_ORIGINS` is not
/// set. Mirrors the deployed web clients.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3002",
    "http://localhost:3000",
    "http://127.0.0.1:5500",
    "http://sparkxpos.btamsbd.com",
    "https://sparkxpos.btamsbd.com",
    "http://beta.sparkx.com.bd",
    "https://beta.sparkx.com.bd",
];

/// JSON / url-encoded body ceiling (100 MB); bulk product imports ship
/// base64 images inline.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 100 * 1024 * 1024;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/sparkx/pos | 工作目录 |
/// | HTTP_PORT | 4000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | ALLOWED_ORIGINS | (deployed clients) | CORS 白名单, 逗号分隔 |
/// | BODY_LIMIT_BYTES | 104857600 | 请求体上限 |
/// | JWT_SECRET | (dev key) | JWT 密钥 |
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// CORS 白名单
    pub allowed_origins: Vec<String>,
    /// 请求体上限 (字节)
    pub body_limit_bytes: usize,
}

impl Config {
    /// 从环境变量加载配置，未设置时使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/sparkx/pos".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| {
                    DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect()
                }),
            body_limit_bytes: std::env::var("BODY_LIMIT_BYTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_BODY_LIMIT_BYTES),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 日志目录 (work_dir/logs)
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_work_dir_and_port() {
        let config = Config::with_overrides("/tmp/pos-test", 0);
        assert_eq!(config.work_dir, "/tmp/pos-test");
        assert_eq!(config.http_port, 0);
        assert!(config.database_dir().ends_with("database"));
    }

    #[test]
    fn default_origin_list_is_nonempty() {
        assert!(!DEFAULT_ALLOWED_ORIGINS.is_empty());
        for origin in DEFAULT_ALLOWED_ORIGINS {
            assert!(origin.starts_with("http://") || origin.starts_with("https://"));
        }
    }
}
