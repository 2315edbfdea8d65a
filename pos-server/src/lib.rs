//! SparkX POS Server - 零售门店管理后端
//!
//! # 架构概述
//!
//! - **HTTP API** (`api`): 按业务域划分的 RESTful 接口
//! - **认证** (`auth`): JWT + Argon2 认证体系与守卫链
//! - **数据库** (`db`): SQLite 连接池与仓储层
//! - **实时通道** (`realtime`): socket.io 侧信道
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置、状态、服务器生命周期
//! ├── auth/          # JWT 认证、守卫链
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! ├── realtime/      # socket.io 侧信道
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod realtime;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv, 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(None, log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____                  __   _  __
  / ___/____  ____ ______/ /__| |/ /
  \__ \/ __ \/ __ `/ ___/ //_/|   /
 ___/ / /_/ / /_/ / /  / ,<  /   |
/____/ .___/\__,_/_/  /_/|_|/_/|_|
    /_/            P O S
    "#
    );
}
