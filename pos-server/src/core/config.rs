use std::path::PathBuf;

use crate::core::{Result, ServerError};
use crate::store::StorePaths;

/// 服务器配置 - POS 节点的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 数据目录 (CSV 文件所在) |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | MENU_FILE | menu.csv | 菜单文件名 |
/// | TABLES_FILE | tables.csv | 桌台文件名 |
/// | ORDERS_FILE | orders.csv | 订单文件名 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，设置后按天滚动写文件 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/pos HTTP_PORT=8080 cargo run -p pos-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 数据目录，存放三张 CSV 表
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    pub menu_file: String,
    pub tables_file: String,
    pub orders_file: String,
    /// 日志级别 (RUST_LOG 优先)
    pub log_level: String,
    /// 日志目录 (可选)
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            menu_file: std::env::var("MENU_FILE").unwrap_or_else(|_| "menu.csv".into()),
            tables_file: std::env::var("TABLES_FILE").unwrap_or_else(|_| "tables.csv".into()),
            orders_file: std::env::var("ORDERS_FILE").unwrap_or_else(|_| "orders.csv".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
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

    pub fn menu_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.menu_file)
    }

    pub fn tables_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.tables_file)
    }

    pub fn orders_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.orders_file)
    }

    /// 三张表的文件位置
    pub fn store_paths(&self) -> StorePaths {
        StorePaths {
            menu: self.menu_path(),
            tables: self.tables_path(),
            orders: self.orders_path(),
        }
    }

    /// 校验配置: 数据目录非空, 三个文件名非空且互不相同
    pub fn validate(&self) -> Result<()> {
        if self.work_dir.trim().is_empty() {
            return Err(ServerError::Config("WORK_DIR must not be empty".into()));
        }
        let files = [&self.menu_file, &self.tables_file, &self.orders_file];
        if files.iter().any(|f| f.trim().is_empty()) {
            return Err(ServerError::Config("table file names must not be empty".into()));
        }
        if files[0] == files[1] || files[0] == files[2] || files[1] == files[2] {
            return Err(ServerError::Config(format!(
                "table files must be distinct: {}, {}, {}",
                files[0], files[1], files[2]
            )));
        }
        Ok(())
    }

    /// 确保数据目录存在
    pub fn ensure_work_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
