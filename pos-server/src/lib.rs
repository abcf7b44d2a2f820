//! Restaurant POS Server - 餐厅收银管理
//!
//! # 架构概述
//!
//! - **数据存储** (`store`): 菜单、桌台、订单三张 CSV 表，启动时整体加载，每次修改整体重写
//! - **菜单与桌台** (`catalog`): 增删改、桌台占用切换
//! - **订单** (`orders`): 下单、状态流转、历史筛选
//! - **报表** (`reporting`): 仪表盘统计
//! - **HTTP API** (`api`): JSON 接口与 CSV 导出
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── store/         # CSV 持久化
//! ├── catalog/       # 菜单、桌台
//! ├── orders/        # 订单
//! ├── reporting/     # 报表
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、校验、日志
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod orders;
pub mod reporting;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use store::{PosStore, StorePaths, StoreTable};
pub use utils::{AppError, AppResult, PosError, PosResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env、读取配置、初始化日志
///
/// 生产环境输出 JSON 日志。返回的 [`Config`] 供后续启动使用。
pub fn setup_environment() -> Config {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____  ____  _____
   / __ \/ __ \/ ___/
  / /_/ / / / /\__ \
 / ____/ /_/ /___/ /
/_/    \____//____/
    "#
    );
}
