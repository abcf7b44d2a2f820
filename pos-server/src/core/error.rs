use thiserror::Error;

use crate::store::StoreError;

/// 服务器启动/运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据文件加载失败: {0}")]
    Store(#[from] StoreError),

    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
