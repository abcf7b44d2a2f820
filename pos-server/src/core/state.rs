use parking_lot::RwLock;
use std::sync::Arc;

use crate::core::{Config, Result};
use crate::store::PosStore;

/// 服务器状态 - 持有配置与数据存储的共享引用
///
/// 使用 Arc 实现浅拷贝，可直接作为 axum `State` 传给每个 handler。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<RwLock<PosStore>> | 菜单/桌台/订单三张表 |
///
/// 修改操作持有写锁完成整个 读-改-写文件 周期，读操作持有读锁。
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<RwLock<PosStore>>,
}

impl ServerState {
    pub fn new(config: Config, store: PosStore) -> Self {
        Self {
            config,
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 校验配置并创建数据目录
    /// 2. 加载三张表，任何一张损坏都会中止启动
    pub fn initialize(config: &Config) -> Result<Self> {
        config.validate()?;
        config.ensure_work_dir()?;

        let store = PosStore::open(config.store_paths())?;
        Ok(Self::new(config.clone(), store))
    }
}
