use anyhow::Context;
use pos_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    // 打印横幅
    print_banner();

    tracing::info!(
        work_dir = %config.work_dir,
        port = config.http_port,
        environment = %config.environment,
        "🦀 POS server starting..."
    );

    // 2. 初始化服务器状态 (加载数据文件，损坏则中止)
    let state = ServerState::initialize(&config)
        .with_context(|| format!("failed to load data from {}", config.work_dir))?;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
