use anyhow::Result;
use audio_transcribe_batch::config::Config;
use audio_transcribe_batch::orchestrator::App;
use audio_transcribe_batch::utils::logging;
use std::time::Instant;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    let started = Instant::now();

    // 初始化并运行应用
    let result = App::initialize(config).run().await;

    info!("⏱️ 总执行时间: {:.2} 秒", started.elapsed().as_secs_f64());

    Ok(result?)
}
