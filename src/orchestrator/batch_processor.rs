//! 批量转写处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量任务的调度和结果聚合。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建共享的转写客户端（HTTP 连接池）
//! 2. **批量加载**：从输入文件读取音频 URL 列表（`Vec<String>`）
//! 3. **并发调度**：为每个 URL 启动一个独立任务，全部并发执行
//! 4. **结果聚合**：按完成顺序收集终态结果，任务崩溃转化为 task_exception
//! 5. **结果写出**：将全部结果写入输出文件
//! 6. **全局统计**：汇总成功/失败数量
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个任务的细节，向下委托 job_processor
//! - **资源所有者**：唯一持有 TranscribeClient 的模块，
//!   连接池随批次开始创建、批次结束释放
//! - **失败即数据**：任何单个任务的失败都不会中止批次，
//!   只有输入读取和输出写入错误才是致命的

use crate::clients::TranscribeClient;
use crate::config::Config;
use crate::error::{ConfigError, Result, SinkError};
use crate::models::JobOutcome;
use crate::orchestrator::job_processor;
use futures::stream::{FuturesUnordered, StreamExt};
use std::fs;
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    client: TranscribeClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);

        // 创建共享客户端（整个批次唯一的连接池）
        let client = TranscribeClient::new(&config);

        Self { config, client }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 读取所有待处理的 URL
        let audio_urls = self.load_urls()?;

        if audio_urls.is_empty() {
            info!("ℹ️ 输入文件中没有需要处理的 URL。");
            return Ok(());
        }

        info!(
            "🔎 已从 '{}' 读取 {} 个 URL。",
            self.config.input_urls_file,
            audio_urls.len()
        );

        // 并发处理所有 URL
        let outcomes = self.process_all_urls(audio_urls).await;

        // 写入输出文件
        self.write_output(&outcomes)?;

        // 输出最终统计
        print_final_stats(&outcomes, &self.config);

        Ok(())
    }

    /// 从输入文件读取 URL 列表
    fn load_urls(&self) -> Result<Vec<String>, ConfigError> {
        let path = &self.config.input_urls_file;

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::InputFileUnreadable {
            path: path.clone(),
            source,
        })?;

        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|source| ConfigError::InputFileInvalidJson {
                path: path.clone(),
                source,
            })?;

        let items = value
            .as_array()
            .ok_or_else(|| ConfigError::InputFileNotAList { path: path.clone() })?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    ConfigError::InputElementNotAString {
                        path: path.clone(),
                        index,
                    }
                })
            })
            .collect()
    }

    /// 并发处理所有 URL，按完成顺序收集结果
    async fn process_all_urls(&self, audio_urls: Vec<String>) -> Vec<JobOutcome> {
        let mut handles = Vec::new();

        // 为每个 URL 创建并发任务，克隆共享客户端
        for (index, audio_url) in audio_urls.into_iter().enumerate() {
            let job_index = index + 1;
            let client = self.client.clone();
            let config = self.config.clone();
            let url_for_fault = audio_url.clone();

            let handle = tokio::spawn(job_processor::process_url(
                client, audio_url, job_index, config,
            ));
            handles.push((url_for_fault, job_index, handle));
        }

        // 等待所有任务完成；单个任务的意外崩溃转化为 task_exception 结果，
        // 不影响其余任务
        let mut in_flight: FuturesUnordered<_> = handles
            .into_iter()
            .map(|(audio_url, job_index, handle)| async move {
                (audio_url, job_index, handle.await)
            })
            .collect();

        let mut outcomes = Vec::new();
        while let Some((audio_url, job_index, joined)) = in_flight.next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    error!("[任务 {}] ❌ 任务执行期间发生意外错误: {}", job_index, e);
                    outcomes.push(JobOutcome::TaskException {
                        audio_url,
                        error_message: e.to_string(),
                    });
                }
            }
        }

        outcomes
    }

    /// 将全部结果写入输出文件
    fn write_output(&self, outcomes: &[JobOutcome]) -> Result<(), SinkError> {
        let path = &self.config.output_transcripts_file;

        let body = serde_json::to_string_pretty(outcomes)
            .map_err(|source| SinkError::Serialize { source })?;

        fs::write(path, body).map_err(|source| SinkError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量音频转写模式");
    info!("📋 输入文件: {}", config.input_urls_file);
    info!(
        "📊 最大轮询次数: {}, 轮询间隔: {} 秒",
        config.max_polling_attempts, config.polling_interval_secs
    );
    info!("{}", "=".repeat(60));
}

fn print_final_stats(outcomes: &[JobOutcome], config: &Config) {
    let completed = outcomes.iter().filter(|o| o.is_completed()).count();
    let failed = outcomes.len() - completed;

    info!("\n{}", "=".repeat(60));
    info!("🎉 全部转写处理完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {}/{}", completed, outcomes.len());
    info!("❌ 失败: {}", failed);
    info!("📄 结果已保存至: {}", config.output_transcripts_file);
    info!("{}", "=".repeat(60));
}
