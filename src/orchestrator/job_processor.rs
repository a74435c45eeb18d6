//! 单个音频任务处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责单个音频 URL 的完整生命周期，与其他任务完全独立。
//!
//! ## 状态推进
//!
//! 1. **提交**：调用客户端 submit，拿不到任务 ID 即终止为 submit_failed
//! 2. **轮询**：最多 max_polling_attempts 次，每次间隔 polling_interval_secs 秒
//!    - completed → 提取转写文本与说话人分段，终止为 completed
//!    - error → 终止为 transcription_error，携带 API 的错误信息
//!    - queued / processing → 等待后重试
//!    - 其他状态 → 终止为 unknown_status，原始状态字符串进入错误信息
//!    - 轮询请求失败按瞬时错误处理，计入尝试次数，等待后重试
//! 3. **超时**：次数用尽仍未到终态 → 终止为 timeout
//!
//! 所有失败都转化为 JobOutcome 数据返回，不会向上抛出错误。

use crate::clients::TranscribeClient;
use crate::config::Config;
use crate::models::{JobOutcome, TranscriptStatusResponse};
use crate::utils::logging::truncate_text;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// 处理单个音频 URL
///
/// # 参数
/// - `client`: 转写客户端（共享连接池）
/// - `audio_url`: 音频文件地址
/// - `job_index`: 任务索引（仅用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回该任务的终态结果，永不失败。
pub async fn process_url(
    client: TranscribeClient,
    audio_url: String,
    job_index: usize,
    config: Config,
) -> JobOutcome {
    info!("[任务 {}] 🚀 开始处理 URL: {}", job_index, audio_url);

    match client.submit(&audio_url).await {
        Some(job_id) => {
            info!("[任务 {}] ✓ 提交成功, 远端任务 ID: {}", job_index, job_id);
            poll_until_terminal(&client, &audio_url, &job_id, job_index, &config).await
        }
        None => {
            error!("[任务 {}] ❌ 提交失败: {}", job_index, audio_url);
            JobOutcome::SubmitFailed {
                audio_url,
                error_message: "无法提交该 URL 进行转写。".to_string(),
            }
        }
    }
}

/// 轮询直到任务进入终态
///
/// 每次 fetch_status（无论成败）都计为一次尝试。
async fn poll_until_terminal(
    client: &TranscribeClient,
    audio_url: &str,
    job_id: &str,
    job_index: usize,
    config: &Config,
) -> JobOutcome {
    for attempt in 1..=config.max_polling_attempts {
        if let Some(response) = client.fetch_status(job_id).await {
            match response.status.as_str() {
                "completed" => {
                    log_completed(job_index, audio_url, job_id, &response);
                    return build_completed(audio_url, response);
                }
                "error" => {
                    let error_message = response
                        .error
                        .unwrap_or_else(|| "API 未提供错误信息".to_string());
                    error!(
                        "[任务 {}] ❌ 转写失败 (ID: {}): {}",
                        job_index, job_id, error_message
                    );
                    return JobOutcome::TranscriptionError {
                        audio_url: audio_url.to_string(),
                        id: job_id.to_string(),
                        error_message,
                    };
                }
                "queued" | "processing" => {
                    debug!(
                        "[任务 {}] 第 {}/{} 次轮询: {}",
                        job_index, attempt, config.max_polling_attempts, response.status
                    );
                }
                other => {
                    warn!(
                        "[任务 {}] ⚠️ 未知的 API 状态 '{}' (ID: {})",
                        job_index, other, job_id
                    );
                    return JobOutcome::UnknownStatus {
                        audio_url: audio_url.to_string(),
                        id: job_id.to_string(),
                        error_message: format!("未知的 API 状态: {}", other),
                    };
                }
            }
        }

        sleep(config.polling_interval()).await;
    }

    warn!(
        "[任务 {}] ⚠️ 等待转写完成超时 (ID: {})",
        job_index, job_id
    );
    JobOutcome::Timeout {
        audio_url: audio_url.to_string(),
        id: job_id.to_string(),
        error_message: "等待转写完成超时。".to_string(),
    }
}

/// 构建 completed 终态结果
///
/// utterances 按 API 返回原样存储，缺失时记为空列表。
fn build_completed(audio_url: &str, response: TranscriptStatusResponse) -> JobOutcome {
    JobOutcome::Completed {
        id: response.id,
        audio_url: audio_url.to_string(),
        text: response.text,
        utterances: response.utterances.unwrap_or_default(),
        confidence: response.confidence,
        audio_duration: response.audio_duration,
    }
}

// ========== 日志辅助函数 ==========

/// 在控制台展示转写结果
///
/// 有说话人分段时逐条展示（毫秒换算为秒），否则展示整段文本。
fn log_completed(
    job_index: usize,
    audio_url: &str,
    job_id: &str,
    response: &TranscriptStatusResponse,
) {
    match &response.utterances {
        Some(utterances) if !utterances.is_empty() => {
            info!(
                "[任务 {}] 🎯 {} (ID: {}) 的说话人分段转写:",
                job_index, audio_url, job_id
            );
            for utterance in utterances {
                info!("[任务 {}]   {}", job_index, utterance);
            }
        }
        _ => {
            if let Some(text) = &response.text {
                info!(
                    "[任务 {}] 🎯 转写结果 (ID: {}): {}",
                    job_index,
                    job_id,
                    truncate_text(text, 80)
                );
            }
        }
    }
}
