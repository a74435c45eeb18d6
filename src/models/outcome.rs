//! 任务终态结果数据结构
//!
//! 每个输入 URL 恰好产生一条 `JobOutcome`。状态标签构成封闭集合，
//! 每个状态携带的字段由对应的枚举变体唯一确定，
//! 序列化后即是输出文件中的一条记录。

use crate::models::transcript::Utterance;
use serde::{Deserialize, Serialize};

/// 单个音频任务的终态结果
///
/// 序列化时以 status_script 字段作为状态标签。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status_script", rename_all = "snake_case")]
pub enum JobOutcome {
    /// 转写成功
    Completed {
        id: Option<String>,
        audio_url: String,
        text: Option<String>,
        #[serde(default)]
        utterances: Vec<Utterance>,
        confidence: Option<f64>,
        audio_duration: Option<f64>,
    },
    /// API 报告转写失败
    TranscriptionError {
        audio_url: String,
        id: String,
        error_message: String,
    },
    /// API 返回了无法识别的状态
    UnknownStatus {
        audio_url: String,
        id: String,
        error_message: String,
    },
    /// 轮询次数用尽仍未完成
    Timeout {
        audio_url: String,
        id: String,
        error_message: String,
    },
    /// 提交请求未能获得任务 ID
    SubmitFailed {
        audio_url: String,
        error_message: String,
    },
    /// 任务运行期间发生意外错误
    TaskException {
        audio_url: String,
        error_message: String,
    },
}

impl JobOutcome {
    /// 结果携带的原始音频 URL
    pub fn audio_url(&self) -> &str {
        match self {
            JobOutcome::Completed { audio_url, .. }
            | JobOutcome::TranscriptionError { audio_url, .. }
            | JobOutcome::UnknownStatus { audio_url, .. }
            | JobOutcome::Timeout { audio_url, .. }
            | JobOutcome::SubmitFailed { audio_url, .. }
            | JobOutcome::TaskException { audio_url, .. } => audio_url,
        }
    }

    /// 是否转写成功
    pub fn is_completed(&self) -> bool {
        matches!(self, JobOutcome::Completed { .. })
    }
}
