//! 转写 API 响应数据结构
//!
//! 对应远端 v2/transcript 接口的响应体。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// 提交转写任务后的响应
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    /// 远端分配的任务 ID
    pub id: Option<String>,
}

/// 轮询转写任务状态的响应
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptStatusResponse {
    pub id: Option<String>,
    /// 远端状态：queued / processing / completed / error，也可能是未知值
    pub status: String,
    pub text: Option<String>,
    pub utterances: Option<Vec<Utterance>>,
    pub confidence: Option<f64>,
    pub audio_duration: Option<f64>,
    /// status 为 error 时 API 附带的错误信息
    pub error: Option<String>,
}

/// 单条说话人分段
///
/// start / end 保持 API 返回的毫秒值不变；未建模的字段原样保留在 extra 中，
/// 因此写入输出文件的 utterances 结构与 API 返回的完全一致。
/// 秒的换算只发生在控制台展示时。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// 起始偏移（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    /// 结束偏移（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Utterance {
    /// 起始偏移换算为秒（仅用于显示）
    pub fn start_seconds(&self) -> Option<f64> {
        self.start.map(|ms| ms as f64 / 1000.0)
    }

    /// 结束偏移换算为秒（仅用于显示）
    pub fn end_seconds(&self) -> Option<f64> {
        self.end.map(|ms| ms as f64 / 1000.0)
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let speaker = self.speaker.as_deref().unwrap_or("N/A");
        let text = self.text.as_deref().unwrap_or("");
        let start = self
            .start_seconds()
            .map(|s| format!("{}s", s))
            .unwrap_or_else(|| "N/A".to_string());
        let end = self
            .end_seconds()
            .map(|s| format!("{}s", s))
            .unwrap_or_else(|| "N/A".to_string());
        write!(f, "Speaker {} ({} - {}): {}", speaker, start, end, text)
    }
}
