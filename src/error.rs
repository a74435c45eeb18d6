//! 应用程序错误类型
//!
//! 只有输入源读取和输出写入会让整个批次失败；
//! 单个任务内的所有失败都转化为 `JobOutcome` 数据，不在这里建模。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误（输入源不可用）
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 结果写入错误
    #[error("输出错误: {0}")]
    Sink(#[from] SinkError),
}

/// 输入源相关错误
///
/// 任何一种都会在发起网络请求之前中止整个批次。
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 输入文件缺失或不可读
    #[error("无法读取输入文件 '{path}': {source}")]
    InputFileUnreadable {
        path: String,
        source: std::io::Error,
    },
    /// 输入文件不是合法 JSON
    #[error("输入文件 '{path}' 不是有效的 JSON 格式: {source}")]
    InputFileInvalidJson {
        path: String,
        source: serde_json::Error,
    },
    /// 输入文件的顶层结构不是数组
    #[error("输入文件 '{path}' 不包含一个 JSON 数组")]
    InputFileNotAList { path: String },
    /// 数组元素不是字符串
    #[error("输入文件 '{path}' 中第 {index} 个元素不是字符串")]
    InputElementNotAString { path: String, index: usize },
}

/// 应用程序 Result 别名
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// 结果写入相关错误
#[derive(Debug, Error)]
pub enum SinkError {
    /// 结果序列化失败
    #[error("无法序列化转写结果: {source}")]
    Serialize { source: serde_json::Error },
    /// 输出文件写入失败
    #[error("无法写入输出文件 '{path}': {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },
}
