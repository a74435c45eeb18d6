//! # Audio Transcribe Batch
//!
//! 一个用于批量提交音频转写任务并聚合结果的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 数据结构定义
//! - `TranscriptStatusResponse` - 远端 API 的状态响应
//! - `Utterance` - 说话人分段（保留 API 原始毫秒结构）
//! - `JobOutcome` - 单个任务的终态结果（封闭状态集合）
//!
//! ### ② 能力层（Clients）
//! - `clients/` - 持有共享 HTTP 连接池，只暴露能力
//! - `TranscribeClient` - submit / fetch_status 两个 API 能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量转写处理器，管理并发和结果聚合
//! - `orchestrator/job_processor` - 单个任务处理器，提交 → 轮询 → 终态
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod utils;

// 重新导出常用类型
pub use clients::TranscribeClient;
pub use config::Config;
pub use error::{AppError, ConfigError, Result, SinkError};
pub use models::{JobOutcome, TranscriptStatusResponse, Utterance};
pub use orchestrator::{process_url, App};
