//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量调度和单任务流程推进，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量转写处理器
//! - 管理应用生命周期（初始化、运行、写出结果）
//! - 从输入文件加载 URL 列表（Vec<String>）
//! - 为每个 URL 启动并发任务，按完成顺序收集结果
//! - 将任务的意外崩溃转化为 task_exception 结果
//! - 输出全局统计信息
//!
//! ### `job_processor` - 单个音频任务处理器
//! - 驱动单个 URL 的完整生命周期：提交 → 轮询 → 终态
//! - 所有失败都转化为 JobOutcome 数据返回，永不向上抛错
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<String>)
//!     ↓
//! job_processor (处理单个 URL)
//!     ↓
//! clients (能力层：submit / fetch_status)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，job_processor 管单个
//! 2. **资源隔离**：只有编排层持有 Config 和 TranscribeClient
//! 3. **失败即数据**：任务级失败全部收敛为终态结果，只有输入/输出错误才是致命的

pub mod batch_processor;
pub mod job_processor;

// 重新导出主要类型
pub use batch_processor::App;
pub use job_processor::process_url;
