//! # Answer Resolver
//!
//! 把 LLM 对选择题的自由文本回答解析为选项字母（a-d）
//!
//! ## 架构设计
//!
//! ### ① 核心能力（Resolver）
//! - `resolver/` - 纯函数式的答案字母解析，无状态、无 I/O
//! - 严格匹配 → 宽松匹配 → 模糊匹配，依次降低置信度
//!
//! ### ② 业务能力层（Services）
//! - `LlmService` - 构建提示词并调用 LLM，传输错误在本层消化
//! - `WarnWriter` - 写 warn.txt 能力
//! - `ReportWriter` - 写 JSON 结果报告
//!
//! ### ③ 流程层（Workflow）
//! - `QuestionCtx` - 上下文封装（题组 + 题目索引）
//! - `QuestionFlow` - 流程编排（取响应 → 解析 → 兜底）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量题组处理器，管理并发
//! - `orchestrator/set_processor` - 单个题组处理器，遍历题目列表

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod resolver;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{ConfigError, LlmError, ResolverError};
pub use models::{Question, QuestionSet};
pub use orchestrator::{process_question_set, App};
pub use resolver::{AnswerLetter, MatchStrategy, OptionSet, Resolution, Resolver};
pub use workflow::{ProcessResult, QuestionCtx, QuestionFlow};
