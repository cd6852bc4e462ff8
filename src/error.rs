//! 错误类型定义
//!
//! - `ResolverError`：调用方违反输入约定（选项列表非法）
//! - `LlmError`：外部 LLM 调用失败，只在服务层内部流转
//! - `ConfigError`：配置值非法
//!
//! 注意："无法解析出答案"不是错误，而是 `Resolution::Unresolved`

use thiserror::Error;

use crate::resolver::MAX_OPTIONS;

/// 选项集合构造错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    /// 选项列表为空
    #[error("选项列表不能为空")]
    EmptyOptions,
    /// 选项数量超过上限
    #[error("选项数量 {0} 超出上限 {max}", max = MAX_OPTIONS)]
    TooManyOptions(usize),
    /// 某个选项内容为空（索引从 0 开始）
    #[error("第 {} 个选项内容为空", .0 + 1)]
    BlankOption(usize),
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 未配置 API Key
    #[error("未配置 LLM API Key")]
    MissingApiKey,
    /// API 调用失败
    #[error("LLM API 调用失败 (模型: {model}): {message}")]
    ApiCallFailed { model: String, message: String },
    /// 返回结果为空
    #[error("LLM 返回内容为空 (模型: {model})")]
    EmptyResponse { model: String },
    /// 请求构建失败
    #[error("LLM 请求构建失败: {0}")]
    RequestBuild(String),
}

/// 配置错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 模糊匹配阈值超出 0-100
    #[error("模糊匹配阈值 {0} 超出范围 [0, 100]")]
    InvalidThreshold(u8),
    /// 并发数不能为 0
    #[error("最大并发数必须大于 0")]
    ZeroConcurrency,
    /// 环境变量无法解析
    #[error("环境变量 {key} 的值 {value:?} 无法解析")]
    InvalidEnvValue { key: &'static str, value: String },
}
