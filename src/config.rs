use std::str::FromStr;

use crate::error::ConfigError;
use crate::resolver::DEFAULT_FUZZY_THRESHOLD;

/// 程序配置
///
/// 所有配置都由调用方显式持有并传递，不使用全局变量
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时处理的题组数量
    pub max_concurrent_sets: usize,
    /// 题组 TOML 文件存放目录
    pub question_folder: String,
    /// 模糊匹配阈值（0-100）
    pub fuzzy_threshold: u8,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 无法确定答案的题目写入此文件
    pub warn_file: String,
    /// JSON 结果报告
    pub report_file: String,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 单题 LLM 调用的最大重试次数
    pub llm_max_retries: u32,
    /// 重试基础间隔（毫秒），乘以当前重试次数
    pub llm_retry_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_sets: 4,
            question_folder: "questions".to_string(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            warn_file: "warn.txt".to_string(),
            report_file: "answers.json".to_string(),
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
            llm_max_retries: 3,
            llm_retry_delay_ms: 1000,
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；已设置但无法解析的数值型变量直接报错，
    /// 不会静默回退到默认值
    pub fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();
        Ok(Self {
            max_concurrent_sets: env_value("MAX_CONCURRENT_SETS", default.max_concurrent_sets)?,
            question_folder: std::env::var("QUESTION_FOLDER").unwrap_or(default.question_folder),
            fuzzy_threshold: env_value("FUZZY_THRESHOLD", default.fuzzy_threshold)?,
            verbose_logging: env_value("VERBOSE_LOGGING", default.verbose_logging)?,
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            report_file: std::env::var("REPORT_FILE").unwrap_or(default.report_file),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            llm_max_retries: env_value("LLM_MAX_RETRIES", default.llm_max_retries)?,
            llm_retry_delay_ms: env_value("LLM_RETRY_DELAY_MS", default.llm_retry_delay_ms)?,
        })
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fuzzy_threshold > 100 {
            return Err(ConfigError::InvalidThreshold(self.fuzzy_threshold));
        }
        if self.max_concurrent_sets == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }
}

fn env_value<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    parse_value(key, std::env::var(key).ok(), default)
}

fn parse_value<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue { key, value }),
    }
}
