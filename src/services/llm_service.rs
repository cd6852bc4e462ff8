//! LLM 服务 - 业务能力层
//!
//! 只负责"向 LLM 提问并拿到原始文本"的能力，不负责解析答案
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型（兼容 OpenAI API 的服务）
//!
//! ## 错误约定
//! 网络错误、限流、空响应等传输层错误全部在本层消化：记录日志、按配置重试，
//! 最终失败时返回空字符串。解析器永远看不到传输层错误。

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LlmError;
use crate::resolver::OptionSet;
use crate::utils::normalize_whitespace;

const SYSTEM_MESSAGE: &str = "You are a multiple choice answering bot.";

/// LLM 服务
///
/// 职责：
/// - 构建单道选择题的提示词
/// - 调用 LLM API 并处理重试
/// - 不解析答案字母
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    has_api_key: bool,
    max_retries: u32,
    retry_delay_ms: u64,
}

impl LlmService {
    /// 创建新的 LLM 服务
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
            has_api_key: !config.llm_api_key.trim().is_empty(),
            max_retries: config.llm_max_retries,
            retry_delay_ms: config.llm_retry_delay_ms,
        }
    }

    /// 构建选择题提示词
    ///
    /// 题干先压缩空白；选项按 `a. xxx` 逐行列出；要求只回复当前范围内的字母
    pub fn build_prompt(stem: &str, options: &OptionSet) -> String {
        let letters: Vec<String> = options.letters().iter().map(|l| l.to_string()).collect();
        let formatted_options: Vec<String> = options
            .labeled()
            .map(|(letter, opt)| format!("{}. {}", letter, normalize_whitespace(opt)))
            .collect();

        format!(
            "Read the question and the options below carefully.\n\
             Your response should be ONLY the letter of the correct option ({}) and nothing else.\n\n\
             Question: {}\n\nOptions:\n{}\n\nAnswer:",
            letters.join(", "),
            normalize_whitespace(stem),
            formatted_options.join("\n")
        )
    }

    /// 通用的 LLM 调用函数
    ///
    /// # 参数
    /// - `user_message`: 用户消息内容
    /// - `system_message`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回去除首尾空白后的响应内容
    pub async fn send_to_llm(
        &self,
        user_message: &str,
        system_message: Option<&str>,
    ) -> Result<String, LlmError> {
        if !self.has_api_key {
            return Err(LlmError::MissingApiKey);
        }

        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        let mut messages = Vec::new();

        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()
                .map_err(|e| LlmError::RequestBuild(e.to_string()))?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(|e| LlmError::RequestBuild(e.to_string()))?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.0)
            .max_tokens(64u32)
            .build()
            .map_err(|e| LlmError::RequestBuild(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| LlmError::ApiCallFailed {
                model: self.model_name.clone(),
                message: e.to_string(),
            })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| LlmError::EmptyResponse {
                model: self.model_name.clone(),
            })?;

        Ok(content.trim().to_string())
    }

    /// 向 LLM 提问一道选择题
    ///
    /// 失败时按 `retry_delay_ms * 第几次重试` 线性退避，重试耗尽或未配置
    /// API Key 时返回空字符串
    pub async fn ask_for_answer(&self, stem: &str, options: &OptionSet) -> String {
        let prompt = Self::build_prompt(stem, options);
        let mut attempt: u32 = 0;

        loop {
            match self.send_to_llm(&prompt, Some(SYSTEM_MESSAGE)).await {
                Ok(text) => {
                    debug!("LLM 原始响应: {}", text);
                    return text;
                }
                Err(LlmError::MissingApiKey) => {
                    warn!("未配置 LLM API Key，跳过 LLM 调用");
                    return String::new();
                }
                Err(e) if attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.retry_delay(attempt);
                    warn!(
                        "LLM 调用失败: {}，{} ms 后进行第 {}/{} 次重试",
                        e,
                        delay.as_millis(),
                        attempt,
                        self.max_retries
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    warn!("LLM 调用彻底失败 (已重试 {} 次): {}", attempt, e);
                    return String::new();
                }
            }
        }
    }

    /// 第 `attempt` 次重试前的等待时间，超大配置值按上限饱和
    fn retry_delay(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.retry_delay_ms.saturating_mul(u64::from(attempt)))
    }
}
