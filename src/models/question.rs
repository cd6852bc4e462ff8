use serde::{Deserialize, Serialize};

use crate::error::ResolverError;
use crate::resolver::OptionSet;

/// 单道选择题
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Question {
    /// 题干
    pub stem: String,
    /// 选项，顺序即字母顺序
    pub options: Vec<String>,
    /// 已记录的 LLM 原始响应；存在时直接解析，不再调用 LLM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl Question {
    /// 校验选项并构建 `OptionSet`
    pub fn option_set(&self) -> Result<OptionSet, ResolverError> {
        OptionSet::new(self.options.clone())
    }
}

/// 题组（对应一个 TOML 文件）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}
