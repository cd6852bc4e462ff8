//! 文本处理工具

/// 压缩空白：连续空白（含换行）替换为单个空格，并去除首尾空白
///
/// 题干在发送给 LLM 之前需要先经过该处理
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 规范化 LLM 响应：去除首尾空白并转小写
pub fn normalize_response(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
