//! 警告写入服务 - 业务能力层
//!
//! 只负责"把无法确定答案的题目写入 warn.txt"能力，不关心流程

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

use crate::utils::normalize_whitespace;

/// 警告写入服务
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.warn_file_path
    }

    /// 写入警告信息
    ///
    /// # 参数
    /// - `set_name`: 题组名称
    /// - `question_index`: 题目索引（从 1 开始）
    /// - `stem`: 题干内容（写入前压缩空白，保证一题一行）
    pub async fn write(&self, set_name: &str, question_index: usize, stem: &str) -> Result<()> {
        debug!(
            "写入警告: 题组 {} | 题目 {} | 题干长度: {}",
            set_name,
            question_index,
            stem.len()
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .with_context(|| format!("无法打开警告文件: {}", self.warn_file_path))?;

        let warn_msg = format!(
            "题组 {} | 题目 {} | 题干: {}\n",
            set_name,
            question_index,
            normalize_whitespace(stem)
        );

        file.write_all(warn_msg.as_bytes())?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_appends_lines() {
        let path = std::env::temp_dir().join(format!("answer_resolver_warn_{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let writer = WarnWriter::with_path(path.to_string_lossy().to_string());

        writer.write("Capitals", 1, "What is\nthe capital?").await.unwrap();
        writer.write("Capitals", 3, "Another").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "题组 Capitals | 题目 1 | 题干: What is the capital?\n题组 Capitals | 题目 3 | 题干: Another\n"
        );
        let _ = std::fs::remove_file(&path);
    }
}
