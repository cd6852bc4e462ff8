//! 题目处理上下文
//!
//! 封装"我正在处理哪个题组的第几题"这一信息

use std::fmt::Display;

/// 题目处理上下文
#[derive(Debug, Clone)]
pub struct QuestionCtx {
    /// 题组名称
    pub set_name: String,

    /// 题组索引（仅用于日志显示）
    pub set_index: usize,

    /// 题目在题组中的索引（从1开始）
    pub question_index: usize,
}

impl QuestionCtx {
    /// 创建新的题目上下文
    pub fn new(set_name: String, set_index: usize, question_index: usize) -> Self {
        Self {
            set_name,
            set_index,
            question_index,
        }
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[题组 #{} {} 题目#{}]",
            self.set_index, self.set_name, self.question_index
        )
    }
}
