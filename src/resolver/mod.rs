//! 答案字母解析器 - 核心能力
//!
//! 输入有序选项集合和 LLM 的原始文本响应，按置信度从高到低依次尝试：
//!
//! 1. 严格匹配（`Strict`）：响应开头即为独立的有效字母
//! 2. 宽松匹配（`Loose`）：响应任意位置第一个独立的有效字母
//! 3. 模糊匹配（`Fuzzy`）：响应与各选项内容的词集合相似度，达到阈值才接受
//!
//! 全部失败时返回 `Resolution::Unresolved`，调用方应跳过该题。
//! 解析器无内部状态，可在任意并发环境中直接调用。

pub mod fuzzy;
pub mod letter;
pub mod options;
pub mod strategy;

pub use letter::AnswerLetter;
pub use options::OptionSet;
pub use strategy::{MatchStrategy, StrategyOutcome};

use strategy::{fuzzy_fallback, loose_boundary, strict_prefix};

use serde::Serialize;
use tracing::debug;

use crate::utils::text::normalize_response;

/// 最多支持的选项数量（a-d）
pub const MAX_OPTIONS: usize = 4;

/// 默认模糊匹配阈值
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 80;

/// 解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// 成功解析出字母
    Resolved {
        letter: AnswerLetter,
        strategy: MatchStrategy,
        /// 仅模糊匹配有分值
        score: Option<u8>,
    },
    /// 无法确定答案
    Unresolved {
        /// 模糊匹配阶段的最高分
        best_score: Option<u8>,
    },
}

impl Resolution {
    pub fn letter(&self) -> Option<AnswerLetter> {
        match self {
            Resolution::Resolved { letter, .. } => Some(*letter),
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn strategy(&self) -> Option<MatchStrategy> {
        match self {
            Resolution::Resolved { strategy, .. } => Some(*strategy),
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }
}

/// 答案字母解析器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    fuzzy_threshold: u8,
}

impl Resolver {
    /// 创建解析器，阈值超过 100 时按 100 处理
    pub fn new(fuzzy_threshold: u8) -> Self {
        Self {
            fuzzy_threshold: fuzzy_threshold.min(100),
        }
    }

    pub fn fuzzy_threshold(&self) -> u8 {
        self.fuzzy_threshold
    }

    /// 解析 LLM 响应
    ///
    /// 按 `MatchStrategy::CASCADE` 顺序执行，第一个命中的策略即为结果。
    /// 任何输入（包括空字符串）都不会 panic。
    pub fn resolve(&self, options: &OptionSet, raw_response: &str) -> Resolution {
        let text = normalize_response(raw_response);
        let mut best_score = None;

        for strategy in MatchStrategy::CASCADE {
            match self.run_normalized(strategy, options, &text) {
                StrategyOutcome::Matched { letter, score } => {
                    debug!("{} 命中: {} (分值: {:?})", strategy, letter, score);
                    return Resolution::Resolved {
                        letter,
                        strategy,
                        score,
                    };
                }
                StrategyOutcome::NoMatch { best_score: score } => {
                    debug!("{} 未命中", strategy);
                    best_score = best_score.or(score);
                }
            }
        }

        Resolution::Unresolved { best_score }
    }

    /// 只返回字母
    pub fn resolve_letter(&self, options: &OptionSet, raw_response: &str) -> Option<AnswerLetter> {
        self.resolve(options, raw_response).letter()
    }

    /// 单独执行某一个策略
    pub fn run_strategy(
        &self,
        strategy: MatchStrategy,
        options: &OptionSet,
        raw_response: &str,
    ) -> StrategyOutcome {
        self.run_normalized(strategy, options, &normalize_response(raw_response))
    }

    fn run_normalized(&self, strategy: MatchStrategy, options: &OptionSet, text: &str) -> StrategyOutcome {
        match strategy {
            MatchStrategy::Strict => strict_prefix(text, options),
            MatchStrategy::Loose => loose_boundary(text, options),
            MatchStrategy::Fuzzy => fuzzy_fallback(text, options, self.fuzzy_threshold),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_FUZZY_THRESHOLD)
    }
}
