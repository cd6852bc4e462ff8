use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::resolver::fuzzy::{full_process, token_set_ratio};
use crate::resolver::{AnswerLetter, OptionSet};

/// 匹配策略，按置信度从高到低排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// 响应开头即为独立字母
    Strict,
    /// 响应任意位置出现的独立字母
    Loose,
    /// 响应与选项内容的词集合相似度
    Fuzzy,
}

impl MatchStrategy {
    /// 解析器依次尝试的策略顺序
    pub const CASCADE: [MatchStrategy; 3] = [
        MatchStrategy::Strict,
        MatchStrategy::Loose,
        MatchStrategy::Fuzzy,
    ];
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchStrategy::Strict => "严格匹配",
            MatchStrategy::Loose => "宽松匹配",
            MatchStrategy::Fuzzy => "模糊匹配",
        };
        write!(f, "{}", name)
    }
}

/// 单个策略的执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyOutcome {
    /// 命中，`score` 只有模糊匹配才有
    Matched {
        letter: AnswerLetter,
        score: Option<u8>,
    },
    /// 未命中，模糊匹配会带上最高分
    NoMatch { best_score: Option<u8> },
}

/// 严格匹配：首字符为有效字母，且其后是结尾、空白或标点
///
/// `text` 需已 trim 并转小写。
pub(crate) fn strict_prefix(text: &str, options: &OptionSet) -> StrategyOutcome {
    let mut chars = text.chars();
    let first = chars.next().and_then(AnswerLetter::from_char);

    if let Some(letter) = first.filter(|l| options.contains_letter(*l)) {
        let bounded = match chars.next() {
            None => true,
            Some(next) => next.is_whitespace() || next.is_ascii_punctuation() || is_punctuation(next),
        };
        if bounded {
            return StrategyOutcome::Matched { letter, score: None };
        }
    }

    StrategyOutcome::NoMatch { best_score: None }
}

/// 宽松匹配：第一个两侧均不是字母的有效字母
pub(crate) fn loose_boundary(text: &str, options: &OptionSet) -> StrategyOutcome {
    let letter = match boundary_regex(options) {
        Ok(re) => re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().chars().next())
            .and_then(AnswerLetter::from_char),
        Err(e) => {
            warn!("宽松匹配正则构建失败: {}", e);
            None
        }
    };

    match letter {
        Some(letter) => StrategyOutcome::Matched { letter, score: None },
        None => StrategyOutcome::NoMatch { best_score: None },
    }
}

/// 模糊匹配：取词集合相似度最高的选项（同分取靠前者），达到阈值才接受
///
/// 只有得分大于 0 的选项才能成为候选，预处理后为空的响应直接判为未命中，
/// 因此阈值为 0 时空响应或无关文本也不会被解析成字母。
pub(crate) fn fuzzy_fallback(text: &str, options: &OptionSet, threshold: u8) -> StrategyOutcome {
    if full_process(text).is_empty() {
        return StrategyOutcome::NoMatch { best_score: None };
    }

    let mut best: Option<AnswerLetter> = None;
    let mut best_score = 0u8;

    for (letter, option) in options.labeled() {
        let score = token_set_ratio(text, &option.to_lowercase());
        if score > best_score {
            best = Some(letter);
            best_score = score;
        }
    }

    match best {
        Some(letter) if best_score >= threshold => StrategyOutcome::Matched {
            letter,
            score: Some(best_score),
        },
        _ => StrategyOutcome::NoMatch {
            best_score: Some(best_score),
        },
    }
}

/// 字符类只包含当前选项范围内的字母，越界字母永远不会被捕获
fn boundary_regex(options: &OptionSet) -> Result<Regex, regex::Error> {
    let last = options
        .letters()
        .last()
        .map(|l| l.as_char())
        .unwrap_or('a');
    Regex::new(&format!(r"(?:^|\P{{L}})([a-{}])(?:$|\P{{L}})", last))
}

fn is_punctuation(c: char) -> bool {
    matches!(c, '。' | '，' | '、' | '：' | '；' | '）' | '」' | '！' | '？')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> OptionSet {
        OptionSet::new(vec!["Paris", "London", "Berlin", "Madrid"]).unwrap()
    }

    #[test]
    fn test_strict_prefix() {
        let options = four();
        assert_eq!(
            strict_prefix("c", &options),
            StrategyOutcome::Matched {
                letter: AnswerLetter::C,
                score: None
            }
        );
        assert_eq!(
            strict_prefix("b) london", &options),
            StrategyOutcome::Matched {
                letter: AnswerLetter::B,
                score: None
            }
        );
        // 字母属于单词的一部分
        assert_eq!(
            strict_prefix("answer: b", &options),
            StrategyOutcome::NoMatch { best_score: None }
        );
        assert_eq!(strict_prefix("", &options), StrategyOutcome::NoMatch { best_score: None });
    }

    #[test]
    fn test_strict_prefix_out_of_range() {
        let options = OptionSet::new(vec!["Paris", "London"]).unwrap();
        assert_eq!(
            strict_prefix("c.", &options),
            StrategyOutcome::NoMatch { best_score: None }
        );
    }

    #[test]
    fn test_loose_boundary_skips_embedded_letters() {
        let options = four();
        assert_eq!(
            loose_boundary("the answer is (d)", &options),
            StrategyOutcome::Matched {
                letter: AnswerLetter::D,
                score: None
            }
        );
        assert_eq!(
            loose_boundary("because", &options),
            StrategyOutcome::NoMatch { best_score: None }
        );
    }

    #[test]
    fn test_loose_boundary_takes_first_in_range_letter() {
        let options = OptionSet::new(vec!["Paris", "London"]).unwrap();
        assert_eq!(
            loose_boundary("not d, it is b", &options),
            StrategyOutcome::Matched {
                letter: AnswerLetter::B,
                score: None
            }
        );
    }

    #[test]
    fn test_fuzzy_fallback_threshold() {
        let options = OptionSet::new(vec!["Cell membrane", "Nucleus"]).unwrap();
        assert_eq!(
            fuzzy_fallback("cell wall", &options, 60),
            StrategyOutcome::Matched {
                letter: AnswerLetter::A,
                score: Some(62)
            }
        );
        assert_eq!(
            fuzzy_fallback("cell wall", &options, 70),
            StrategyOutcome::NoMatch {
                best_score: Some(62)
            }
        );
    }

    #[test]
    fn test_fuzzy_fallback_accepts_score_equal_to_threshold() {
        let options = OptionSet::new(vec!["Cell membrane", "Nucleus"]).unwrap();
        assert_eq!(
            fuzzy_fallback("cell wall", &options, 62),
            StrategyOutcome::Matched {
                letter: AnswerLetter::A,
                score: Some(62)
            }
        );
        assert_eq!(
            fuzzy_fallback("cell wall", &options, 63),
            StrategyOutcome::NoMatch {
                best_score: Some(62)
            }
        );
    }

    #[test]
    fn test_fuzzy_fallback_zero_threshold_needs_some_overlap() {
        let options = OptionSet::new(vec!["Yes", "No"]).unwrap();
        assert_eq!(
            fuzzy_fallback("", &options, 0),
            StrategyOutcome::NoMatch { best_score: None }
        );
        assert_eq!(
            fuzzy_fallback("...", &options, 0),
            StrategyOutcome::NoMatch { best_score: None }
        );
        assert_eq!(
            fuzzy_fallback("zzz qqq", &options, 0),
            StrategyOutcome::NoMatch {
                best_score: Some(0)
            }
        );
    }

    #[test]
    fn test_fuzzy_fallback_prefers_first_duplicate() {
        let options = OptionSet::new(vec!["Red planet", "Mars", "Mars"]).unwrap();
        assert_eq!(
            fuzzy_fallback("mars", &options, 80),
            StrategyOutcome::Matched {
                letter: AnswerLetter::B,
                score: Some(100)
            }
        );
    }
}
