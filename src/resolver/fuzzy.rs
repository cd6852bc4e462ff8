//! 文本相似度评分
//!
//! `token_set_ratio` 比较两段文本的词集合，与词序无关，分值 0-100。
//! 基础的 `ratio` 为插入/删除编辑距离归一化后的相似度：
//! `2 * LCS / (len_a + len_b)`。

use std::collections::BTreeSet;

/// 文本预处理：非字母数字字符替换为空格，转小写，去首尾空白
pub fn full_process(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.to_lowercase().trim().to_string()
}

/// 两个字符串的相似度（0-100）
///
/// 相同字符串为 100；任一为空（另一个非空）为 0。
pub fn ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let lcs = lcs_len(&a, &b);
    let total = (a.len() + b.len()) as f64;
    let score = (2 * lcs) as f64 / total * 100.0;
    score.round().clamp(0.0, 100.0) as u8
}

/// 最长公共子序列长度（滚动数组）
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// 词集合相似度（0-100）
///
/// 取交集（排序后拼接）与各自差集，计算三组组合的 `ratio`，返回最大值。
/// 任一文本预处理后为空时返回 0。
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let a = full_process(a);
    let b = full_process(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let intersection = join_tokens(tokens_a.intersection(&tokens_b).copied());
    let diff_ab = join_tokens(tokens_a.difference(&tokens_b).copied());
    let diff_ba = join_tokens(tokens_b.difference(&tokens_a).copied());

    let combined_ab = format!("{} {}", intersection, diff_ab).trim().to_string();
    let combined_ba = format!("{} {}", intersection, diff_ba).trim().to_string();

    [
        ratio(&intersection, &combined_ab),
        ratio(&intersection, &combined_ba),
        ratio(&combined_ab, &combined_ba),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

// BTreeSet 迭代本身有序
fn join_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    tokens.collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_process() {
        assert_eq!(full_process("  Hello, World!  "), "hello  world");
        assert_eq!(full_process("!!!"), "");
    }

    #[test]
    fn test_ratio() {
        assert_eq!(ratio("abc", "abc"), 100);
        assert_eq!(ratio("", ""), 100);
        assert_eq!(ratio("abc", ""), 0);
        assert_eq!(ratio("abc", "abd"), 67);
        assert_eq!(ratio("abc", "xyz"), 0);
    }

    #[test]
    fn test_token_set_ratio_subset_scores_full() {
        assert_eq!(token_set_ratio("fuzzy was a bear", "fuzzy fuzzy was a bear"), 100);
        assert_eq!(
            token_set_ratio(
                "powerhouse of the cell mitochondria",
                "mitochondria is the powerhouse of the cell"
            ),
            100
        );
    }

    #[test]
    fn test_token_set_ratio_is_order_and_case_independent() {
        assert_eq!(
            token_set_ratio("Berlin Germany", "germany berlin"),
            token_set_ratio("germany berlin", "BERLIN, GERMANY")
        );
        assert_eq!(token_set_ratio("Berlin Germany", "germany berlin"), 100);
    }

    #[test]
    fn test_token_set_ratio_partial_overlap() {
        // 交集 "cell" 对 "cell wall" 的得分 8/13
        assert_eq!(token_set_ratio("cell wall", "cell membrane"), 62);
    }

    #[test]
    fn test_token_set_ratio_empty() {
        assert_eq!(token_set_ratio("", "paris"), 0);
        assert_eq!(token_set_ratio("...", "paris"), 0);
        assert_eq!(token_set_ratio("d", "paris"), 0);
    }
}
