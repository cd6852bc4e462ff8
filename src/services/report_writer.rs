//! 结果报告服务 - 业务能力层
//!
//! 把每个题组的解析结果写成 JSON 报告

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use tracing::info;

use crate::models::QuestionSet;
use crate::resolver::{AnswerLetter, MatchStrategy, Resolution};

/// 单题解析记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    /// 题目索引（从 1 开始）
    pub index: usize,
    pub stem: String,
    pub letter: Option<AnswerLetter>,
    pub strategy: Option<MatchStrategy>,
    /// 模糊匹配分值（命中或未命中时的最高分）
    pub score: Option<u8>,
    /// 输入非法或处理出错时的错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnswerRecord {
    pub fn from_resolution(index: usize, stem: impl Into<String>, resolution: &Resolution) -> Self {
        let score = match resolution {
            Resolution::Resolved { score, .. } => *score,
            Resolution::Unresolved { best_score } => *best_score,
        };
        Self {
            index,
            stem: stem.into(),
            letter: resolution.letter(),
            strategy: resolution.strategy(),
            score,
            error: None,
        }
    }

    pub fn failed(index: usize, stem: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            index,
            stem: stem.into(),
            letter: None,
            strategy: None,
            score: None,
            error: Some(error.into()),
        }
    }
}

/// 单个题组的解析报告
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetReport {
    pub name: String,
    pub answered: usize,
    pub skipped: usize,
    pub failed: usize,
    pub answers: Vec<AnswerRecord>,
}

impl SetReport {
    /// 整个题组的任务异常退出时，题组内每道题都记为失败
    pub fn aborted(set: &QuestionSet, error: &str) -> Self {
        let answers: Vec<AnswerRecord> = set
            .questions
            .iter()
            .enumerate()
            .map(|(idx, q)| AnswerRecord::failed(idx + 1, q.stem.clone(), error))
            .collect();
        Self {
            name: set.name.clone(),
            failed: answers.len(),
            answers,
            ..Default::default()
        }
    }
}

/// 报告写入服务
pub struct ReportWriter {
    report_file_path: String,
}

impl ReportWriter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            report_file_path: path.into(),
        }
    }

    /// 写入全部题组报告（覆盖已有文件）
    pub fn write(&self, reports: &[SetReport]) -> Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        fs::write(&self.report_file_path, json)
            .with_context(|| format!("无法写入报告文件: {}", self.report_file_path))?;
        info!("📝 结果报告已写入: {}", self.report_file_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    #[test]
    fn test_record_from_resolution() {
        let resolved = Resolution::Resolved {
            letter: AnswerLetter::C,
            strategy: MatchStrategy::Fuzzy,
            score: Some(91),
        };
        let record = AnswerRecord::from_resolution(2, "stem", &resolved);
        assert_eq!(record.letter, Some(AnswerLetter::C));
        assert_eq!(record.strategy, Some(MatchStrategy::Fuzzy));
        assert_eq!(record.score, Some(91));

        let unresolved = Resolution::Unresolved { best_score: Some(40) };
        let record = AnswerRecord::from_resolution(3, "stem", &unresolved);
        assert_eq!(record.letter, None);
        assert_eq!(record.score, Some(40));
    }

    #[test]
    fn test_aborted_set_counts_every_question_as_failed() {
        let set = QuestionSet {
            name: "Broken".to_string(),
            questions: vec![
                Question {
                    stem: "Q1".to_string(),
                    ..Default::default()
                },
                Question {
                    stem: "Q2".to_string(),
                    ..Default::default()
                },
            ],
            file_path: None,
        };

        let report = SetReport::aborted(&set, "task panicked");
        assert_eq!(report.name, "Broken");
        assert_eq!((report.answered, report.skipped, report.failed), (0, 0, 2));
        assert_eq!(report.answers[1].index, 2);
        assert_eq!(report.answers[1].error.as_deref(), Some("task panicked"));
    }

    #[test]
    fn test_write_report_json() {
        let path = std::env::temp_dir().join(format!("answer_resolver_report_{}.json", std::process::id()));
        let report = SetReport {
            name: "Capitals".to_string(),
            answered: 1,
            answers: vec![AnswerRecord::from_resolution(
                1,
                "What is the capital of France?",
                &Resolution::Resolved {
                    letter: AnswerLetter::A,
                    strategy: MatchStrategy::Strict,
                    score: None,
                },
            )],
            ..Default::default()
        };

        ReportWriter::new(path.to_string_lossy().to_string())
            .write(&[report])
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["name"], "Capitals");
        assert_eq!(value[0]["answers"][0]["letter"], "a");
        assert_eq!(value[0]["answers"][0]["strategy"], "strict");
        assert!(value[0]["answers"][0].get("error").is_none());
        let _ = std::fs::remove_file(&path);
    }
}
