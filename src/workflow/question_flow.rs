//! 题目处理流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 校验选项（非法输入直接返回错误）
//! 2. 取已记录的响应，没有则询问 LLM
//! 3. 解析答案字母
//! 4. 无法确定时写入 warn.txt（兜底）

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::Question;
use crate::resolver::{Resolution, Resolver};
use crate::services::{AnswerRecord, LlmService, WarnWriter};
use crate::utils::truncate_text;
use crate::workflow::question_ctx::QuestionCtx;

/// 题目处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 解析出答案
    Answered(AnswerRecord),
    /// 跳过（无法确定答案）
    Skipped(AnswerRecord),
}

impl ProcessResult {
    pub fn record(&self) -> &AnswerRecord {
        match self {
            ProcessResult::Answered(record) | ProcessResult::Skipped(record) => record,
        }
    }

    pub fn into_record(self) -> AnswerRecord {
        match self {
            ProcessResult::Answered(record) | ProcessResult::Skipped(record) => record,
        }
    }
}

/// 题目处理流程
///
/// - 编排单道题的处理流程
/// - 不持有跨题状态，可在题组之间复用
pub struct QuestionFlow {
    resolver: Resolver,
    llm_service: LlmService,
    warn_writer: WarnWriter,
    verbose_logging: bool,
}

impl QuestionFlow {
    /// 创建新的题目处理流程
    pub fn new(config: &Config) -> Self {
        Self {
            resolver: Resolver::new(config.fuzzy_threshold),
            llm_service: LlmService::new(config),
            warn_writer: WarnWriter::with_path(config.warn_file.clone()),
            verbose_logging: config.verbose_logging,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub async fn run(&self, question: &Question, ctx: &QuestionCtx) -> Result<ProcessResult> {
        let stem = &question.stem;
        self.log_stem(ctx, stem);

        let options = question
            .option_set()
            .with_context(|| format!("{} 选项不合法", ctx))?;

        let raw_response = match &question.response {
            Some(recorded) => {
                info!("{} 📄 使用已记录的响应", ctx);
                recorded.clone()
            }
            None => {
                info!("{} 🤖 正在询问 LLM...", ctx);
                self.llm_service.ask_for_answer(stem, &options).await
            }
        };

        let resolution = self.resolver.resolve(&options, &raw_response);
        let record = AnswerRecord::from_resolution(ctx.question_index, stem.clone(), &resolution);

        match resolution {
            Resolution::Resolved {
                letter,
                strategy,
                score,
            } => {
                info!(
                    "{} ✓ 答案: {} ({}{})",
                    ctx,
                    letter,
                    strategy,
                    score.map(|s| format!(", 分值 {}", s)).unwrap_or_default()
                );
                Ok(ProcessResult::Answered(record))
            }
            Resolution::Unresolved { best_score } => {
                warn!(
                    "{} ⚠️ 无法确定答案 (响应: {:?}, 模糊匹配最高分: {:?}, 阈值: {})",
                    ctx,
                    truncate_text(&raw_response, 50),
                    best_score,
                    self.resolver.fuzzy_threshold()
                );
                if let Err(e) = self
                    .warn_writer
                    .write(&ctx.set_name, ctx.question_index, stem)
                    .await
                {
                    warn!("{} 写入 {} 失败: {:#}", ctx, self.warn_writer.path(), e);
                }
                Ok(ProcessResult::Skipped(record))
            }
        }
    }

    fn log_stem(&self, ctx: &QuestionCtx, stem: &str) {
        if self.verbose_logging {
            info!("{} 题干: {}", ctx, stem);
        } else {
            info!("{} 题干: {}", ctx, truncate_text(stem, 50));
        }
    }
}
