//! 单个题组处理器 - 编排层
//!
//! 遍历题组中的全部题目，委托 `QuestionFlow` 处理，汇总为 `SetReport`

use tracing::{error, info};

use crate::models::QuestionSet;
use crate::services::{AnswerRecord, SetReport};
use crate::workflow::{ProcessResult, QuestionCtx, QuestionFlow};

/// 处理单个题组
///
/// 单题出错（如选项非法）只计入 `failed`，不会中断整个题组
pub async fn process_question_set(
    flow: &QuestionFlow,
    set: QuestionSet,
    set_index: usize,
) -> SetReport {
    log_set_start(set_index, &set.name, set.questions.len());

    let mut report = SetReport {
        name: set.name.clone(),
        ..Default::default()
    };

    for (index, question) in set.questions.iter().enumerate() {
        let ctx = QuestionCtx::new(set.name.clone(), set_index, index + 1);

        match flow.run(question, &ctx).await {
            Ok(ProcessResult::Answered(record)) => {
                report.answered += 1;
                report.answers.push(record);
            }
            Ok(ProcessResult::Skipped(record)) => {
                report.skipped += 1;
                report.answers.push(record);
            }
            Err(e) => {
                error!("{} 题目处理失败: {:#}", ctx, e);
                report.failed += 1;
                report.answers.push(AnswerRecord::failed(
                    ctx.question_index,
                    question.stem.clone(),
                    format!("{:#}", e),
                ));
            }
        }
    }

    log_set_complete(set_index, &report);
    report
}

// ========== 日志辅助函数 ==========

fn log_set_start(set_index: usize, name: &str, question_count: usize) {
    info!("[题组 {}] 开始处理: {}", set_index, name);
    info!("[题组 {}] 题目总数: {}", set_index, question_count);
}

fn log_set_complete(set_index: usize, report: &SetReport) {
    info!(
        "[题组 {}] 题目统计: 成功 {}, 跳过 {}, 失败 {}",
        set_index, report.answered, report.skipped, report.failed
    );
    info!("[题组 {}] ✅ 题组处理完成", set_index);
}
