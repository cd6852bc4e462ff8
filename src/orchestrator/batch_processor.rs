//! 批量题组处理器 - 编排层
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、初始化日志文件
//! 2. **批量加载**：扫描并加载所有待处理的题组（`Vec<QuestionSet>`）
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：每批完成后再开始下一批
//! 5. **结果汇总**：写 JSON 报告并输出全局统计

use crate::config::Config;
use crate::models::QuestionSet;
use crate::orchestrator::set_processor::process_question_set;
use crate::services::{ReportWriter, SetReport};
use crate::utils::logging::{
    init_log_file, log_batch_complete, log_batch_start, log_sets_loaded, log_startup,
    print_final_stats,
};
use crate::workflow::QuestionFlow;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: Arc<QuestionFlow>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        init_log_file(&config.output_log_file)?;
        log_startup(config.max_concurrent_sets, config.fuzzy_threshold);

        if config.llm_api_key.trim().is_empty() {
            warn!("⚠️ 未配置 LLM_API_KEY，只能解析已记录响应的题目");
        }

        let flow = Arc::new(QuestionFlow::new(&config));
        Ok(Self { config, flow })
    }

    /// 运行应用主逻辑，返回每个题组的报告
    pub async fn run(&self) -> Result<Vec<SetReport>> {
        info!("\n📁 正在扫描待处理的题组...");
        let all_sets = crate::models::load_all_toml_files(&self.config.question_folder).await?;

        if all_sets.is_empty() {
            warn!("⚠️ 没有找到待处理的TOML文件，程序结束");
            return Ok(Vec::new());
        }

        log_sets_loaded(all_sets.len(), self.config.max_concurrent_sets);

        let reports = self.process_all_sets(all_sets).await?;

        ReportWriter::new(self.config.report_file.clone()).write(&reports)?;

        let (answered, skipped, failed) = reports.iter().fold((0, 0, 0), |acc, r| {
            (acc.0 + r.answered, acc.1 + r.skipped, acc.2 + r.failed)
        });
        print_final_stats(answered, skipped, failed, &self.config.output_log_file);

        Ok(reports)
    }

    /// 分批处理所有题组，报告顺序与加载顺序一致
    async fn process_all_sets(&self, all_sets: Vec<QuestionSet>) -> Result<Vec<SetReport>> {
        let batch_size = self.config.max_concurrent_sets;
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total_sets = all_sets.len();
        let total_batches = total_sets.div_ceil(batch_size);
        let mut reports = Vec::with_capacity(total_sets);

        for (batch_idx, batch) in all_sets.chunks(batch_size).enumerate() {
            let batch_start = batch_idx * batch_size;
            log_batch_start(
                batch_idx + 1,
                total_batches,
                batch_start + 1,
                batch_start + batch.len(),
                total_sets,
            );

            let batch_reports = self.process_batch(batch, batch_start, semaphore.clone()).await?;

            let answered: usize = batch_reports.iter().map(|r| r.answered).sum();
            let questions: usize = batch_reports.iter().map(|r| r.answers.len()).sum();
            log_batch_complete(batch_idx + 1, answered, questions);

            reports.extend(batch_reports);
        }

        Ok(reports)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch: &[QuestionSet],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<Vec<SetReport>> {
        let mut handles = Vec::with_capacity(batch.len());

        for (idx, set) in batch.iter().enumerate() {
            let set_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;
            let flow = Arc::clone(&self.flow);
            let task_set = set.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                process_question_set(&flow, task_set, set_index).await
            });
            handles.push(((set_index, set), handle));
        }

        // 等待本批所有任务完成
        let (meta, joins): (Vec<_>, Vec<_>) = handles.into_iter().unzip();
        let results = futures::future::join_all(joins).await;

        let mut reports = Vec::with_capacity(meta.len());
        for ((set_index, set), joined) in meta.into_iter().zip(results) {
            match joined {
                Ok(report) => reports.push(report),
                Err(e) => {
                    error!(
                        "[题组 {}] 任务执行失败: {}，{} 道题记为失败",
                        set_index,
                        e,
                        set.questions.len()
                    );
                    reports.push(SetReport::aborted(set, &e.to_string()));
                }
            }
        }

        Ok(reports)
    }
}
