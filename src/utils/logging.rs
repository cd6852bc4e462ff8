//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use anyhow::{Context, Result};
use std::fs;
use tracing::info;

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n答案解析日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .with_context(|| format!("无法写入日志文件: {}", log_file_path))?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `max_concurrent`: 最大并发数
/// - `fuzzy_threshold`: 模糊匹配阈值
pub fn log_startup(max_concurrent: usize, fuzzy_threshold: u8) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量答案解析模式");
    info!("📊 最大并发数: {}", max_concurrent);
    info!("🎯 模糊匹配阈值: {}", fuzzy_threshold);
    info!("{}", "=".repeat(60));
}

/// 记录题组加载信息
pub fn log_sets_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待处理的题组", total);
    info!("📋 将以每批 {} 个的方式处理", max_concurrent);
}

/// 记录批次开始信息
///
/// # 参数
/// - `batch_num`: 批次编号
/// - `total_batches`: 批次总数
/// - `start`: 起始题组编号
/// - `end`: 结束题组编号
/// - `total`: 题组总数
pub fn log_batch_start(
    batch_num: usize,
    total_batches: usize,
    start: usize,
    end: usize,
    total: usize,
) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 批", batch_num, total_batches);
    info!("📄 本批题组: {}-{} / 共 {} 个", start, end, total);
    info!("{}", "=".repeat(60));
}

/// 记录批次完成信息
pub fn log_batch_complete(batch_num: usize, answered: usize, total: usize) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 第 {} 批完成: 解析成功 {}/{}", batch_num, answered, total);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `answered`: 解析成功的题目数
/// - `skipped`: 无法确定答案的题目数
/// - `failed`: 输入非法或处理出错的题目数
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(answered: usize, skipped: usize, failed: usize, log_file_path: &str) {
    let total = answered + skipped + failed;
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 解析成功: {}/{}", answered, total);
    info!("⏭️ 跳过: {}", skipped);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}
