//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量题组处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载题组（Vec<QuestionSet>）
//! - 控制并发数量（Semaphore）
//! - 写结果报告、输出全局统计信息
//!
//! ### `set_processor` - 单个题组处理器
//! - 遍历单个题组的所有题目（Vec<Question>）
//! - 复用 QuestionFlow
//! - 输出单个题组的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<QuestionSet>)
//!     ↓
//! set_processor (处理 Vec<Question>)
//!     ↓
//! workflow::QuestionFlow (处理单个 Question)
//!     ↓
//! services + resolver (能力层：llm / warn / report / 解析)
//! ```

pub mod batch_processor;
pub mod set_processor;

// 重新导出主要类型
pub use batch_processor::App;
pub use set_processor::process_question_set;
