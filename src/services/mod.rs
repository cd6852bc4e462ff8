pub mod llm_service;
pub mod report_writer;
pub mod warn_writer;

pub use llm_service::LlmService;
pub use report_writer::{AnswerRecord, ReportWriter, SetReport};
pub use warn_writer::WarnWriter;
