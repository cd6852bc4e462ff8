pub mod loaders;
pub mod question;

pub use loaders::{load_all_toml_files, load_toml_to_question_set};
pub use question::{Question, QuestionSet};
