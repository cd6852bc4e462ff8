use crate::error::ResolverError;
use crate::resolver::{AnswerLetter, MAX_OPTIONS};

/// 有序选项集合
///
/// 顺序决定字母映射（第一个为 `a`）。构造时校验数量为 1-4 且每项非空，
/// 因此解析器拿到的选项集合总是合法的。选项内容允许重复。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<String>,
}

impl OptionSet {
    /// 校验并创建选项集合
    pub fn new<S: Into<String>>(options: Vec<S>) -> Result<Self, ResolverError> {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();

        if options.is_empty() {
            return Err(ResolverError::EmptyOptions);
        }
        if options.len() > MAX_OPTIONS {
            return Err(ResolverError::TooManyOptions(options.len()));
        }
        if let Some(idx) = options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(ResolverError::BlankOption(idx));
        }

        Ok(Self { options })
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// 构造时已保证非空
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }

    /// 当前选项集合可用的字母
    pub fn letters(&self) -> &'static [AnswerLetter] {
        let all: &'static [AnswerLetter; MAX_OPTIONS] = &AnswerLetter::ALL;
        &all[..self.options.len()]
    }

    /// 字母是否落在当前选项范围内
    pub fn contains_letter(&self, letter: AnswerLetter) -> bool {
        letter.index() < self.options.len()
    }

    /// 字母对应的选项内容
    pub fn option_for(&self, letter: AnswerLetter) -> Option<&str> {
        self.get(letter.index())
    }

    /// 以 `(字母, 选项)` 形式遍历
    pub fn labeled(&self) -> impl Iterator<Item = (AnswerLetter, &str)> {
        AnswerLetter::ALL.iter().copied().zip(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_option_lists() {
        assert_eq!(
            OptionSet::new(Vec::<String>::new()),
            Err(ResolverError::EmptyOptions)
        );
        assert_eq!(
            OptionSet::new(vec!["a", "b", "c", "d", "e"]),
            Err(ResolverError::TooManyOptions(5))
        );
        assert_eq!(
            OptionSet::new(vec!["Paris", "  "]),
            Err(ResolverError::BlankOption(1))
        );
    }

    #[test]
    fn test_letters_follow_length() {
        let options = OptionSet::new(vec!["Yes", "No"]).unwrap();
        assert_eq!(options.letters(), &[AnswerLetter::A, AnswerLetter::B]);
        assert!(options.contains_letter(AnswerLetter::B));
        assert!(!options.contains_letter(AnswerLetter::C));
        assert_eq!(options.option_for(AnswerLetter::B), Some("No"));
        assert_eq!(options.option_for(AnswerLetter::D), None);
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let options = OptionSet::new(vec!["Same", "Same"]).unwrap();
        assert_eq!(options.len(), 2);
        let labeled: Vec<_> = options.labeled().collect();
        assert_eq!(
            labeled,
            vec![(AnswerLetter::A, "Same"), (AnswerLetter::B, "Same")]
        );
    }
}
