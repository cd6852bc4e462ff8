use serde::{Deserialize, Serialize};
use std::fmt;

/// 选项字母，`A` 对应第一个选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    /// 按顺序排列的全部字母
    pub const ALL: [AnswerLetter; 4] = [
        AnswerLetter::A,
        AnswerLetter::B,
        AnswerLetter::C,
        AnswerLetter::D,
    ];

    /// 由选项索引（0-based）得到字母
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 字母对应的选项索引（0-based）
    pub fn index(self) -> usize {
        self as usize
    }

    /// 小写字符形式
    pub fn as_char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// 由字符解析，大小写均可
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(AnswerLetter::A),
            'b' => Some(AnswerLetter::B),
            'c' => Some(AnswerLetter::C),
            'd' => Some(AnswerLetter::D),
            _ => None,
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_char_agree() {
        for (i, letter) in AnswerLetter::ALL.iter().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(AnswerLetter::from_index(i), Some(*letter));
            assert_eq!(AnswerLetter::from_char(letter.as_char()), Some(*letter));
        }
        assert_eq!(AnswerLetter::from_index(4), None);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(AnswerLetter::from_char('C'), Some(AnswerLetter::C));
        assert_eq!(AnswerLetter::from_char('e'), None);
        assert_eq!(AnswerLetter::from_char('1'), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&AnswerLetter::B).unwrap();
        assert_eq!(json, "\"b\"");
        assert_eq!(AnswerLetter::D.to_string(), "d");
    }
}
