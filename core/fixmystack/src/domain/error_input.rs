//! 解析対象のテキスト（貼り付け・ファイル抽出の結果）

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInput(String);

impl ErrorInput {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// 空または空白のみ（解析を始めない）
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::ops::Deref for ErrorInput {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ErrorInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(ErrorInput::new("").is_blank());
        assert!(ErrorInput::new(" \n\t ").is_blank());
        assert!(!ErrorInput::new(" x ").is_blank());
    }
}
