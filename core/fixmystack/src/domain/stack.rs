//! 技術スタック（解析カテゴリ）
//!
//! 自動判定の番兵は StackSelection::Auto にしか存在しない。
//! TechStack は解決済みの 7 種だけを表すので、履歴レコードに Auto が入ることはない。

use common::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 解決済みの技術スタック
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechStack {
    React,
    #[serde(rename = "Node.js")]
    Node,
    Java,
    Python,
    #[serde(rename = "SQL")]
    Sql,
    Docker,
    General,
}

impl TechStack {
    pub const ALL: [TechStack; 7] = [
        TechStack::React,
        TechStack::Node,
        TechStack::Java,
        TechStack::Python,
        TechStack::Sql,
        TechStack::Docker,
        TechStack::General,
    ];

    /// 表示名（フォールバック文面にも埋め込まれる）
    pub fn display_name(&self) -> &'static str {
        match self {
            TechStack::React => "React",
            TechStack::Node => "Node.js",
            TechStack::Java => "Java",
            TechStack::Python => "Python",
            TechStack::Sql => "SQL",
            TechStack::Docker => "Docker",
            TechStack::General => "General",
        }
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TechStack {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "react" => Ok(TechStack::React),
            "node" | "node.js" | "nodejs" => Ok(TechStack::Node),
            "java" => Ok(TechStack::Java),
            "python" => Ok(TechStack::Python),
            "sql" => Ok(TechStack::Sql),
            "docker" => Ok(TechStack::Docker),
            "general" => Ok(TechStack::General),
            other => Err(Error::invalid_argument(format!(
                "Unknown stack '{}'. Expected one of: auto, react, node, java, python, sql, docker, general",
                other
            ))),
        }
    }
}

/// リクエスト時のスタック指定（自動判定 or 明示）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackSelection {
    #[default]
    Auto,
    Explicit(TechStack),
}

impl StackSelection {
    pub fn display_name(&self) -> &'static str {
        match self {
            StackSelection::Auto => "Auto-Detect",
            StackSelection::Explicit(stack) => stack.display_name(),
        }
    }
}

impl From<TechStack> for StackSelection {
    fn from(stack: TechStack) -> Self {
        StackSelection::Explicit(stack)
    }
}

impl fmt::Display for StackSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for StackSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "auto-detect" | "autodetect" => Ok(StackSelection::Auto),
            _ => s.parse::<TechStack>().map(StackSelection::Explicit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        let names: Vec<&str> = TechStack::ALL.iter().map(|s| s.display_name()).collect();
        assert_eq!(
            names,
            vec!["React", "Node.js", "Java", "Python", "SQL", "Docker", "General"]
        );
        assert_eq!(StackSelection::Auto.to_string(), "Auto-Detect");
    }

    #[test]
    fn test_parse_selection_aliases() {
        assert_eq!("auto".parse::<StackSelection>().unwrap(), StackSelection::Auto);
        assert_eq!("Auto-Detect".parse::<StackSelection>().unwrap(), StackSelection::Auto);
        assert_eq!(
            "Node.js".parse::<StackSelection>().unwrap(),
            StackSelection::Explicit(TechStack::Node)
        );
        assert_eq!(
            " SQL ".parse::<StackSelection>().unwrap(),
            StackSelection::Explicit(TechStack::Sql)
        );
    }

    #[test]
    fn test_parse_unknown_is_usage_error() {
        let err = "cobol".parse::<StackSelection>().unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn test_serde_uses_display_names() {
        assert_eq!(serde_json::to_string(&TechStack::Node).unwrap(), "\"Node.js\"");
        assert_eq!(serde_json::to_string(&TechStack::Sql).unwrap(), "\"SQL\"");
        let back: TechStack = serde_json::from_str("\"Docker\"").unwrap();
        assert_eq!(back, TechStack::Docker);
    }
}
