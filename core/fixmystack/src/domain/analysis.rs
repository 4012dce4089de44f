//! 解析結果（不変の値オブジェクト）

use crate::domain::TechStack;
use serde::{Deserialize, Serialize};

/// 1 回の解析で返す結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 何が起きたか（短い診断）
    pub what_went_wrong: String,
    pub root_cause: String,
    /// 修正スニペット（コードを含むプレーンテキスト）
    pub fix_code: String,
    /// 再発防止のヒント（順序あり）
    pub prevention: Vec<String>,
    pub learning_insight: String,
    /// 自動判定を行ったときだけ入る
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_stack: Option<TechStack>,
}

impl AnalysisResult {
    pub fn with_detected_stack(mut self, stack: Option<TechStack>) -> Self {
        self.detected_stack = stack;
        self
    }
}
