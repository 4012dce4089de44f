//! 回答の選択（スタック解決 → ルール表 → フォールバック）
//!
//! 純粋関数。同じ引数なら常に同じ結果を返す。

use crate::domain::detector::detect_tech_stack;
use crate::domain::fallback::fallback_answer;
use crate::domain::rules::find_rule;
use crate::domain::{AnalysisResult, ExplainLevel, StackSelection, TechStack};

/// 選択の結果（どのスタックで、どのルールが当たったか）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub stack: TechStack,
    /// 当たったルールの id。フォールバックなら None
    pub rule_id: Option<&'static str>,
    pub result: AnalysisResult,
}

/// Auto なら判定したスタックを `detected_stack` に載せる。明示指定なら載せない。
pub fn select_answer(text: &str, selection: StackSelection, level: ExplainLevel) -> Selection {
    let (stack, detected) = match selection {
        StackSelection::Auto => {
            let stack = detect_tech_stack(text);
            (stack, Some(stack))
        }
        StackSelection::Explicit(stack) => (stack, None),
    };

    let lower = text.to_lowercase();
    let (rule_id, result) = match find_rule(stack, &lower) {
        Some(rule) => (Some(rule.id), rule.answer.to_result()),
        None => (None, fallback_answer(stack, level)),
    };

    Selection {
        stack,
        rule_id,
        result: result.with_detected_stack(detected),
    }
}
