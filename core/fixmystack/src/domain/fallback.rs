//! ルールに当たらなかったときの汎用回答

use crate::domain::{AnalysisResult, ExplainLevel, TechStack};

const FALLBACK_FIX_CODE: &str = r#"// 1. Check your logs for the specific line number.
// 2. Wrap the suspicious code in a try-catch block (if applicable)

try {
  // Your code here
} catch (error) {
  console.error("Caught error:", error);
}

// 3. Verify environment variables and imports."#;

const FALLBACK_PREVENTION: [&str; 3] = [
    "Implement robust error handling.",
    "Add logging to trace execution flow.",
    "Review recent code changes.",
];

const INSIGHT_PREFIX: &str =
    "Debugging is the process of removing bugs. Programming is the process of putting them in.";
pub const BEGINNER_CLOSING: &str =
    "Start by reading the error message carefully - it usually tells you exactly where to look.";
pub const ADVANCED_CLOSING: &str =
    "Analyze the stack trace from top to bottom to identify the first line of your own code involved.";

/// スタック名を埋め込んだ汎用回答。締めの一文だけ説明レベルで変わる。
pub fn fallback_answer(stack: TechStack, level: ExplainLevel) -> AnalysisResult {
    let name = stack.display_name();
    let closing = match level {
        ExplainLevel::Beginner => BEGINNER_CLOSING,
        ExplainLevel::Intermediate | ExplainLevel::Pro => ADVANCED_CLOSING,
    };
    AnalysisResult {
        what_went_wrong: format!(
            "It looks like a runtime error or configuration issue in your {} application.",
            name
        ),
        root_cause: format!(
            "Based on the input, this seems to be an unhandled exception or a misconfiguration in your {} environment.",
            name
        ),
        fix_code: FALLBACK_FIX_CODE.to_string(),
        prevention: FALLBACK_PREVENTION.iter().map(|s| s.to_string()).collect(),
        learning_insight: format!("{} {}", INSIGHT_PREFIX, closing),
        detected_stack: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_stack_name_for_every_stack() {
        for stack in TechStack::ALL {
            let r = fallback_answer(stack, ExplainLevel::Intermediate);
            assert!(r.what_went_wrong.contains(stack.display_name()));
            assert!(r.root_cause.contains(stack.display_name()));
        }
    }

    #[test]
    fn test_closing_depends_on_level() {
        let beginner = fallback_answer(TechStack::Java, ExplainLevel::Beginner);
        let intermediate = fallback_answer(TechStack::Java, ExplainLevel::Intermediate);
        let pro = fallback_answer(TechStack::Java, ExplainLevel::Pro);

        assert!(beginner.learning_insight.ends_with(BEGINNER_CLOSING));
        assert!(intermediate.learning_insight.ends_with(ADVANCED_CLOSING));
        assert_eq!(intermediate.learning_insight, pro.learning_insight);
        assert_ne!(beginner.learning_insight, pro.learning_insight);
    }

    #[test]
    fn test_generic_template_parts() {
        let r = fallback_answer(TechStack::Docker, ExplainLevel::Pro);
        assert!(r.fix_code.contains("try {"));
        assert!(r.fix_code.contains("catch (error)"));
        assert_eq!(r.prevention.len(), 3);
        assert!(r.detected_stack.is_none());
    }
}
