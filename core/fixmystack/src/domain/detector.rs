//! スタック自動判定
//!
//! DETECTION_ORDER を上から評価し、最初にキーワードが含まれた行のスタックを返す。
//! スコアリングや複数一致の調停はしない。順序そのものが判定結果を決める。

use crate::domain::TechStack;

/// (スタック, いずれかを含めば一致とするキーワード) の優先順リスト。キーワードは小文字。
pub const DETECTION_ORDER: &[(TechStack, &[&str])] = &[
    (
        TechStack::React,
        &["react", "useeffect", "usestate", "jsx", "component"],
    ),
    (
        TechStack::Node,
        &["node", "npm", "module.exports", "console.log", "process.env"],
    ),
    (
        TechStack::Java,
        &["java", "system.out", "nullpointerexception", "public class", "maven"],
    ),
    (
        TechStack::Python,
        &["python", "def ", "import ", "traceback", "indentationerror"],
    ),
    (
        TechStack::Sql,
        &["sql", "select", "insert", "update", "table"],
    ),
    (
        TechStack::Docker,
        &["docker", "container", "image", "build", "volume"],
    ),
];

/// テキストからスタックを判定する（大文字小文字は無視）。どれにも当たらなければ General。
pub fn detect_tech_stack(text: &str) -> TechStack {
    let lower = text.to_lowercase();
    DETECTION_ORDER
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| lower.contains(n)))
        .map(|(stack, _)| *stack)
        .unwrap_or(TechStack::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_stack_detected_by_its_keywords() {
        assert_eq!(detect_tech_stack("useEffect cleanup ran twice"), TechStack::React);
        assert_eq!(detect_tech_stack("npm ERR! code ELIFECYCLE"), TechStack::Node);
        assert_eq!(detect_tech_stack("Exception in thread main NullPointerException"), TechStack::Java);
        assert_eq!(detect_tech_stack("Traceback (most recent call last):"), TechStack::Python);
        assert_eq!(detect_tech_stack("ERROR 1064 near 'SELECT * FORM users'"), TechStack::Sql);
        assert_eq!(detect_tech_stack("failed to pull image: manifest unknown"), TechStack::Docker);
    }

    #[test]
    fn test_no_keyword_is_general() {
        assert_eq!(detect_tech_stack("hello world"), TechStack::General);
        assert_eq!(detect_tech_stack(""), TechStack::General);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect_tech_stack("REACT"), TechStack::React);
        assert_eq!(detect_tech_stack("Docker Compose"), TechStack::Docker);
    }

    #[test]
    fn test_java_beats_python_when_both_present() {
        let text = "System.out.println(x)\ndef helper(): pass";
        assert_eq!(detect_tech_stack(text), TechStack::Java);
    }

    #[test]
    fn test_full_priority_chain() {
        // 各段のキーワードを 1 つずつ足していき、常に最上位の段が勝つことを確認する
        let layers = [
            ("volume", TechStack::Docker),
            ("table", TechStack::Sql),
            ("traceback", TechStack::Python),
            ("maven", TechStack::Java),
            ("npm", TechStack::Node),
            ("jsx", TechStack::React),
        ];
        let mut text = String::new();
        for (keyword, expected) in layers {
            text.push_str(keyword);
            text.push(' ');
            assert_eq!(detect_tech_stack(&text), expected, "text: {}", text);
        }
    }

    #[test]
    fn test_substring_overlap_is_preserved() {
        // "javascript" は Java のキーワード "java" を含むため Java に倒れる
        assert_eq!(detect_tech_stack("javascript heap out of memory"), TechStack::Java);
        // "component" は React が先に拾う
        assert_eq!(detect_tech_stack("docker component failed"), TechStack::React);
    }

    #[test]
    fn test_never_returns_unlisted_stack() {
        let samples = ["", "x", "select", "IMPORT os", "node_modules", "public class A"];
        for s in samples {
            assert!(TechStack::ALL.contains(&detect_tech_stack(s)));
        }
    }

    #[test]
    fn test_order_table_is_fixed() {
        let order: Vec<TechStack> = DETECTION_ORDER.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            order,
            vec![
                TechStack::React,
                TechStack::Node,
                TechStack::Java,
                TechStack::Python,
                TechStack::Sql,
                TechStack::Docker,
            ]
        );
    }
}
