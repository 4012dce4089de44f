//! 定型回答のルール表
//!
//! (スタック, ガード, 定型回答) を優先順に並べたデータ。同じスタック内では表の上にあるルールが勝つ。
//! ルールを足すときは RULES に 1 行足すだけでよい。

use crate::domain::{AnalysisResult, TechStack};

/// 小文字化した入力に対する一致条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// すべて含む
    AllOf(&'static [&'static str]),
    /// どれか 1 つを含む
    AnyOf(&'static [&'static str]),
}

impl Guard {
    /// `lower` は呼び出し側で小文字化済みであること
    pub fn matches(&self, lower: &str) -> bool {
        match self {
            Guard::AllOf(needles) => needles.iter().all(|n| lower.contains(n)),
            Guard::AnyOf(needles) => needles.iter().any(|n| lower.contains(n)),
        }
    }
}

/// 事前に書き下した回答（静的データ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedAnswer {
    pub what_went_wrong: &'static str,
    pub root_cause: &'static str,
    pub fix_code: &'static str,
    pub prevention: &'static [&'static str],
    pub learning_insight: &'static str,
}

impl CannedAnswer {
    pub fn to_result(&self) -> AnalysisResult {
        AnalysisResult {
            what_went_wrong: self.what_went_wrong.to_string(),
            root_cause: self.root_cause.to_string(),
            fix_code: self.fix_code.to_string(),
            prevention: self.prevention.iter().map(|s| s.to_string()).collect(),
            learning_insight: self.learning_insight.to_string(),
            detected_stack: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// ログと --json 出力に載せる識別子
    pub id: &'static str,
    pub stack: TechStack,
    pub guard: Guard,
    pub answer: CannedAnswer,
}

/// 指定スタックのルールを表の順に評価し、最初に一致したものを返す
pub fn find_rule(stack: TechStack, lower: &str) -> Option<&'static Rule> {
    RULES
        .iter()
        .filter(|rule| rule.stack == stack)
        .find(|rule| rule.guard.matches(lower))
}

/// スタックごとのルール（表の順）
#[cfg(test)]
pub fn rules_for(stack: TechStack) -> impl Iterator<Item = &'static Rule> {
    RULES.iter().filter(move |rule| rule.stack == stack)
}

pub const RULES: &[Rule] = &[
    Rule {
        id: "react.map_of_undefined",
        stack: TechStack::React,
        guard: Guard::AllOf(&["map", "undefined"]),
        answer: REACT_MAP_OF_UNDEFINED,
    },
    Rule {
        id: "react.too_many_rerenders",
        stack: TechStack::React,
        guard: Guard::AnyOf(&["too many re-renders", "infinite loop"]),
        answer: REACT_TOO_MANY_RERENDERS,
    },
    Rule {
        id: "node.eaddrinuse",
        stack: TechStack::Node,
        guard: Guard::AllOf(&["eaddrinuse"]),
        answer: NODE_EADDRINUSE,
    },
    Rule {
        id: "python.indentation_error",
        stack: TechStack::Python,
        guard: Guard::AllOf(&["indentationerror"]),
        answer: PYTHON_INDENTATION_ERROR,
    },
    Rule {
        id: "sql.syntax_error",
        stack: TechStack::Sql,
        guard: Guard::AllOf(&["syntax error"]),
        answer: SQL_SYNTAX_ERROR,
    },
];

const REACT_MAP_OF_UNDEFINED: CannedAnswer = CannedAnswer {
    what_went_wrong: "You are trying to loop through a list (array) to display it, but the list doesn't exist yet.",
    root_cause: "The variable you are calling `.map()` on is `undefined`. This often happens when data is fetched asynchronously but the component renders before the data arrives.",
    fix_code: r#"// Option 1: Optional Chaining (easiest)
{items?.map(item => (
  <div key={item.id}>{item.name}</div>
))}

// Option 2: Default Value in State
const [items, setItems] = useState([]); // Initialize with empty array"#,
    prevention: &[
        "Always initialize state arrays with `[]` instead of leaving them empty.",
        "Use optional chaining `?.` when accessing properties of potentially undefined objects.",
        "Implement loading states while fetching data.",
    ],
    learning_insight: "In JavaScript, `undefined` is not an object, so it has no methods. When React tries to execute `undefined.map(...)`, the runtime throws an error because the prototype chain is broken immediately.",
};

const REACT_TOO_MANY_RERENDERS: CannedAnswer = CannedAnswer {
    what_went_wrong: "Your component is stuck in a loop where it updates itself, which causes it to update itself again, forever.",
    root_cause: "You likely called a state setter function (like `setCount`) directly inside the component body or inside an `useEffect` without proper dependencies.",
    fix_code: r#"// WRONG:
// <button onClick={handleClick()}>Click</button>

// CORRECT: Pass a function, don't call it immediately
<button onClick={() => handleClick()}>Click</button>

// OR check useEffect
useEffect(() => {
  // Logic here
}, []); // <--- Ensure dependency array is correct"#,
    prevention: &[
        "Don't invoke functions in JSX event handlers; pass the reference.",
        "Verify `useEffect` dependency arrays.",
        "Avoid setting state directly in the render body.",
    ],
    learning_insight: "React's render phase must be pure. Side effects (like setting state) should only happen in event handlers or `useEffect`. Triggering a state update during render forces an immediate re-render.",
};

const NODE_EADDRINUSE: CannedAnswer = CannedAnswer {
    what_went_wrong: "The port you are trying to start your server on is already taken by another process.",
    root_cause: "An instance of your server is likely already running in the background, or another application is using that port.",
    fix_code: r#"// Find the process using port 3000 (Mac/Linux)
lsof -i :3000
kill -9 <PID>

// Or change the port in your code
const PORT = process.env.PORT || 3001;
app.listen(PORT, () => console.log(`Server running on ${PORT}`));"#,
    prevention: &[
        "Handle `process.on('SIGTERM')` to shut down gracefully.",
        "Use tools like `nodemon` which handle restarts better.",
        "Check for orphan node processes.",
    ],
    learning_insight: "Ports are operating system resources. Only one process can bind to a specific TCP port at a time. `EADDRINUSE` stands for Error Address In Use.",
};

const PYTHON_INDENTATION_ERROR: CannedAnswer = CannedAnswer {
    what_went_wrong: "Your code is not lined up correctly.",
    root_cause: "Python relies on whitespace (indentation) to define code blocks. You likely mixed tabs and spaces or missed a level of indentation.",
    fix_code: r#"# Ensure consistent indentation (usually 4 spaces)
def my_function():
    if True:
        print("This is correct")
    else:
        print("This is also correct")"#,
    prevention: &[
        "Configure your editor to 'Insert Spaces' instead of Tabs.",
        "Use a linter like `flake8` or formatter like `black`.",
        "Enable 'Render Whitespace' in your IDE.",
    ],
    learning_insight: "Unlike C-family languages that use `{}` braces, Python uses indentation to determine scope. This enforces readability but requires strict discipline with whitespace characters.",
};

const SQL_SYNTAX_ERROR: CannedAnswer = CannedAnswer {
    what_went_wrong: "The database couldn't understand your command due to a typo or incorrect grammar.",
    root_cause: "Common causes include missing commas, mismatched quotes, or using reserved keywords as column names.",
    fix_code: r#"-- Check for reserved keywords and quote them if necessary
SELECT "order", total FROM orders;

-- Ensure string literals use single quotes
SELECT * FROM users WHERE name = 'John';"#,
    prevention: &[
        "Use an IDE with SQL highlighting.",
        "Avoid using reserved words (like `ORDER`, `User`, `Table`) for custom names.",
        "Always test complex queries in isolation.",
    ],
    learning_insight: "SQL engines parse queries in specific orders (FROM -> WHERE -> SELECT). A syntax error usually means the parser failed to tokenize the string into a valid command tree.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_all_of_needs_every_needle() {
        let g = Guard::AllOf(&["map", "undefined"]);
        assert!(g.matches("cannot read property 'map' of undefined"));
        assert!(!g.matches("cannot read property 'map' of null"));
    }

    #[test]
    fn test_guard_any_of_needs_one_needle() {
        let g = Guard::AnyOf(&["too many re-renders", "infinite loop"]);
        assert!(g.matches("error: too many re-renders. react limits"));
        assert!(g.matches("stuck in an infinite loop"));
        assert!(!g.matches("maximum update depth exceeded"));
    }

    #[test]
    fn test_react_first_rule_wins_when_both_match() {
        let lower = "too many re-renders while calling map on undefined";
        let rule = find_rule(TechStack::React, lower).unwrap();
        assert_eq!(rule.id, "react.map_of_undefined");
    }

    #[test]
    fn test_rules_are_scoped_to_their_stack() {
        // EADDRINUSE を含んでも React のルールには当たらない
        assert!(find_rule(TechStack::React, "listen eaddrinuse :::3000").is_none());
        assert!(find_rule(TechStack::Node, "listen eaddrinuse :::3000").is_some());
    }

    #[test]
    fn test_rule_counts_per_stack() {
        let count = |s| rules_for(s).count();
        assert_eq!(count(TechStack::React), 2);
        assert_eq!(count(TechStack::Node), 1);
        assert_eq!(count(TechStack::Python), 1);
        assert_eq!(count(TechStack::Sql), 1);
        assert_eq!(count(TechStack::Java), 0);
        assert_eq!(count(TechStack::Docker), 0);
        assert_eq!(count(TechStack::General), 0);
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let mut ids: Vec<&str> = RULES.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), RULES.len());
    }

    #[test]
    fn test_needles_are_lowercase() {
        for rule in RULES {
            let needles = match rule.guard {
                Guard::AllOf(n) | Guard::AnyOf(n) => n,
            };
            for n in needles {
                assert_eq!(*n, n.to_lowercase(), "rule {} needle {}", rule.id, n);
            }
        }
    }

    #[test]
    fn test_every_answer_has_three_prevention_tips() {
        for rule in RULES {
            assert_eq!(rule.answer.prevention.len(), 3, "rule {}", rule.id);
        }
    }
}
