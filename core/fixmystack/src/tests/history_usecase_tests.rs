//! HistoryUseCase のテスト（一覧・再表示・全消去）

use super::support::Harness;
use crate::domain::{ErrorInput, ExplainLevel, StackSelection};

fn seed(h: &Harness, texts: &[&str]) {
    for t in texts {
        h.analyze
            .analyze(&ErrorInput::new(*t), StackSelection::Auto, ExplainLevel::Beginner)
            .unwrap();
    }
}

#[test]
fn test_list_is_newest_first() {
    let h = Harness::new();
    seed(&h, &["useEffect loop", "docker build failed", "select * from"]);
    let list = h.history.list().unwrap();
    let inputs: Vec<&str> = list.iter().map(|r| r.error_input.as_str()).collect();
    assert_eq!(inputs, vec!["select * from", "docker build failed", "useEffect loop"]);
}

#[test]
fn test_get_reopens_identical_record() {
    let h = Harness::new();
    seed(&h, &["Too many re-renders"]);
    let original = h.history.list().unwrap().remove(0);
    let reopened = h.history.get(&original.id).unwrap();
    assert_eq!(reopened, original);
}

#[test]
fn test_get_unknown_id_is_not_found() {
    let h = Harness::new();
    let err = h.history.get("nope").unwrap_err();
    assert_eq!(err.exit_code(), 66);
}

#[test]
fn test_clear_removes_everything() {
    let h = Harness::new();
    seed(&h, &["a", "b", "c"]);
    assert_eq!(h.history.clear().unwrap(), 3);
    assert!(h.history.list().unwrap().is_empty());
    assert_eq!(h.history.clear().unwrap(), 0);
}
