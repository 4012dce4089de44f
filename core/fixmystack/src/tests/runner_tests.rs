//! Runner（main のディスパッチ）のテスト

use std::sync::Arc;

use crate::domain::{ErrorInput, ExplainLevel, FixCommand, InputSource, StackSelection, TechStack};
use crate::ports::inbound::UseCaseRunner;
use crate::ports::outbound::Settings;
use crate::wiring::App;
use crate::Runner;

use super::support::{Harness, InMemoryHistoryRepository, RecordingLog};

fn runner(h: Harness, settings: Settings) -> (Runner, Arc<InMemoryHistoryRepository>, Arc<RecordingLog>) {
    let Harness {
        repo,
        log,
        analyze,
        history,
        ..
    } = h;
    let app = App {
        logger: log.clone(),
        settings,
        analyze,
        history,
    };
    (Runner { app }, repo, log)
}

#[test]
fn test_analyze_uses_settings_defaults() {
    let settings = Settings {
        delay_ms: 0,
        default_stack: StackSelection::Explicit(TechStack::Sql),
        default_level: ExplainLevel::Pro,
    };
    let (runner, repo, _log) = runner(Harness::new(), settings);
    let code = runner
        .run(FixCommand::Analyze {
            source: InputSource::Text("something odd".to_string()),
            stack: None,
            level: None,
            json: true,
        })
        .unwrap();
    assert_eq!(code, 0);

    let stored = repo.snapshot();
    assert_eq!(stored.records()[0].stack, TechStack::Sql);
    assert_eq!(stored.records()[0].level, ExplainLevel::Pro);
}

#[test]
fn test_blank_text_is_usage_error() {
    let (runner, repo, _log) = runner(Harness::new(), Settings::default());
    let err = runner
        .run(FixCommand::Analyze {
            source: InputSource::Text(String::new()),
            stack: None,
            level: None,
            json: false,
        })
        .unwrap_err();
    assert_eq!(err.exit_code(), 64);
    assert!(repo.snapshot().is_empty());
}

#[test]
fn test_show_unknown_id_exits_not_found_and_logs() {
    let (runner, _repo, log) = runner(Harness::new(), Settings::default());
    let err = runner
        .run(FixCommand::ShowHistory {
            id: "missing".to_string(),
            json: false,
        })
        .unwrap_err();
    assert_eq!(err.exit_code(), 66);
    let messages = log.messages();
    assert!(messages.contains(&"command started".to_string()));
    assert!(messages.contains(&"command finished".to_string()));
}

#[test]
fn test_clear_history_command() {
    let h = Harness::new();
    h.analyze
        .analyze(&ErrorInput::new("boom"), StackSelection::Auto, ExplainLevel::Beginner)
        .unwrap();
    let (runner, repo, _log) = runner(h, Settings::default());
    assert_eq!(runner.run(FixCommand::ClearHistory).unwrap(), 0);
    assert!(repo.snapshot().is_empty());
}
