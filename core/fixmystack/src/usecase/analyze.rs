//! 解析ユースケース
//!
//! 空入力の拒否 → 固定待ち → 回答選択 → 履歴レコード作成・保存 の 1 往復。
//! 途中状態もリトライもない。

use crate::domain::{
    select_answer, ErrorInput, ExplainLevel, HistoryRecord, StackSelection,
};
use crate::ports::outbound::{AnalysisDelay, HistoryRepository, TextExtractor};
use common::error::Error;
use common::ports::outbound::{Clock, IdGenerator, Log, LogLevel, LogRecord};
use std::path::Path;
use std::sync::Arc;

pub struct AnalyzeDeps {
    pub delay: Arc<dyn AnalysisDelay>,
    pub extractor: Arc<dyn TextExtractor>,
    pub history: Arc<dyn HistoryRepository>,
    pub id_gen: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
    pub log: Arc<dyn Log>,
}

/// 解析 1 回分の結果
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub record: HistoryRecord,
    /// 当たったルール id（フォールバックなら None）
    pub rule_id: Option<&'static str>,
    /// 履歴への保存に成功したか
    pub saved: bool,
}

pub struct AnalyzeUseCase {
    deps: AnalyzeDeps,
}

impl AnalyzeUseCase {
    pub fn new(deps: AnalyzeDeps) -> Self {
        Self { deps }
    }

    /// テキストを解析し、履歴に記録して返す。
    ///
    /// 空入力は Error::InvalidArgument（何も保存しない）。
    /// 履歴の保存失敗は warn ログに残すだけで、解析結果は返す。
    pub fn analyze(
        &self,
        input: &ErrorInput,
        selection: StackSelection,
        level: ExplainLevel,
    ) -> Result<AnalysisOutcome, Error> {
        if input.is_blank() {
            return Err(Error::invalid_argument(
                "No error text provided. Pass the message as arguments, '-' for stdin, or --file <path>.",
            ));
        }

        let _ = self.deps.log.log(
            &LogRecord::new(LogLevel::Info, "analysis started")
                .layer("usecase")
                .kind("analysis")
                .field("requested_stack", selection.display_name())
                .field("level", level.display_name())
                .field("input_len", input.len()),
        );

        self.deps.delay.wait();

        let selection = select_answer(input, selection, level);
        let record = HistoryRecord {
            id: self.deps.id_gen.next_id(),
            timestamp: self.deps.clock.now_ms(),
            error_input: input.to_string(),
            stack: selection.stack,
            level,
            result: selection.result,
        };

        let saved = match self.store(&record) {
            Ok(()) => true,
            Err(e) => {
                let _ = self.deps.log.log(
                    &LogRecord::new(LogLevel::Warn, format!("Failed to save history: {}", e))
                        .layer("usecase")
                        .kind("error"),
                );
                false
            }
        };

        let _ = self.deps.log.log(
            &LogRecord::new(LogLevel::Info, "analysis finished")
                .layer("usecase")
                .kind("analysis")
                .field("id", record.id.to_string())
                .field("stack", record.stack.display_name())
                .field("auto_detected", record.result.detected_stack.is_some())
                .field("rule", selection.rule_id.unwrap_or("fallback"))
                .field("saved", saved),
        );

        Ok(AnalysisOutcome {
            record,
            rule_id: selection.rule_id,
            saved,
        })
    }

    /// ファイルから抽出したテキストを解析する
    pub fn analyze_file(
        &self,
        path: &Path,
        selection: StackSelection,
        level: ExplainLevel,
    ) -> Result<AnalysisOutcome, Error> {
        let text = self.deps.extractor.extract_text(path)?;
        let _ = self.deps.log.log(
            &LogRecord::new(LogLevel::Debug, "text extracted")
                .layer("usecase")
                .kind("extract")
                .field("path", path.display().to_string())
                .field("len", text.len()),
        );
        self.analyze(&ErrorInput::new(text), selection, level)
    }

    fn store(&self, record: &HistoryRecord) -> Result<(), Error> {
        let mut history = match self.deps.history.load() {
            Ok(h) => h,
            Err(e) => {
                let _ = self.deps.log.log(
                    &LogRecord::new(
                        LogLevel::Warn,
                        format!("Failed to load history, starting fresh: {}", e),
                    )
                    .layer("usecase")
                    .kind("history"),
                );
                Default::default()
            }
        };
        history.push(record.clone());
        self.deps.history.save(&history)
    }
}
