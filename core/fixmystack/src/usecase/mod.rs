//! ユースケース（ポート経由で I/O を行う）

pub mod analyze;
pub mod history;

pub use analyze::{AnalysisOutcome, AnalyzeDeps, AnalyzeUseCase};
pub use history::HistoryUseCase;
