//! Outbound ポート: アプリが外界を使うための trait

pub mod analysis_delay;
pub mod history_repository;
pub mod report_sink;
pub mod settings_loader;
pub mod text_extractor;

pub use analysis_delay::AnalysisDelay;
pub use history_repository::HistoryRepository;
pub use report_sink::ReportSink;
pub use settings_loader::{Settings, SettingsLoader};
pub use text_extractor::TextExtractor;
