//! アダプター（Outbound ポートの実装）

pub mod delay;
pub mod file_history_repository;
pub mod report_sink;
pub mod settings;
pub mod simulated_extractor;

pub use delay::{NoDelay, ThreadSleepDelay};
pub use file_history_repository::FileHistoryRepository;
pub use report_sink::{HumanReportSink, JsonReportSink};
pub use settings::JsonSettingsLoader;
pub use simulated_extractor::SimulatedExtractor;
