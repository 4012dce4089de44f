//! fixmystack 固有のドメイン型と解析ロジック
//!
//! detector / rules / fallback / selector は I/O を持たない純粋関数。
//! 遅延・履歴保存・ログは usecase 側の責務。

pub mod analysis;
pub mod command;
pub mod detector;
pub mod error_input;
pub mod fallback;
pub mod file_kind;
pub mod history;
pub mod level;
pub mod rules;
pub mod selector;
pub mod stack;

pub use analysis::AnalysisResult;
pub use command::{FixCommand, InputSource};
pub use detector::detect_tech_stack;
pub use error_input::ErrorInput;
pub use file_kind::FileKind;
pub use history::{History, HistoryRecord, HISTORY_LIMIT};
pub use level::ExplainLevel;
pub use selector::{select_answer, Selection};
pub use stack::{StackSelection, TechStack};
