//! アダプター（Outbound ポートの標準実装）
//!
//! usecase は ports::outbound の trait 経由でのみファイル・時刻・環境変数に触れる。
//! ここには標準実装（Std*）とログ出力先の実装を置く。

pub mod file_json_log;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_fs;
pub mod std_id_generator;

pub use file_json_log::{FileJsonLog, NoopLog, StderrLog, TeeLog};
pub use std_clock::StdClock;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use std_id_generator::StdIdGenerator;
