//! Outbound ポート: アプリが外界（FS・時刻・ID・環境変数・ログ）を使うための trait

pub mod clock;
pub mod env_resolver;
pub mod fs;
pub mod id_generator;
pub mod log;

pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use id_generator::IdGenerator;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
