//! 解析履歴の JSON ファイル保存（state/history.json）
//!
//! 中身は新しい順の HistoryRecord 配列。書き込みは一時ファイル + rename。
//! 壊れたファイルは空の履歴として扱い、次の保存で上書きされる。

use crate::domain::{History, HistoryRecord};
use crate::ports::outbound::HistoryRepository;
use common::error::Error;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};
use std::path::PathBuf;
use std::sync::Arc;

pub struct FileHistoryRepository {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    log: Arc<dyn Log>,
}

impl FileHistoryRepository {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>, log: Arc<dyn Log>) -> Self {
        Self {
            fs,
            path: path.into(),
            log,
        }
    }

    fn log_op(&self, level: LogLevel, message: String, operation: &str, count: Option<usize>) {
        let mut rec = LogRecord::new(level, message)
            .layer("adapter")
            .kind("history")
            .field("operation", operation)
            .field("path", self.path.display().to_string());
        if let Some(n) = count {
            rec = rec.field("count", n);
        }
        let _ = self.log.log(&rec);
    }
}

impl HistoryRepository for FileHistoryRepository {
    fn load(&self) -> Result<History, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(History::new());
        }
        let content = self.fs.read_to_string(&self.path)?;
        match serde_json::from_str::<Vec<HistoryRecord>>(&content) {
            Ok(records) => {
                self.log_op(LogLevel::Debug, "history read".to_string(), "load", Some(records.len()));
                Ok(History::from_records(records))
            }
            Err(e) => {
                self.log_op(
                    LogLevel::Warn,
                    format!("Failed to parse history: {}", e),
                    "load",
                    None,
                );
                Ok(History::new())
            }
        }
    }

    fn save(&self, history: &History) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(history.records())?;
        self.fs.write_atomic(&self.path, &json)?;
        self.log_op(LogLevel::Debug, "history write".to_string(), "save", Some(history.len()));
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        if self.fs.exists(&self.path) {
            self.fs.remove_file(&self.path)?;
        }
        self.log_op(LogLevel::Info, "history file removed".to_string(), "clear", None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::fixtures::record;
    use common::adapter::{NoopLog, StdFileSystem};

    fn repo(path: &std::path::Path) -> FileHistoryRepository {
        FileHistoryRepository::new(Arc::new(StdFileSystem), path, Arc::new(NoopLog))
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let tmp = tempfile::tempdir().unwrap();
        let h = repo(&tmp.path().join("state/history.json")).load().unwrap();
        assert!(h.is_empty());
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("state/history.json");
        let r = repo(&path);

        let mut h = History::new();
        h.push(record(1));
        h.push(record(2));
        r.save(&h).unwrap();

        let loaded = r.load().unwrap();
        assert_eq!(loaded, h);
        assert_eq!(&*loaded.records()[0].id, "id0002");
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(repo(&path).load().unwrap().is_empty());
    }

    #[test]
    fn test_clear_removes_file_and_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.json");
        let r = repo(&path);
        let mut h = History::new();
        h.push(record(1));
        r.save(&h).unwrap();
        assert!(path.exists());

        r.clear().unwrap();
        assert!(!path.exists());
        r.clear().unwrap();
        assert!(r.load().unwrap().is_empty());
    }
}
