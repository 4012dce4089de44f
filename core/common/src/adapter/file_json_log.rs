//! Log 実装（ファイルへ JSONL 追記 / stderr ミラー / 何もしない / 複数への配信）
//!
//! 解析結果の表示（stdout）とは別チャネル。

use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogRecord};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let mut w = self.fs.open_append(&self.path)?;
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        w.write_all(line.as_bytes())?;
        w.flush()?;
        Ok(())
    }
}

/// stderr に 1 行で要約を出す Log 実装（-v 指定時）
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut line = format!("[{}] {}", record.level.as_str(), record.message);
        if let Some(ref layer) = record.layer {
            line.push_str(&format!(" layer={}", layer));
        }
        if let Some(ref fields) = record.fields {
            for (k, v) in fields {
                line.push_str(&format!(" {}={}", k, v));
            }
        }
        eprintln!("{}", line);
        Ok(())
    }
}

/// 複数の Log に同じレコードを配信する。最初のエラーを返すが、残りへの配信は続ける。
pub struct TeeLog {
    logs: Vec<Arc<dyn Log>>,
}

impl TeeLog {
    pub fn new(logs: Vec<Arc<dyn Log>>) -> Self {
        Self { logs }
    }
}

impl Log for TeeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for log in &self.logs {
            if let Err(e) = log.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}
