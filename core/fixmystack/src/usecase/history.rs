//! 履歴ユースケース（一覧・再表示・全消去）

use crate::domain::HistoryRecord;
use crate::ports::outbound::HistoryRepository;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct HistoryUseCase {
    repo: Arc<dyn HistoryRepository>,
    log: Arc<dyn Log>,
}

impl HistoryUseCase {
    pub fn new(repo: Arc<dyn HistoryRepository>, log: Arc<dyn Log>) -> Self {
        Self { repo, log }
    }

    /// 新しい順の一覧
    pub fn list(&self) -> Result<Vec<HistoryRecord>, Error> {
        Ok(self.repo.load()?.into_records())
    }

    /// id で 1 件取り出す（再表示用）
    pub fn get(&self, id: &str) -> Result<HistoryRecord, Error> {
        self.repo
            .load()?
            .find(id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("No history entry with id '{}'", id)))
    }

    /// 全消去。消した件数を返す。
    pub fn clear(&self) -> Result<usize, Error> {
        let count = self.repo.load().map(|h| h.len()).unwrap_or(0);
        self.repo.clear()?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "history cleared")
                .layer("usecase")
                .kind("history")
                .field("count", count),
        );
        Ok(count)
    }
}
