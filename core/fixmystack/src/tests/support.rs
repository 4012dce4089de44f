//! テスト用のインメモリ / 固定値アダプタ

use std::path::Path;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use common::domain::RecordId;
use common::error::Error;
use common::ports::outbound::{Clock, IdGenerator, Log, LogLevel, LogRecord};

use crate::domain::History;
use crate::ports::outbound::{AnalysisDelay, HistoryRepository, TextExtractor};
use crate::usecase::{AnalyzeDeps, AnalyzeUseCase, HistoryUseCase};

/// メモリ上の履歴。fail_save で保存失敗を再現できる。
#[derive(Default)]
pub struct InMemoryHistoryRepository {
    history: Mutex<History>,
    fail_save: bool,
}

impl InMemoryHistoryRepository {
    pub fn failing() -> Self {
        Self {
            fail_save: true,
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> History {
        self.history.lock().unwrap().clone()
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn load(&self) -> Result<History, Error> {
        Ok(self.history.lock().unwrap().clone())
    }

    fn save(&self, history: &History) -> Result<(), Error> {
        if self.fail_save {
            return Err(Error::io_msg("disk full"));
        }
        *self.history.lock().unwrap() = history.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        self.history.lock().unwrap().clear();
        Ok(())
    }
}

/// 呼ばれるたびに 1 秒進む時計
pub struct SteppingClock(AtomicU64);

impl SteppingClock {
    pub fn starting_at(ms: u64) -> Self {
        Self(AtomicU64::new(ms))
    }
}

impl Clock for SteppingClock {
    fn now_ms(&self) -> u64 {
        self.0.fetch_add(1_000, Ordering::SeqCst)
    }
}

/// rec001, rec002, ... を返す
#[derive(Default)]
pub struct SeqIdGenerator(AtomicU64);

impl IdGenerator for SeqIdGenerator {
    fn next_id(&self) -> RecordId {
        let n = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        RecordId::new(format!("rec{:03}", n))
    }
}

/// wait の回数だけ数える（実際には待たない）
#[derive(Default)]
pub struct CountingDelay(AtomicUsize);

impl CountingDelay {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl AnalysisDelay for CountingDelay {
    fn wait(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// 固定テキストを返す抽出器
pub struct FixedExtractor(pub &'static str);

impl TextExtractor for FixedExtractor {
    fn extract_text(&self, _path: &Path) -> Result<String, Error> {
        Ok(self.0.to_string())
    }
}

/// 出力されたログを溜める
#[derive(Default)]
pub struct RecordingLog(Mutex<Vec<LogRecord>>);

impl RecordingLog {
    pub fn count(&self, level: LogLevel) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.level == level)
            .count()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.0.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// テスト用に組み立てた UseCase 一式
pub struct Harness {
    pub repo: Arc<InMemoryHistoryRepository>,
    pub delay: Arc<CountingDelay>,
    pub log: Arc<RecordingLog>,
    pub analyze: AnalyzeUseCase,
    pub history: HistoryUseCase,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_repo(InMemoryHistoryRepository::default())
    }

    pub fn with_repo(repo: InMemoryHistoryRepository) -> Self {
        let repo = Arc::new(repo);
        let delay = Arc::new(CountingDelay::default());
        let log = Arc::new(RecordingLog::default());
        let analyze = AnalyzeUseCase::new(AnalyzeDeps {
            delay: delay.clone(),
            extractor: Arc::new(FixedExtractor(
                "[System: Attached file \"a.mp3\"]\n[Simulated Transcription]: \"I'm trying to run my Node server but getting an EADDRINUSE error on port 3000.\"",
            )),
            history: repo.clone(),
            id_gen: Arc::new(SeqIdGenerator::default()),
            clock: Arc::new(SteppingClock::starting_at(1_700_000_000_000)),
            log: log.clone(),
        });
        let history = HistoryUseCase::new(repo.clone(), log.clone());
        Self {
            repo,
            delay,
            log,
            analyze,
            history,
        }
    }
}
