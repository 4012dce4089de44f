//! AnalysisDelay の実装

use crate::ports::outbound::AnalysisDelay;
use std::thread;
use std::time::Duration;

/// 指定時間スレッドを止める（本番用）
#[derive(Debug, Clone)]
pub struct ThreadSleepDelay {
    duration: Duration,
}

impl ThreadSleepDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(ms),
        }
    }
}

impl AnalysisDelay for ThreadSleepDelay {
    fn wait(&self) {
        if !self.duration.is_zero() {
            thread::sleep(self.duration);
        }
    }
}

/// 待たない（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoDelay;

impl AnalysisDelay for NoDelay {
    fn wait(&self) {}
}
