//! 解析履歴のドメイン型
//!
//! 新しい順に並び、HISTORY_LIMIT 件を超えた古いものは黙って落とす。
//! 個別削除はなく、全消去のみ。

use crate::domain::{AnalysisResult, ExplainLevel, TechStack};
use common::domain::RecordId;
use serde::{Deserialize, Serialize};

/// 保持する最大件数
pub const HISTORY_LIMIT: usize = 50;

/// 1 回分の解析記録
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: RecordId,
    /// 作成時刻（Unix epoch ミリ秒）
    pub timestamp: u64,
    pub error_input: String,
    /// 解決済みスタック（自動判定の番兵は型上入らない）
    pub stack: TechStack,
    pub level: ExplainLevel,
    pub result: AnalysisResult,
}

impl HistoryRecord {
    /// 一覧表示用の入力プレビュー（先頭 max 文字、改行は空白に）
    pub fn input_preview(&self, max: usize) -> String {
        self.error_input
            .chars()
            .take(max)
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect()
    }
}

/// 解析履歴（新しい順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みの列から復元する。上限を超えていれば古い側を切る。
    pub fn from_records(mut records: Vec<HistoryRecord>) -> Self {
        records.truncate(HISTORY_LIMIT);
        Self { records }
    }

    /// 先頭に追加し、上限を超えた分を末尾（最古）から落とす
    pub fn push(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_LIMIT);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn find(&self, id: &str) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| &*r.id == id)
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<HistoryRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::fallback::fallback_answer;

    pub fn record(n: u64) -> HistoryRecord {
        HistoryRecord {
            id: RecordId::new(format!("id{:04}", n)),
            timestamp: 1_700_000_000_000 + n,
            error_input: format!("error #{}", n),
            stack: TechStack::General,
            level: ExplainLevel::Beginner,
            result: fallback_answer(TechStack::General, ExplainLevel::Beginner),
        }
    }
}
