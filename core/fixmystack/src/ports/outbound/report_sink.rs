//! 解析結果・履歴の表示 Sink（人間向け / JSON）
//!
//! usecase はデータだけ返し、表示は CLI がこの Sink に流す。

use crate::domain::HistoryRecord;
use anyhow::Result;

/// 表示先（&mut self: バッファ等の内部状態を許容）
pub trait ReportSink {
    /// 1 件の解析結果（新規解析・履歴からの再表示の両方）
    ///
    /// rule_id は新規解析時のみ渡す（フォールバックは "fallback"）。履歴の再表示では None。
    fn analysis(&mut self, record: &HistoryRecord, rule_id: Option<&str>) -> Result<()>;
    /// 履歴一覧（新しい順）
    fn history(&mut self, records: &[HistoryRecord]) -> Result<()>;
    /// 単発のお知らせ（履歴消去など）
    fn notice(&mut self, message: &str) -> Result<()>;
}
