//! 解析結果の表示 Sink（人間向けテキスト / JSON）

use crate::domain::HistoryRecord;
use crate::ports::outbound::ReportSink;
use anyhow::Result;
use chrono::{Local, TimeZone};
use serde_json::json;
use std::io::Write;

/// 履歴一覧で見せる入力の先頭文字数
const PREVIEW_CHARS: usize = 60;

fn local_time(ms: u64) -> String {
    match Local.timestamp_millis_opt(ms as i64).single() {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ms.to_string(),
    }
}

/// 端末向けの整形出力
pub struct HumanReportSink<W: Write> {
    out: W,
}

impl<W: Write> HumanReportSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn section(&mut self, title: &str, body: &str) -> Result<()> {
        writeln!(self.out, "## {}", title)?;
        writeln!(self.out, "{}", body.trim_end())?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ReportSink for HumanReportSink<W> {
    fn analysis(&mut self, record: &HistoryRecord, _rule_id: Option<&str>) -> Result<()> {
        let r = &record.result;
        let detected = if r.detected_stack.is_some() {
            " (auto-detected)"
        } else {
            ""
        };
        writeln!(
            self.out,
            "Stack: {}{}  |  Level: {}",
            record.stack, detected, record.level
        )?;
        writeln!(self.out)?;
        self.section("What Went Wrong", &r.what_went_wrong)?;
        self.section("Why This Happened", &r.root_cause)?;
        self.section("How to Fix It", &r.fix_code)?;
        let tips: Vec<String> = r.prevention.iter().map(|t| format!("- {}", t)).collect();
        self.section("Prevent This in Future", &tips.join("\n"))?;
        self.section("Learning Insight", &r.learning_insight)?;
        writeln!(self.out, "(id: {})", record.id)?;
        self.out.flush()?;
        Ok(())
    }

    fn history(&mut self, records: &[HistoryRecord]) -> Result<()> {
        if records.is_empty() {
            writeln!(self.out, "No history yet.")?;
            return Ok(());
        }
        for rec in records {
            writeln!(
                self.out,
                "{}  {}  [{}]  {}",
                rec.id,
                local_time(rec.timestamp),
                rec.stack,
                rec.result.what_went_wrong
            )?;
            writeln!(self.out, "    {}...", rec.input_preview(PREVIEW_CHARS))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}

/// 機械向けの JSON 出力（1 コマンド 1 ドキュメント）
pub struct JsonReportSink<W: Write> {
    out: W,
}

impl<W: Write> JsonReportSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonReportSink<W> {
    fn analysis(&mut self, record: &HistoryRecord, rule_id: Option<&str>) -> Result<()> {
        let mut value = serde_json::to_value(record)?;
        if let (Some(obj), Some(rule)) = (value.as_object_mut(), rule_id) {
            obj.insert("rule_id".to_string(), json!(rule));
        }
        serde_json::to_writer_pretty(&mut self.out, &value)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn history(&mut self, records: &[HistoryRecord]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, records)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        serde_json::to_writer(&mut self.out, &json!({ "message": message }))?;
        writeln!(self.out)?;
        Ok(())
    }
}
