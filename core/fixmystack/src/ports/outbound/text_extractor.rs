//! 添付ファイルから解析用テキストを取り出す Outbound ポート
//!
//! 現在の実装は OCR / 文字起こしを模した SimulatedExtractor のみ。
//! 本物の抽出サービスはこの trait を実装して wiring で差し替える。

use common::error::Error;
use std::path::Path;

pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String, Error>;
}
