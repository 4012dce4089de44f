//! fixmystack コマンドの enum（Command Pattern）
//!
//! 解析 / 履歴操作 / ドキュメント表示の分岐を enum で明示する。

use crate::domain::{ExplainLevel, StackSelection};
use std::path::PathBuf;

/// 解析対象の入力元
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// 引数の単語を空白で連結したもの
    Text(String),
    /// 標準入力（`-` 指定）
    Stdin,
    /// 抽出器を通すファイル
    File(PathBuf),
}

/// 実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum FixCommand {
    Help,
    Docs,
    Analyze {
        source: InputSource,
        /// None なら設定ファイルの既定値
        stack: Option<StackSelection>,
        level: Option<ExplainLevel>,
        json: bool,
    },
    ListHistory {
        json: bool,
    },
    ShowHistory {
        id: String,
        json: bool,
    },
    ClearHistory,
}
