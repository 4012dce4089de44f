//! 実行時ディレクトリ（FIXMYSTACK_HOME / XDG 解決結果）
//!
//! HomeDir::dirs() で取得し、設定・履歴・ログのパス計算に使う。

use std::path::PathBuf;

/// 解決済みの config / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// 設定ファイル（config/settings.json）
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// 解析履歴（state/history.json）
    pub fn history_file(&self) -> PathBuf {
        self.state_dir.join("history.json")
    }

    /// ログ格納ディレクトリ
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join("fixmystack.jsonl")
    }
}
