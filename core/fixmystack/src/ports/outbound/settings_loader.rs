//! 設定の読み込み Outbound ポート

use crate::domain::{ExplainLevel, StackSelection};
use common::error::Error;

/// 既定の待ち時間（ミリ秒）
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// 解決済み設定（CLI 引数で上書きされる既定値）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub delay_ms: u64,
    pub default_stack: StackSelection,
    pub default_level: ExplainLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            default_stack: StackSelection::Auto,
            default_level: ExplainLevel::Beginner,
        }
    }
}

pub trait SettingsLoader: Send + Sync {
    /// 設定ファイルが無ければ Settings::default()。値が不正なら Error::Config。
    fn load(&self) -> Result<Settings, Error>;
}
