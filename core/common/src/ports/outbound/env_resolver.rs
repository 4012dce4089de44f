//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリを環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. FIXMYSTACK_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/fixmystack（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/fixmystack
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// config / state ディレクトリ
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        Ok(self.resolve_home_dir()?.dirs())
    }
}
