//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::FixCommand;
use common::error::Error;

/// 解析済みコマンドを実行して終了コードを返す Inbound ポート
///
/// main はこの trait を実装した Runner の run を呼び出す。
pub trait UseCaseRunner {
    fn run(&self, cmd: FixCommand) -> Result<i32, Error>;
}
