//! 解析履歴の永続化 Outbound ポート

use crate::domain::History;
use common::error::Error;

/// 履歴の保存先（本番は JSON ファイル、テストはメモリ）
///
/// 上限・並び順の不変条件は History 型が持つので、実装は列をそのまま読み書きすればよい。
pub trait HistoryRepository: Send + Sync {
    /// 保存済み履歴を読む。未保存なら空。
    fn load(&self) -> Result<History, Error>;
    fn save(&self, history: &History) -> Result<(), Error>;
    /// 全消去（保存先ごと消す）
    fn clear(&self) -> Result<(), Error>;
}
