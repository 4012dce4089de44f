//! 解析前の人工的な待ち時間
//!
//! 本物の推論の代わりに固定時間だけ待つ。キャンセルはできない。

/// 待ち時間の抽象（本番は sleep、テストは即時）
pub trait AnalysisDelay: Send + Sync {
    fn wait(&self);
}
