//! fixmystack 共通ライブラリ
//!
//! エラー型・ドメイン Newtype・Outbound ポートとその標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;
