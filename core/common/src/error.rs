//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。CLI はこの型から終了コードを決める。

/// 共通エラー型
///
/// 終了コードは sysexits.h に合わせる（64: 引数不正, 66: 対象なし, 70: 内部, 74: I/O, 78: 設定）。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    NotFound(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("environment error: {0}")]
    Env(String),
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::NotFound(_) => 66,
            Error::System(_) => 70,
            Error::Io(_) | Error::Json(_) => 74,
            Error::Config(_) | Error::Env(_) => 78,
        }
    }

    /// 使い方の表示が必要なエラーか（引数不正のみ）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
