//! ドメイン型（Newtype）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

pub mod dirs;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use dirs::Dirs;

/// ホームディレクトリのパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// config / state の配置を決める
    pub fn dirs(&self) -> Dirs {
        Dirs {
            config_dir: self.0.join("config"),
            state_dir: self.0.join("state"),
        }
    }
}

impl std::ops::Deref for HomeDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for HomeDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for HomeDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// 履歴レコード ID（8文字 base62、辞書順＝時系列）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for RecordId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
