//! 設定ファイル（config/settings.json）の読み込み
//!
//! 例: {"delay_ms": 1500, "default_stack": "auto", "default_level": "beginner"}
//! 未知のキーは無視する。

use crate::ports::outbound::{Settings, SettingsLoader};
use common::error::Error;
use common::ports::outbound::FileSystem;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    delay_ms: Option<u64>,
    default_stack: Option<String>,
    default_level: Option<String>,
}

pub struct JsonSettingsLoader {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl JsonSettingsLoader {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

impl SettingsLoader for JsonSettingsLoader {
    fn load(&self) -> Result<Settings, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(Settings::default());
        }
        let content = self.fs.read_to_string(&self.path)?;
        parse_settings(&content)
            .map_err(|e| Error::config(format!("{}: {}", self.path.display(), e)))
    }
}

fn parse_settings(content: &str) -> Result<Settings, String> {
    let file: SettingsFile = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let mut settings = Settings::default();
    if let Some(ms) = file.delay_ms {
        settings.delay_ms = ms;
    }
    if let Some(stack) = file.default_stack {
        settings.default_stack = stack.parse().map_err(|e: Error| e.to_string())?;
    }
    if let Some(level) = file.default_level {
        settings.default_level = level.parse().map_err(|e: Error| e.to_string())?;
    }
    Ok(settings)
}
