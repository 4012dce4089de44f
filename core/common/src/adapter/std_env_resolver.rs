//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const HOME_ENV: &str = "FIXMYSTACK_HOME";
const APP_DIR_NAME: &str = "fixmystack";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        resolve_home_dir_from(|key| env::var(key).ok())
    }
}

/// 環境変数の取得関数を差し替えて解決する（テストでプロセス環境を汚さないため）
fn resolve_home_dir_from(get: impl Fn(&str) -> Option<String>) -> Result<HomeDir, Error> {
    let non_empty = |key: &str| get(key).filter(|s| !s.is_empty());

    if let Some(home) = non_empty(HOME_ENV) {
        return Ok(HomeDir::new(PathBuf::from(home)));
    }

    let config_base = non_empty("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| non_empty("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or_else(|| Error::env("HOME is not set"))?;

    Ok(HomeDir::new(config_base.join(APP_DIR_NAME)))
}
