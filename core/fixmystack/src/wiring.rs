//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    FileJsonLog, StderrLog, StdClock, StdEnvResolver, StdFileSystem, StdIdGenerator, TeeLog,
};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log};

use crate::adapter::{
    FileHistoryRepository, JsonSettingsLoader, NoDelay, SimulatedExtractor, ThreadSleepDelay,
};
use crate::ports::outbound::{AnalysisDelay, HistoryRepository, Settings, SettingsLoader};
use crate::usecase::{AnalyzeDeps, AnalyzeUseCase, HistoryUseCase};

/// main が使う組み立て済みの部品
pub struct App {
    pub logger: Arc<dyn Log>,
    pub settings: Settings,
    pub analyze: AnalyzeUseCase,
    pub history: HistoryUseCase,
}

/// 配線: ホームディレクトリを解決し、設定を読み、UseCase を組み立てる
///
/// verbose のときは JSONL ファイルに加えて stderr にもログを流す。
pub fn wire_app(verbose: bool) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let dirs = StdEnvResolver.resolve_dirs()?;

    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), dirs.log_file()));
    let logger: Arc<dyn Log> = if verbose {
        let stderr_log: Arc<dyn Log> = Arc::new(StderrLog);
        Arc::new(TeeLog::new(vec![file_log, stderr_log]))
    } else {
        file_log
    };

    let settings = JsonSettingsLoader::new(Arc::clone(&fs), dirs.settings_file()).load()?;

    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let history_repo: Arc<dyn HistoryRepository> = Arc::new(FileHistoryRepository::new(
        Arc::clone(&fs),
        dirs.history_file(),
        Arc::clone(&logger),
    ));

    let delay: Arc<dyn AnalysisDelay> = if settings.delay_ms == 0 {
        Arc::new(NoDelay)
    } else {
        Arc::new(ThreadSleepDelay::from_millis(settings.delay_ms))
    };

    let analyze = AnalyzeUseCase::new(AnalyzeDeps {
        delay,
        extractor: Arc::new(SimulatedExtractor::new(Arc::clone(&fs))),
        history: Arc::clone(&history_repo),
        id_gen: Arc::new(StdIdGenerator::new(Arc::clone(&clock))),
        clock,
        log: Arc::clone(&logger),
    });
    let history = HistoryUseCase::new(history_repo, Arc::clone(&logger));

    Ok(App {
        logger,
        settings,
        analyze,
        history,
    })
}
