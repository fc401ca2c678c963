//! 配線: 標準アダプタで Store / Lifecycle を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdClock, StdEnvResolver, StdFileSystem, StdIdGenerator};
use common::error::Error;
use common::llm::{GeminiProvider, LlmProvider};
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log, LogLevel, LogRecord};

use crate::adapter::{
    load_app_config, AppConfig, AssumeYesApproval, CliDeleteApproval, FileSlotStorage,
    GeminiAnnotator, NonInteractiveApproval, UnavailableAnnotator,
};
use crate::ports::outbound::{Annotator, DeleteApproval, SlotStorage};
use crate::usecase::{ResourceLifecycle, ResourceStore};

/// 削除確認の方式（CLI フラグから決まる）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalMode {
    Prompt,
    AssumeYes,
    NonInteractive,
}

impl ApprovalMode {
    /// -y が --no-interactive より優先
    pub fn from_flags(assume_yes: bool, non_interactive: bool) -> Self {
        if assume_yes {
            Self::AssumeYes
        } else if non_interactive {
            Self::NonInteractive
        } else {
            Self::Prompt
        }
    }
}

/// 組み立て済みのアプリケーション
pub struct App {
    pub storage: Arc<dyn SlotStorage>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Log>,
    pub lifecycle: ResourceLifecycle,
    pub config: AppConfig,
}

impl App {
    /// スロットからストアを読み込む（失敗時はサンプルデータ）
    pub fn load_store(&self) -> ResourceStore {
        ResourceStore::load(
            Arc::clone(&self.storage),
            self.clock.as_ref(),
            Arc::clone(&self.logger),
        )
    }
}

/// API キーがあれば Gemini、無ければ常に失敗する Annotator（作成時は代替結果になる）
fn build_annotator(
    env_resolver: &dyn EnvResolver,
    config: &AppConfig,
    logger: &dyn Log,
) -> Arc<dyn Annotator> {
    let candidates = config.gemini.api_key_env_candidates();
    let api_key = candidates.iter().find_map(|name| env_resolver.var(name));
    let provider = api_key
        .ok_or_else(|| Error::env(format!("{} is not set", config.gemini.api_key_env)))
        .and_then(|key| GeminiProvider::new(config.gemini.clone(), key));
    match provider {
        Ok(provider) => {
            let provider: Arc<dyn LlmProvider> = Arc::new(provider);
            Arc::new(GeminiAnnotator::new(provider, config.language.clone()))
        }
        Err(e) => {
            let _ = logger.log(
                &LogRecord::new(LogLevel::Warn, "wiring", "annotation", "annotator unavailable")
                    .with_field("reason", serde_json::json!(e.to_string())),
            );
            Arc::new(UnavailableAnnotator::new(e.to_string()))
        }
    }
}

fn build_approval(mode: ApprovalMode) -> Arc<dyn DeleteApproval> {
    match mode {
        ApprovalMode::Prompt => Arc::new(CliDeleteApproval),
        ApprovalMode::AssumeYes => Arc::new(AssumeYesApproval),
        ApprovalMode::NonInteractive => Arc::new(NonInteractiveApproval),
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_mindvault(mode: ApprovalMode) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver = StdEnvResolver;
    let dirs = env_resolver.resolve_dirs()?;
    let logger: Arc<dyn Log> = match fs.create_dir_all(&dirs.logs_dir()) {
        Ok(()) => Arc::new(FileJsonLog::new(Arc::clone(&fs), dirs.log_file())),
        Err(_) => Arc::new(NoopLog),
    };
    let config = load_app_config(fs.as_ref(), &dirs.config_file())?;

    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let storage: Arc<dyn SlotStorage> =
        Arc::new(FileSlotStorage::new(Arc::clone(&fs), dirs.data_dir.clone()));
    let lifecycle = ResourceLifecycle::new(
        build_annotator(&env_resolver, &config, logger.as_ref()),
        build_approval(mode),
        Arc::new(StdIdGenerator::new(Arc::clone(&clock))),
        Arc::clone(&clock),
        Arc::clone(&logger),
    );
    Ok(App {
        storage,
        clock,
        logger,
        lifecycle,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_mode_from_flags() {
        assert_eq!(ApprovalMode::from_flags(false, false), ApprovalMode::Prompt);
        assert_eq!(ApprovalMode::from_flags(true, false), ApprovalMode::AssumeYes);
        assert_eq!(ApprovalMode::from_flags(false, true), ApprovalMode::NonInteractive);
        assert_eq!(ApprovalMode::from_flags(true, true), ApprovalMode::AssumeYes);
    }
}
