//! 設定ファイル（config.json）の読み込み（adapter 層）
//!
//! ファイルが無ければデフォルト。あるのに読めない・壊れている場合は使い方の誤りとして返す。

use std::path::Path;

use common::error::Error;
use common::llm::GeminiProfile;
use common::ports::outbound::FileSystem;
use serde::Deserialize;

use crate::adapter::gemini_annotator::DEFAULT_LANGUAGE;

/// mindvault の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub gemini: GeminiProfile,
    /// 要約・タグの応答言語
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini: GeminiProfile::default(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct AppConfigRaw {
    model: Option<String>,
    base_url: Option<String>,
    api_key_env: Option<String>,
    language: Option<String>,
}

impl AppConfig {
    /// JSON 文字列からパース（ファイル読みは load_app_config で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: AppConfigRaw = serde_json::from_str(json)?;
        Ok(Self {
            gemini: GeminiProfile::from_options(raw.model, raw.base_url, raw.api_key_env),
            language: raw
                .language
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
    }
}

/// config.json を読む
pub fn load_app_config(fs: &dyn FileSystem, path: &Path) -> Result<AppConfig, Error> {
    if !fs.exists(path) {
        return Ok(AppConfig::default());
    }
    let content = fs.read_to_string(path)?;
    AppConfig::parse(&content).map_err(|e| {
        Error::invalid_argument(format!("Invalid config file '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_app_config(&StdFileSystem, &dir.path().join("config.json")).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.language, "简体中文");
    }

    #[test]
    fn test_partial_config() {
        let cfg = AppConfig::parse(r#"{"model":"gemini-2.0-flash","language":"English"}"#).unwrap();
        assert_eq!(cfg.gemini.model, "gemini-2.0-flash");
        assert_eq!(cfg.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(cfg.language, "English");
    }

    #[test]
    fn test_broken_file_is_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_app_config(&StdFileSystem, &path).unwrap_err();
        assert!(err.is_usage());
    }
}
