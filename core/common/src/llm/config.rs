//! Gemini 接続設定
//!
//! config.json の該当キーから解決する。未指定の項目はデフォルトで埋める。

/// デフォルトのモデル名
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
/// デフォルトの API ベース URL
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// API キーを読む環境変数（優先）
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// API キーを読む環境変数（互換用の別名）
pub const LEGACY_API_KEY_ENV: &str = "API_KEY";

/// Gemini プロバイダの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiProfile {
    pub model: String,
    pub base_url: String,
    /// API キーを読む環境変数名
    pub api_key_env: String,
}

impl Default for GeminiProfile {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl GeminiProfile {
    /// 省略された項目をデフォルトで補う
    pub fn from_options(
        model: Option<String>,
        base_url: Option<String>,
        api_key_env: Option<String>,
    ) -> Self {
        let d = Self::default();
        Self {
            model: model.filter(|s| !s.is_empty()).unwrap_or(d.model),
            base_url: base_url
                .filter(|s| !s.is_empty())
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(d.base_url),
            api_key_env: api_key_env.filter(|s| !s.is_empty()).unwrap_or(d.api_key_env),
        }
    }

    /// API キーを探す環境変数名（設定値 → 互換名の順）
    pub fn api_key_env_candidates(&self) -> Vec<&str> {
        let mut v = vec![self.api_key_env.as_str()];
        if self.api_key_env == DEFAULT_API_KEY_ENV {
            v.push(LEGACY_API_KEY_ENV);
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_options_fills_defaults() {
        let p = GeminiProfile::from_options(None, Some("https://proxy.local/".to_string()), None);
        assert_eq!(p.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(p.base_url, "https://proxy.local");
        assert_eq!(p.api_key_env, DEFAULT_API_KEY_ENV);
    }

    #[test]
    fn test_api_key_env_candidates() {
        let p = GeminiProfile::default();
        assert_eq!(p.api_key_env_candidates(), vec!["GEMINI_API_KEY", "API_KEY"]);
        let custom = GeminiProfile::from_options(None, None, Some("MY_KEY".to_string()));
        assert_eq!(custom.api_key_env_candidates(), vec!["MY_KEY"]);
    }
}
