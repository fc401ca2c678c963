//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "mindvault";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        resolve_dirs_with(|name| self.var(name))
    }

    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok().filter(|s| !s.is_empty())
    }
}

/// 変数の取得方法を差し替えてディレクトリを解決する（テストでは HashMap を渡す）
pub fn resolve_dirs_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Dirs, Error> {
    if let Some(home) = lookup("MINDVAULT_HOME") {
        return Ok(Dirs::under_home(&HomeDir::new(home)));
    }

    let user_home = lookup("HOME").map(PathBuf::from);
    let xdg = |var: &str, fallback: &[&str]| -> Result<PathBuf, Error> {
        if let Some(p) = lookup(var) {
            return Ok(PathBuf::from(p).join(APP_DIR));
        }
        let mut path = user_home
            .clone()
            .ok_or_else(|| Error::env("HOME is not set"))?;
        for seg in fallback {
            path.push(seg);
        }
        path.push(APP_DIR);
        Ok(path)
    };

    Ok(Dirs {
        config_dir: xdg("XDG_CONFIG_HOME", &[".config"])?,
        data_dir: xdg("XDG_DATA_HOME", &[".local", "share"])?,
        state_dir: xdg("XDG_STATE_HOME", &[".local", "state"])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_mindvault_home_wins() {
        let dirs = resolve_dirs_with(lookup_from(&[
            ("MINDVAULT_HOME", "/opt/mv"),
            ("HOME", "/home/u"),
            ("XDG_DATA_HOME", "/xdg/data"),
        ]))
        .unwrap();
        assert_eq!(dirs.data_dir, PathBuf::from("/opt/mv/data"));
        assert_eq!(dirs.config_dir, PathBuf::from("/opt/mv/config"));
    }

    #[test]
    fn test_xdg_and_home_fallbacks() {
        let dirs = resolve_dirs_with(lookup_from(&[
            ("HOME", "/home/u"),
            ("XDG_DATA_HOME", "/xdg/data"),
        ]))
        .unwrap();
        assert_eq!(dirs.data_dir, PathBuf::from("/xdg/data/mindvault"));
        assert_eq!(dirs.config_dir, PathBuf::from("/home/u/.config/mindvault"));
        assert_eq!(dirs.state_dir, PathBuf::from("/home/u/.local/state/mindvault"));
    }

    #[test]
    fn test_no_home_is_env_error() {
        let err = resolve_dirs_with(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Env(_)));
    }
}
