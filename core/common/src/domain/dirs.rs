//! 実行時ディレクトリ（XDG / MINDVAULT_HOME 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、スロット・設定・ログのパス計算に使う。

use std::path::PathBuf;

use super::HomeDir;

/// 解決済みの config / data / state ディレクトリ
#[derive(Debug, Clone)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// `MINDVAULT_HOME` 配下にまとめる場合の配置
    pub fn under_home(home: &HomeDir) -> Self {
        Self {
            config_dir: home.join("config"),
            data_dir: home.join("data"),
            state_dir: home.join("state"),
        }
    }

    /// 設定ファイル（config.json）
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// ログ格納ディレクトリ
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    /// 構造化ログファイル（JSONL）
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join("mindvault.jsonl")
    }
}
