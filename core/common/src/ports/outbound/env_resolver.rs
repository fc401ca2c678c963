//! 環境変数解決 Outbound ポート
//!
//! 実行時ディレクトリと API キー等の環境変数を解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::Dirs;
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// config / data / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. MINDVAULT_HOME（設定されていれば {home}/config, {home}/data, {home}/state）
    /// 2. XDG_CONFIG_HOME / XDG_DATA_HOME / XDG_STATE_HOME 配下の mindvault
    /// 3. $HOME/.config, $HOME/.local/share, $HOME/.local/state 配下の mindvault
    fn resolve_dirs(&self) -> Result<Dirs, Error>;

    /// 空でない環境変数の値を返す
    fn var(&self, name: &str) -> Option<String>;
}
