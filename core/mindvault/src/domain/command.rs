//! mindvault コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main の match でディスパッチする。

use crate::domain::{ResourceDraft, TypeFilter};
use common::domain::ResourceId;

/// mindvault のサブコマンド
///
/// コマンドなし = 全件一覧。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示
    Help,

    /// 一覧（種別・検索語で絞り込み）
    List {
        type_filter: TypeFilter,
        search: String,
    },

    /// 新規追加（要約・タグを生成してから保存）
    Add { draft: ResourceDraft },

    /// 1 件表示
    Show { id: ResourceId },

    /// ノートの置き換え
    Notes { id: ResourceId, notes: String },

    /// 削除（確認あり）
    Remove { id: ResourceId },

    /// 件数の集計
    Stats,
}

impl Command {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::List { .. } => "list",
            Command::Add { .. } => "add",
            Command::Show { .. } => "show",
            Command::Notes { .. } => "notes",
            Command::Remove { .. } => "remove",
            Command::Stats => "stats",
        }
    }

    /// ストアを書き換えるコマンドか
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add { .. } | Command::Notes { .. } | Command::Remove { .. }
        )
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::List {
            type_filter: TypeFilter::All,
            search: String::new(),
        }
    }
}
