//! リソース ID 生成 Outbound ポート
//!
//! usecase は IdGenerator を注入し、テストでは固定 ID を返す実装を渡せる。

use crate::domain::ResourceId;

/// ResourceId を生成する抽象（Outbound ポート）
///
/// 同一プロセス内で同じ ID を二度返してはならない。
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ResourceId;
}
