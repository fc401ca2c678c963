//! 削除確認 Outbound ポート
//!
//! usecase は stdin/stderr に直接触れず、この trait 経由で確認を取る。

use crate::domain::{Approval, Resource};
use common::error::Error;

/// 削除前の確認（adapter で実装）
pub trait DeleteApproval: Send + Sync {
    /// `resource` を削除してよいか確認する
    fn confirm_delete(&self, resource: &Resource) -> Result<Approval, Error>;
}
