//! 削除確認の結果

/// 承認結果（Approved: 実行許可、Denied: 拒否）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approval {
    /// ユーザーが削除を許可した
    Approved,
    /// ユーザーが削除を拒否した
    Denied,
}
