//! Outbound ポート: アプリが外界（永続スロット・生成 AI・対話確認）を使うための trait

pub mod annotator;
pub mod delete_approval;
pub mod slot_storage;

pub use annotator::Annotator;
pub use delete_approval::DeleteApproval;
pub use slot_storage::SlotStorage;
