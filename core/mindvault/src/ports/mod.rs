//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: スロット保存・要約生成・削除確認の trait（common の FileSystem / Clock / Log 等も利用）

pub mod inbound;
pub mod outbound;
