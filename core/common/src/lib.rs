//! MindVault 共通ライブラリ
//!
//! `mindvault` コマンドが使うエラー型・Outbound ポート・標準アダプタ・LLM プロバイダを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype・実行時ディレクトリ）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;

/// LLM プロバイダ（Gemini）
pub mod llm;
