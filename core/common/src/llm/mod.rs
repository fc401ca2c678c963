//! LLM プロバイダの実装
//!
//! 単発の generateContent 呼び出し（構造化 JSON 応答）を扱う。ストリーミングは行わない。

pub mod config;
pub mod gemini;
pub mod provider;

pub use config::GeminiProfile;
pub use gemini::GeminiProvider;
pub use provider::{GenerateRequest, LlmProvider};
