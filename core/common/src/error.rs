//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。`main` は `exit_code()` を終了コードに使う。

use thiserror::Error as ThisError;

/// 共通エラー型
#[derive(Debug, ThisError)]
pub enum Error {
    /// ファイル I/O 失敗
    #[error("{0}")]
    Io(String),

    /// JSON のシリアライズ・パース失敗
    #[error("{0}")]
    Json(String),

    /// HTTP 通信・API エラー
    #[error("{0}")]
    Http(String),

    /// 環境変数・実行環境の不備
    #[error("{0}")]
    Env(String),

    /// 引数不正（使い方の誤り）
    #[error("{0}")]
    InvalidArgument(String),

    /// その他のシステムエラー
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// 終了コード（sysexits.h 準拠: 64 = 使い方の誤り, 74 = I/O, 70 = 内部エラー）
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Io(_) => 74,
            _ => 70,
        }
    }

    /// 使い方の誤りか（main で Usage を併せて表示する）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
