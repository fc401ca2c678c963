//! 要約・タグ生成 Outbound ポート
//!
//! 実装は Gemini を呼ぶ adapter。失敗は Err で返し、代替結果への置き換えは usecase が行う。

use crate::domain::{Annotation, ResourceType};
use common::error::Error;

/// タイトル・本文・種別から要約と推奨タグを得る
pub trait Annotator: Send + Sync {
    fn annotate(
        &self,
        title: &str,
        content: &str,
        resource_type: ResourceType,
    ) -> Result<Annotation, Error>;
}
