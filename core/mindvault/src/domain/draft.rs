//! 作成フォームの入力（ResourceDraft）
//!
//! 欠けた項目はデフォルトで埋める。空文字も「未入力」とみなす。

use crate::domain::ResourceType;

/// タイトル未入力時
pub const DEFAULT_TITLE: &str = "无标题";
/// URL 未入力時
pub const DEFAULT_URL: &str = "#";
/// プラットフォーム未入力時
pub const DEFAULT_PLATFORM: &str = "未知";
/// 本文未入力時に Annotator へ渡すプレースホルダ
pub const CONTENT_PLACEHOLDER: &str = "No detailed content provided";

/// 新規リソースの入力
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDraft {
    pub title: Option<String>,
    pub url: Option<String>,
    pub resource_type: Option<ResourceType>,
    pub platform: Option<String>,
    pub content_raw: Option<String>,
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}

impl ResourceDraft {
    pub fn title(&self) -> &str {
        non_empty(&self.title).unwrap_or(DEFAULT_TITLE)
    }

    pub fn url(&self) -> &str {
        non_empty(&self.url).unwrap_or(DEFAULT_URL)
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type.unwrap_or(ResourceType::Article)
    }

    pub fn platform(&self) -> &str {
        non_empty(&self.platform).unwrap_or(DEFAULT_PLATFORM)
    }

    /// 保存用の本文（未入力なら None）
    pub fn content_raw(&self) -> Option<&str> {
        non_empty(&self.content_raw)
    }

    /// Annotator へ渡す本文（未入力ならプレースホルダ）
    pub fn content_for_annotation(&self) -> &str {
        self.content_raw().unwrap_or(CONTENT_PLACEHOLDER)
    }
}
