//! 永続化される唯一のエンティティ Resource

use common::domain::ResourceId;
use common::error::Error;
use serde::{Deserialize, Serialize};

/// リソース種別（固定の閉じた集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceType {
    Article,
    Video,
    Audio,
    /// X / Weibo などの短い投稿
    Tweet,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Article,
        ResourceType::Video,
        ResourceType::Audio,
        ResourceType::Tweet,
    ];

    /// 永続化・プロンプトで使う識別子
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "ARTICLE",
            Self::Video => "VIDEO",
            Self::Audio => "AUDIO",
            Self::Tweet => "TWEET",
        }
    }

    /// 一覧・作成フォームで使う表示名
    pub fn label(&self) -> &'static str {
        match self {
            Self::Article => "文章",
            Self::Video => "视频",
            Self::Audio => "音频",
            Self::Tweet => "短内容 (推文/微博)",
        }
    }

    /// 大文字小文字を区別せずに解析する
    pub fn parse(s: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "unknown resource type '{}' (expected ARTICLE, VIDEO, AUDIO or TWEET)",
                    s
                ))
            })
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ブックマーク 1 件
///
/// `user_notes` 以外は作成後に変更しない。未知のフィールドは読み込み時に無視する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_raw: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub user_notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// 作成時刻（ミリ秒, Unix epoch）
    pub created_at: i64,
}
