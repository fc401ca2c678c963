//! 絞り込み（種別 × タイトル/タグの部分一致）
//!
//! 純粋関数。入力の順序（ストア順）をそのまま保つ。

use crate::domain::{Resource, ResourceType};
use common::error::Error;

/// 種別フィルタ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// すべて
    #[default]
    All,
    /// 指定種別のみ
    Only(ResourceType),
}

impl TypeFilter {
    /// "ALL" または種別名（大文字小文字を区別しない）
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            return Ok(Self::All);
        }
        ResourceType::parse(s).map(Self::Only)
    }

    pub fn matches(&self, t: ResourceType) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == t,
        }
    }

    /// 一覧の見出し
    pub fn heading(&self) -> &'static str {
        match self {
            Self::All => "全部内容",
            Self::Only(ResourceType::Video) => "视频",
            Self::Only(ResourceType::Audio) => "音频",
            Self::Only(ResourceType::Tweet) => "微内容",
            Self::Only(ResourceType::Article) => "文章",
        }
    }
}

/// 検索語がタイトルまたはいずれかのタグに含まれるか（空の検索語は常に一致）
fn matches_search(resource: &Resource, needle: &str) -> bool {
    needle.is_empty()
        || resource.title.to_lowercase().contains(needle)
        || resource
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}

/// 種別と検索語の両方に一致するものを順序を保って返す
pub fn filter_resources<'a>(
    resources: &'a [Resource],
    type_filter: TypeFilter,
    search_query: &str,
) -> Vec<&'a Resource> {
    let needle = search_query.to_lowercase();
    resources
        .iter()
        .filter(|r| type_filter.matches(r.resource_type) && matches_search(r, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::domain::ResourceId;

    fn resource(id: &str, title: &str, t: ResourceType, tags: &[&str]) -> Resource {
        Resource {
            id: ResourceId::new(id),
            title: title.to_string(),
            url: "#".to_string(),
            resource_type: t,
            platform: "X".to_string(),
            content_raw: None,
            summary: String::new(),
            user_notes: String::new(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            created_at: 0,
        }
    }

    fn fixture() -> Vec<Resource> {
        vec![
            resource("1", "React 性能优化", ResourceType::Article, &["前端"]),
            resource("2", "AI 智能体的未来", ResourceType::Tweet, &["AI", "Agent"]),
            resource("3", "播客：编程人生", ResourceType::Audio, &["career"]),
            resource("4", "Rust 入门", ResourceType::Video, &["rust", "Systems"]),
        ]
    }

    fn ids(v: &[&Resource]) -> Vec<String> {
        v.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_all_and_empty_query_returns_everything_in_order() {
        let r = fixture();
        let out = filter_resources(&r, TypeFilter::All, "");
        assert_eq!(ids(&out), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_type_filter_only() {
        let r = fixture();
        let out = filter_resources(&r, TypeFilter::Only(ResourceType::Tweet), "");
        assert_eq!(ids(&out), vec!["2"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title() {
        let r = fixture();
        assert_eq!(ids(&filter_resources(&r, TypeFilter::All, "react")), vec!["1"]);
        assert_eq!(ids(&filter_resources(&r, TypeFilter::All, "REACT")), vec!["1"]);
    }

    #[test]
    fn test_search_matches_any_tag() {
        let r = fixture();
        assert_eq!(ids(&filter_resources(&r, TypeFilter::All, "agent")), vec!["2"]);
        assert_eq!(ids(&filter_resources(&r, TypeFilter::All, "systems")), vec!["4"]);
        assert_eq!(ids(&filter_resources(&r, TypeFilter::All, "前端")), vec!["1"]);
    }

    #[test]
    fn test_predicates_are_anded() {
        let r = fixture();
        let out = filter_resources(&r, TypeFilter::Only(ResourceType::Article), "rust");
        assert!(out.is_empty());
        let out = filter_resources(&r, TypeFilter::Only(ResourceType::Video), "RUST");
        assert_eq!(ids(&out), vec!["4"]);
    }

    #[test]
    fn test_search_does_not_look_at_summary_or_url() {
        let mut r = fixture();
        r[0].summary = "needle".to_string();
        r[0].url = "https://needle.dev".to_string();
        assert!(filter_resources(&r, TypeFilter::All, "needle").is_empty());
    }

    #[test]
    fn test_parse_type_filter() {
        assert_eq!(TypeFilter::parse("all").unwrap(), TypeFilter::All);
        assert_eq!(
            TypeFilter::parse("VIDEO").unwrap(),
            TypeFilter::Only(ResourceType::Video)
        );
        assert!(TypeFilter::parse("books").is_err());
    }
}
