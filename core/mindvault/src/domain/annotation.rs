//! Annotator が返す要約とタグ

/// 要約が生成できなかったときの固定文言
pub const FALLBACK_SUMMARY: &str = "暂时无法生成摘要。";
/// タグが生成できなかったときの固定タグ
pub const FALLBACK_TAG: &str = "未分类";

/// 要約と推奨タグ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub summary: String,
    pub suggested_tags: Vec<String>,
}

impl Annotation {
    pub fn new(summary: impl Into<String>, suggested_tags: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            suggested_tags,
        }
    }

    /// Annotator 失敗時に使う決定的な代替結果
    pub fn fallback() -> Self {
        Self::new(FALLBACK_SUMMARY, vec![FALLBACK_TAG.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(Annotation::fallback(), Annotation::fallback());
        assert_eq!(Annotation::fallback().suggested_tags, vec!["未分类".to_string()]);
    }
}
