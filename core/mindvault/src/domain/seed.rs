//! 初回起動時（スロットが無い・読めない）に表示するサンプル
//!
//! createdAt は読み込み時刻を基準に決める。

use crate::domain::{Resource, ResourceType};
use common::domain::ResourceId;

/// 2 件目は 1 件目より 100 秒古い
const SECOND_ITEM_AGE_MS: i64 = 100_000;

/// サンプルの 2 件（新しい順）
pub fn seed_resources(now_ms: i64) -> Vec<Resource> {
    vec![
        Resource {
            id: ResourceId::new("1"),
            title: "深入理解 React Server Components".to_string(),
            url: "https://react.dev".to_string(),
            resource_type: ResourceType::Article,
            platform: "Official Docs".to_string(),
            content_raw: Some(
                "React Server Components allow developers to write components that run exclusively on the server."
                    .to_string(),
            ),
            summary: "深入探讨 RSC 如何改变现代 Web 开发中的数据获取范式，重点在于服务器端渲染的优势。"
                .to_string(),
            user_notes: "关键点：通过在服务器上渲染来减小 Bundle 体积。".to_string(),
            tags: vec!["React".to_string(), "前端".to_string(), "性能优化".to_string()],
            created_at: now_ms,
        },
        Resource {
            id: ResourceId::new("2"),
            title: "AI 智能体的未来".to_string(),
            url: "https://twitter.com".to_string(),
            resource_type: ResourceType::Tweet,
            platform: "X".to_string(),
            content_raw: Some("Agents are the new apps.".to_string()),
            summary: "讨论自主智能体（Autonomous Agents）将如何取代传统的 SaaS 工作流，成为新的应用形态。"
                .to_string(),
            user_notes: String::new(),
            tags: vec!["AI".to_string(), "未来科技".to_string(), "Agent".to_string()],
            created_at: now_ms - SECOND_ITEM_AGE_MS,
        },
    ]
}
