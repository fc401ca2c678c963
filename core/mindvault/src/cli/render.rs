//! 一覧・詳細・集計の表示文字列を組み立てる
//!
//! 出力はすべて String で返し、書き出しは main 側で行う。

use chrono::{Local, TimeZone, Utc};
use common::error::Error;

use crate::domain::{Resource, ResourceType, TypeFilter};

/// 要約が空のときの表示
pub const EMPTY_SUMMARY: &str = "暂无摘要。";
/// 一致するものが無いときの見出しと説明
pub const EMPTY_TITLE: &str = "未找到内容";
pub const EMPTY_HINT: &str = "通过添加网络上的有趣文章、视频或想法来构建您的知识库。";

/// createdAt（エポックミリ秒）をローカル日付にする。範囲外は "-"
pub fn format_date(created_at: i64) -> String {
    Utc.timestamp_millis_opt(created_at)
        .single()
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn push_card(out: &mut String, r: &Resource, with_content: bool) {
    out.push_str(&format!("[{}] {}\n", r.id, r.title));
    out.push_str(&format!(
        "  {} · {} · {}\n",
        r.resource_type.label(),
        r.platform,
        format_date(r.created_at)
    ));
    out.push_str(&format!("  {}\n", r.url));
    let summary = if r.summary.trim().is_empty() {
        EMPTY_SUMMARY
    } else {
        r.summary.as_str()
    };
    out.push_str(&format!("  {}\n", summary));
    if !r.tags.is_empty() {
        let tags: Vec<String> = r.tags.iter().map(|t| format!("#{}", t)).collect();
        out.push_str(&format!("  {}\n", tags.join(" ")));
    }
    if !r.user_notes.is_empty() {
        out.push_str(&format!("  笔记: {}\n", r.user_notes));
    }
    if with_content {
        if let Some(content) = r.content_raw.as_deref() {
            out.push_str(&format!("  内容: {}\n", content));
        }
    }
}

/// 1 件分のカード
pub fn render_card(resource: &Resource) -> String {
    let mut out = String::new();
    push_card(&mut out, resource, false);
    out
}

/// show 用（本文つき）
pub fn render_detail(resource: &Resource) -> String {
    let mut out = String::new();
    push_card(&mut out, resource, true);
    out
}

/// 一覧（見出し・件数・カード、または空表示）
pub fn render_list(type_filter: TypeFilter, search: &str, items: &[&Resource]) -> String {
    let mut out = format!("{}  ({} 个结果)\n", type_filter.heading(), items.len());
    if !search.is_empty() {
        out.push_str(&format!("搜索: {}\n", search));
    }
    out.push('\n');
    if items.is_empty() {
        out.push_str(&format!("{}\n{}\n", EMPTY_TITLE, EMPTY_HINT));
        return out;
    }
    for (i, r) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_card(&mut out, r, false);
    }
    out
}

/// 総数と種別ごとの件数
pub fn render_stats(resources: &[Resource]) -> String {
    let mut out = format!("已收录 {} 条内容\n", resources.len());
    for t in ResourceType::ALL {
        let count = resources.iter().filter(|r| r.resource_type == t).count();
        out.push_str(&format!("  {:<8} {}\n", t.as_str(), count));
    }
    out
}

/// --json 用。保存形式と同じ camelCase で出す
pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(|e| Error::json(e.to_string()))
}
