//! Gemini による Annotator 実装
//!
//! プロンプトに種別・タイトル・本文を埋め込み、応答を JSON スキーマで固定する。
//! 応答テキストはスキーマ通りか検証してから使う。

use std::sync::Arc;

use common::error::Error;
use common::llm::{GenerateRequest, LlmProvider};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::{Annotation, ResourceType};
use crate::ports::outbound::Annotator;

/// 応答言語のデフォルト
pub const DEFAULT_LANGUAGE: &str = "简体中文";

/// システム指示（役割）
const CURATOR_ROLE: &str =
    "You are an expert knowledge curator helping a user organize their digital library.";

/// スキーマ通りの応答（両キー必須）
#[derive(Debug, Deserialize)]
struct AnnotationPayload {
    summary: String,
    #[serde(rename = "suggestedTags")]
    suggested_tags: Vec<String>,
}

pub struct GeminiAnnotator {
    provider: Arc<dyn LlmProvider>,
    language: String,
    schema: Value,
}

impl GeminiAnnotator {
    pub fn new(provider: Arc<dyn LlmProvider>, language: impl Into<String>) -> Self {
        let language = language.into();
        let schema = response_schema(&language);
        Self {
            provider,
            language,
            schema,
        }
    }
}

impl Annotator for GeminiAnnotator {
    fn annotate(
        &self,
        title: &str,
        content: &str,
        resource_type: ResourceType,
    ) -> Result<Annotation, Error> {
        let prompt = build_prompt(title, content, resource_type, &self.language);
        let request = GenerateRequest::new(&prompt)
            .with_system_instruction(CURATOR_ROLE)
            .with_response_schema(&self.schema);
        let text = self
            .provider
            .generate(&request)?
            .ok_or_else(|| Error::http(format!("No response from {}", self.provider.name())))?;
        parse_annotation(&text)
    }
}

/// 生成 AI が使えない環境（API キー未設定など）。常に失敗し、代替結果が使われる
pub struct UnavailableAnnotator {
    reason: String,
}

impl UnavailableAnnotator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Annotator for UnavailableAnnotator {
    fn annotate(&self, _title: &str, _content: &str, _t: ResourceType) -> Result<Annotation, Error> {
        Err(Error::env(self.reason.clone()))
    }
}

fn build_prompt(title: &str, content: &str, resource_type: ResourceType, language: &str) -> String {
    format!(
        "Analyze the following content metadata.\n\
         \n\
         Type: {resource_type}\n\
         Title: {title}\n\
         Content/Description: {content}\n\
         \n\
         Please provide:\n\
         1. A concise summary (max 2 sentences) capturing the core value.\n\
         2. A list of 3-5 relevant tags (keywords) for categorization.\n\
         \n\
         IMPORTANT: Please respond in {language}.\n\
         \n\
         Return the result in strict JSON format.\n"
    )
}

fn response_schema(language: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": format!("A short, insightful summary of the content in {}.", language)
            },
            "suggestedTags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": format!("A list of relevant tags in {}.", language)
            }
        },
        "required": ["summary", "suggestedTags"]
    })
}

/// 応答テキストを検証して Annotation にする（```json で囲まれていても受け付ける）
fn parse_annotation(text: &str) -> Result<Annotation, Error> {
    let trimmed = strip_code_fence(text.trim());
    let payload: AnnotationPayload = serde_json::from_str(trimmed)
        .map_err(|e| Error::json(format!("Annotation response does not match schema: {}", e)))?;
    Ok(Annotation::new(payload.summary, payload.suggested_tags))
}

fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
