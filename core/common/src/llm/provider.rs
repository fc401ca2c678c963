//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// 1 回分の生成リクエスト
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    /// ユーザープロンプト
    pub prompt: &'a str,
    /// システム指示（オプション）
    pub system_instruction: Option<&'a str>,
    /// 応答 JSON のスキーマ。指定時は応答を application/json に固定する
    pub response_schema: Option<&'a Value>,
}

impl<'a> GenerateRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            system_instruction: None,
            response_schema: None,
        }
    }

    pub fn with_system_instruction(mut self, system: &'a str) -> Self {
        self.system_instruction = Some(system);
        self
    }

    pub fn with_response_schema(mut self, schema: &'a Value) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// LLMプロバイダのトレイト
///
/// 各プロバイダはペイロード生成・HTTP・応答解析を実装し、`generate` で 1 往復する。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    fn make_request_payload(&self, request: &GenerateRequest<'_>) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 通信失敗・非 2xx 応答
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - パース失敗・API エラー
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;

    /// ペイロード生成 → HTTP → テキスト抽出を 1 回だけ行う（リトライなし）
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<Option<String>, Error> {
        let payload = self.make_request_payload(request)?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response_json = self.make_http_request(&request_json)?;
        self.parse_response_text(&response_json)
    }
}
