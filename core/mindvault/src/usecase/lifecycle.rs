//! リソースの作成・ノート更新・削除のユースケース
//!
//! 作成時のみ Annotator を呼ぶ（ブロッキング）。Annotator の失敗は代替結果に置き換え、
//! 呼び出し側にはエラーとして返さない。

use std::sync::Arc;

use common::domain::ResourceId;
use common::error::Error;
use common::ports::outbound::{Clock, IdGenerator, Log, LogLevel, LogRecord};

use crate::domain::{Annotation, Approval, Resource, ResourceDraft};
use crate::ports::outbound::{Annotator, DeleteApproval};
use crate::usecase::ResourceStore;

/// 既存 ID と衝突したときに ID を引き直す上限
const MAX_ID_ATTEMPTS: usize = 16;

/// 削除の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// 確認で拒否された（ストアは変更なし）
    Declined,
    NotFound,
}

/// 作成・更新・削除をまとめるユースケース
pub struct ResourceLifecycle {
    annotator: Arc<dyn Annotator>,
    approval: Arc<dyn DeleteApproval>,
    id_gen: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl ResourceLifecycle {
    pub fn new(
        annotator: Arc<dyn Annotator>,
        approval: Arc<dyn DeleteApproval>,
        id_gen: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            annotator,
            approval,
            id_gen,
            clock,
            log,
        }
    }

    /// 要約とタグを生成して新しいリソースを先頭に追加する
    pub fn create(&self, store: &mut ResourceStore, draft: &ResourceDraft) -> Result<Resource, Error> {
        let annotation = self.annotate(draft);
        let resource = Resource {
            id: self.fresh_id(store)?,
            title: draft.title().to_string(),
            url: draft.url().to_string(),
            resource_type: draft.resource_type(),
            platform: draft.platform().to_string(),
            content_raw: draft.content_raw().map(str::to_string),
            summary: annotation.summary,
            user_notes: String::new(),
            tags: annotation.suggested_tags,
            created_at: self.clock.now_ms() as i64,
        };
        store.insert(resource.clone())?;
        Ok(resource)
    }

    /// Annotator を 1 回だけ呼ぶ。失敗時は代替結果を返す
    pub fn annotate(&self, draft: &ResourceDraft) -> Annotation {
        match self.annotator.annotate(
            draft.title(),
            draft.content_for_annotation(),
            draft.resource_type(),
        ) {
            Ok(annotation) => annotation,
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, "usecase", "annotation", "annotation fallback")
                        .with_field("error", serde_json::json!(e.to_string())),
                );
                Annotation::fallback()
            }
        }
    }

    /// 確認が取れた場合のみ削除する
    pub fn delete(&self, store: &mut ResourceStore, id: &ResourceId) -> Result<DeleteOutcome, Error> {
        let Some(resource) = store.get(id) else {
            return Ok(DeleteOutcome::NotFound);
        };
        match self.approval.confirm_delete(resource)? {
            Approval::Denied => Ok(DeleteOutcome::Declined),
            Approval::Approved => {
                store.remove_by_id(id)?;
                Ok(DeleteOutcome::Deleted)
            }
        }
    }

    /// ノートの置き換え（確認なし）
    pub fn update_notes(
        &self,
        store: &mut ResourceStore,
        id: &ResourceId,
        notes: &str,
    ) -> Result<bool, Error> {
        store.update_notes(id, notes)
    }

    fn fresh_id(&self, store: &ResourceStore) -> Result<ResourceId, Error> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.id_gen.next_id();
            if !store.contains(&id) {
                return Ok(id);
            }
        }
        Err(Error::system("could not generate a unique resource id"))
    }
}
