//! リソースストア（メモリ上の一覧と永続スロットを常に一致させる）
//!
//! 変更はすべて「新しい一覧を作る → スロットへ全体を書く → 成功したら差し替える」の順で行う。
//! 書き込みに失敗した変更はメモリにも反映しない。

use std::collections::HashSet;
use std::sync::Arc;

use common::domain::ResourceId;
use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};

use crate::domain::seed::seed_resources;
use crate::domain::Resource;
use crate::ports::outbound::SlotStorage;

/// 一覧を保存するスロット名
pub const RESOURCES_SLOT: &str = "mindvault_resources";

/// Resource 一覧の唯一の持ち主
pub struct ResourceStore {
    storage: Arc<dyn SlotStorage>,
    log: Arc<dyn Log>,
    resources: Vec<Resource>,
}

impl ResourceStore {
    /// スロットから読み込む。無い・読めない・壊れている場合はサンプルで始める（書き込みはしない）
    pub fn load(storage: Arc<dyn SlotStorage>, clock: &dyn Clock, log: Arc<dyn Log>) -> Self {
        let resources = match read_resources(storage.as_ref()) {
            Ok(resources) => {
                let (resources, dropped) = dedup_by_id(resources);
                if dropped > 0 {
                    let _ = log.log(
                        &LogRecord::new(LogLevel::Warn, "usecase", "store", "duplicate ids dropped")
                            .with_field("dropped", serde_json::json!(dropped)),
                    );
                }
                resources
            }
            Err(reason) => {
                let _ = log.log(
                    &LogRecord::new(LogLevel::Warn, "usecase", "store", "load fallback to seed data")
                        .with_field("reason", serde_json::json!(reason)),
                );
                seed_resources(clock.now_ms() as i64)
            }
        };
        Self {
            storage,
            log,
            resources,
        }
    }

    /// 表示順（新しいものが先頭）の一覧
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get(&self, id: &ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &ResourceId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// 一覧全体をスロットへ書き出す
    pub fn persist(&self) -> Result<(), Error> {
        self.write_all(&self.resources, "persist")
    }

    /// 先頭に追加して保存する。既存の ID と重なる場合はエラー
    pub fn insert(&mut self, resource: Resource) -> Result<(), Error> {
        if self.contains(&resource.id) {
            return Err(Error::invalid_argument(format!(
                "resource id already exists: {}",
                resource.id
            )));
        }
        let mut next = Vec::with_capacity(self.resources.len() + 1);
        next.push(resource);
        next.extend(self.resources.iter().cloned());
        self.commit(next, "insert")
    }

    /// ID が一致するものを取り除いて保存する。無ければ何もしない（false）
    pub fn remove_by_id(&mut self, id: &ResourceId) -> Result<bool, Error> {
        if !self.contains(id) {
            return Ok(false);
        }
        let next: Vec<Resource> = self
            .resources
            .iter()
            .filter(|r| &r.id != id)
            .cloned()
            .collect();
        self.commit(next, "remove")?;
        Ok(true)
    }

    /// userNotes だけを置き換えて保存する。無ければ何もしない（false）
    pub fn update_notes(&mut self, id: &ResourceId, notes: &str) -> Result<bool, Error> {
        if !self.contains(id) {
            return Ok(false);
        }
        let next: Vec<Resource> = self
            .resources
            .iter()
            .map(|r| {
                if &r.id == id {
                    Resource {
                        user_notes: notes.to_string(),
                        ..r.clone()
                    }
                } else {
                    r.clone()
                }
            })
            .collect();
        self.commit(next, "update_notes")?;
        Ok(true)
    }

    fn commit(&mut self, next: Vec<Resource>, operation: &str) -> Result<(), Error> {
        self.write_all(&next, operation)?;
        self.resources = next;
        Ok(())
    }

    fn write_all(&self, resources: &[Resource], operation: &str) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(resources)
            .map_err(|e| Error::json(format!("Failed to serialize resources: {}", e)))?;
        self.storage.write(RESOURCES_SLOT, &json)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "store", "store write")
                .with_field("operation", serde_json::json!(operation))
                .with_field("count", serde_json::json!(resources.len())),
        );
        Ok(())
    }
}

/// スロットを読んでパースする。失敗理由は文字列でログに残すだけなので String で返す
fn read_resources(storage: &dyn SlotStorage) -> Result<Vec<Resource>, String> {
    let raw = storage
        .read(RESOURCES_SLOT)
        .map_err(|e| format!("unreadable: {}", e))?
        .ok_or_else(|| "absent".to_string())?;
    serde_json::from_str::<Vec<Resource>>(&raw).map_err(|e| format!("unparsable: {}", e))
}

/// 先に現れたものを残して重複 ID を除く
fn dedup_by_id(resources: Vec<Resource>) -> (Vec<Resource>, usize) {
    let before = resources.len();
    let mut seen = HashSet::new();
    let kept: Vec<Resource> = resources
        .into_iter()
        .filter(|r| seen.insert(r.id.clone()))
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}
