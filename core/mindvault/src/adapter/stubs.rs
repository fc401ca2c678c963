//! テスト用: ポートのメモリ実装・固定値実装

#[cfg(test)]
mod stub {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use common::domain::ResourceId;
    use common::error::Error;
    use common::ports::outbound::{Clock, IdGenerator};

    use crate::domain::{Annotation, Approval, Resource, ResourceType};
    use crate::ports::outbound::{Annotator, DeleteApproval, SlotStorage};

    /// メモリ上の SlotStorage。書き込み回数を数え、書き込み失敗を注入できる
    #[derive(Default)]
    pub struct MemorySlotStorage {
        slots: Mutex<HashMap<String, String>>,
        writes: AtomicUsize,
        fail_writes: AtomicBool,
    }

    impl MemorySlotStorage {
        pub fn with_slot(key: &str, value: &str) -> Self {
            let s = Self::default();
            s.slots
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            s
        }

        pub fn slot(&self, key: &str) -> Option<String> {
            self.slots.lock().unwrap().get(key).cloned()
        }

        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        pub fn set_fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }
    }

    impl SlotStorage for MemorySlotStorage {
        fn read(&self, key: &str) -> Result<Option<String>, Error> {
            Ok(self.slot(key))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), Error> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(Error::io_msg("disk full"));
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.slots
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// 固定の結果（または失敗）を返す Annotator。受け取った引数を記録する
    pub struct StubAnnotator {
        result: Result<Annotation, String>,
        pub calls: Mutex<Vec<(String, String, ResourceType)>>,
    }

    impl StubAnnotator {
        pub fn returning(summary: &str, tags: &[&str]) -> Self {
            Self {
                result: Ok(Annotation::new(
                    summary,
                    tags.iter().map(|t| t.to_string()).collect(),
                )),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(msg: &str) -> Self {
            Self {
                result: Err(msg.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl Annotator for StubAnnotator {
        fn annotate(
            &self,
            title: &str,
            content: &str,
            resource_type: ResourceType,
        ) -> Result<Annotation, Error> {
            self.calls
                .lock()
                .unwrap()
                .push((title.to_string(), content.to_string(), resource_type));
            self.result.clone().map_err(Error::http)
        }
    }

    /// 常に指定された結果を返す削除確認。呼ばれた回数を数える
    pub struct StubApproval {
        result: Approval,
        pub asked: AtomicUsize,
    }

    impl StubApproval {
        pub fn approved() -> Self {
            Self {
                result: Approval::Approved,
                asked: AtomicUsize::new(0),
            }
        }

        pub fn denied() -> Self {
            Self {
                result: Approval::Denied,
                asked: AtomicUsize::new(0),
            }
        }
    }

    impl DeleteApproval for StubApproval {
        fn confirm_delete(&self, _resource: &Resource) -> Result<Approval, Error> {
            self.asked.fetch_add(1, Ordering::SeqCst);
            Ok(self.result)
        }
    }

    /// 固定時刻の Clock
    pub struct FixedClock(pub u64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u64 {
            self.0
        }
    }

    /// "id-1", "id-2", ... を順に返す IdGenerator
    #[derive(Default)]
    pub struct SeqIdGenerator {
        next: AtomicU64,
    }

    impl IdGenerator for SeqIdGenerator {
        fn next_id(&self) -> ResourceId {
            let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
            ResourceId::new(format!("id-{}", n))
        }
    }

    /// 常に同じ ID を返す IdGenerator（衝突時の挙動確認用）
    pub struct ConstIdGenerator(pub &'static str);

    impl IdGenerator for ConstIdGenerator {
        fn next_id(&self) -> ResourceId {
            ResourceId::new(self.0)
        }
    }
}

#[cfg(test)]
pub use stub::*;
