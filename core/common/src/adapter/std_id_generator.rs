//! ResourceId を生成する IdGenerator の標準実装（Clock + グローバルシーケンス）

use crate::domain::ResourceId;
use crate::ports::outbound::{Clock, IdGenerator};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static LAST_ID: AtomicU64 = AtomicU64::new(0);

const EPOCH_MS: u64 = 1577836800000; // 2020-01-01 00:00:00 UTC
const SEQ_BITS: u32 = 8;
const BASE: u64 = 62;
/// 62^11 > u64::MAX なので、どの値も桁あふれせずに表せる
const WIDTH: usize = 11;

/// 0-9, A-Z, a-z の順で辞書順＝数値順になるbase62
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Clock + グローバルシーケンスで ResourceId を生成する標準実装
///
/// 値は「経過ミリ秒 << 8 | シーケンス」。同一ミリ秒内で 256 件を超えた場合や時計が戻った場合は
/// 前回値 + 1 を使うため、プロセス内では常に単調増加し、待ちは発生しない。
pub struct StdIdGenerator {
    clock: Arc<dyn Clock>,
}

impl StdIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl IdGenerator for StdIdGenerator {
    fn next_id(&self) -> ResourceId {
        let ms_rel = self.clock.now_ms().saturating_sub(EPOCH_MS);
        let base = ms_rel.checked_shl(SEQ_BITS).unwrap_or(u64::MAX);
        let prev = LAST_ID
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(base.max(prev.saturating_add(1)))
            })
            .unwrap_or_else(|p| p);
        ResourceId::new(to_base62(base.max(prev.saturating_add(1))))
    }
}

fn to_base62(mut n: u64) -> String {
    let mut buf = [b'0'; WIDTH];
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }
    buf.iter().map(|&b| b as char).collect()
}
