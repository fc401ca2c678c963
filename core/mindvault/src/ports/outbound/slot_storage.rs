//! 永続スロット Outbound ポート
//!
//! 名前付きスロットに文字列を丸ごと保存する key-value ストア。
//! 書き込みは値全体の置き換えで、途中状態は読まれない。

use common::error::Error;

/// 名前付きスロットの読み書き
pub trait SlotStorage: Send + Sync {
    /// スロットの値を返す（存在しなければ None）
    fn read(&self, key: &str) -> Result<Option<String>, Error>;

    /// スロットの値を丸ごと置き換える
    fn write(&self, key: &str, value: &str) -> Result<(), Error>;
}
