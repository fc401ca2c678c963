//! ファイルによる SlotStorage 実装
//!
//! スロット 1 つ = `<dir>/<key>.json` 1 ファイル。一時ファイルに書いてから rename で置き換える。

use std::path::PathBuf;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::FileSystem;

use crate::ports::outbound::SlotStorage;

pub struct FileSlotStorage {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    /// スロットのファイルパス（キーはファイル名に使える文字のみ）
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, Error> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::invalid_argument(format!("invalid slot key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.slot_path(key)?;
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        self.fs.read_to_string(&path).map(Some)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.slot_path(key)?;
        self.fs.create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        self.fs.write(&tmp, value)?;
        self.fs.rename(&tmp, &path)
    }
}
