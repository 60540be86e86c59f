//! A payload store backed by a directory, shared by every process that can see it.
//!
//! Each entry is one `<token>.json` file. Writes land in a temporary file and
//! are renamed into place, so readers never see a partial payload. A consumer
//! claims an entry by renaming it to a name only it knows before reading; the
//! rename succeeds for exactly one consumer.
use crate::error::ChannelError;
use crate::store::PayloadStore;
use crate::token::Token;
use log::debug;
use rand::Rng;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const ENTRY_EXT: &str = "json";

#[derive(Debug, Clone)]
pub struct FilesystemPayloadStore {
    dir: PathBuf,
}

impl FilesystemPayloadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, token: &Token) -> PathBuf {
        self.dir.join(format!("{}.{}", token, ENTRY_EXT))
    }

    // Dotted names never parse as tokens, so `keys` skips them.
    fn scratch_path(&self, token: &Token, purpose: &str) -> PathBuf {
        let nonce: u64 = rand::rng().random();
        self.dir.join(format!(".{}.{}-{:016x}", token, purpose, nonce))
    }

    fn io_error(path: &Path, source: std::io::Error) -> ChannelError {
        ChannelError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl PayloadStore for FilesystemPayloadStore {
    fn put(&self, token: &Token, bytes: Vec<u8>) -> Result<(), ChannelError> {
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(&self.dir, e))?;
        let tmp = self.scratch_path(token, "tmp");
        fs::write(&tmp, &bytes).map_err(|e| Self::io_error(&tmp, e))?;

        let path = self.entry_path(token);
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(Self::io_error(&path, e));
        }
        debug!("Stored {} ({} bytes).", path.display(), bytes.len());
        Ok(())
    }

    fn take(&self, token: &Token) -> Result<Option<Vec<u8>>, ChannelError> {
        let path = self.entry_path(token);
        let claimed = self.scratch_path(token, "claimed");
        match fs::rename(&path, &claimed) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::io_error(&path, e)),
        }
        let bytes = fs::read(&claimed).map_err(|e| Self::io_error(&claimed, e));
        let _ = fs::remove_file(&claimed);
        bytes.map(Some)
    }

    fn peek(&self, token: &Token) -> Result<Option<Vec<u8>>, ChannelError> {
        let path = self.entry_path(token);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(&path, e)),
        }
    }

    fn remove(&self, token: &Token) -> Result<bool, ChannelError> {
        let path = self.entry_path(token);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Self::io_error(&path, e)),
        }
    }

    fn keys(&self) -> Result<Vec<Token>, ChannelError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Self::io_error(&self.dir, e)),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Self::io_error(&self.dir, e))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(ENTRY_EXT) {
                continue;
            }
            if let Some(token) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| Token::parse(s).ok())
            {
                keys.push(token);
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn name(&self) -> &'static str {
        "FilesystemPayloadStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;
    use tempfile::tempdir;

    fn token(raw: &str) -> Token {
        Token::parse(raw).unwrap()
    }

    #[test]
    fn put_then_take_once() {
        let dir = tempdir().unwrap();
        let store = FilesystemPayloadStore::new(dir.path().join("store"));
        let t = token("PRINT_PAYLOAD_1");

        store.put(&t, b"payload".to_vec()).unwrap();
        assert!(dir.path().join("store/PRINT_PAYLOAD_1.json").exists());
        assert_eq!(store.keys().unwrap(), vec![t.clone()]);

        assert_eq!(store.take(&t).unwrap(), Some(b"payload".to_vec()));
        assert_eq!(store.take(&t).unwrap(), None);
        assert!(store.keys().unwrap().is_empty());
        assert_eq!(fs::read_dir(store.dir()).unwrap().count(), 0);
    }

    #[test]
    fn missing_directory_has_no_keys() {
        let dir = tempdir().unwrap();
        let store = FilesystemPayloadStore::new(dir.path().join("never-created"));
        assert!(store.keys().unwrap().is_empty());
        assert_eq!(store.take(&token("PRINT_PAYLOAD_1")).unwrap(), None);
    }

    #[test]
    fn stray_files_are_not_keys() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("bad name.json"), "x").unwrap();
        fs::write(dir.path().join(".PRINT_PAYLOAD_1.tmp-00"), "x").unwrap();
        let store = FilesystemPayloadStore::new(dir.path());
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn concurrent_consumers_get_one_copy() {
        let dir = tempdir().unwrap();
        let store = Arc::new(FilesystemPayloadStore::new(dir.path()));
        let t = token("PRINT_PAYLOAD_race");
        store.put(&t, b"once".to_vec()).unwrap();

        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                let t = t.clone();
                thread::spawn(move || {
                    barrier.wait();
                    store.take(&t).unwrap()
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .filter_map(|h| h.join().unwrap())
            .count();
        assert_eq!(winners, 1);
    }
}
