//! Persistence collaborator: keyed blob storage plus the checksummed
//! progress codec.
//!
//! Save failures are tolerated by design; the game logs them and carries on
//! with in-memory state. Malformed blobs decode to `None` and callers fall
//! back to defaults, so a corrupt save file can never take the game down.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::warn;
use sha2::{Digest, Sha256};

use crate::constants::SAVE_VERSION_MAGIC;
use crate::progress::{LevelProgress, Progress};

/// Key under which the serialized progress table is stored.
pub const PROGRESS_KEY: &str = "progress";
/// Key under which the remembered player display name is stored.
pub const PLAYER_NAME_KEY: &str = "player";

/// Keyed blob storage. `save` reports success but callers tolerate failure;
/// `load` returns `None` for both absent and unreadable entries.
pub trait SaveStore {
    fn load(&self, key: &str) -> Option<Vec<u8>>;
    fn save(&mut self, key: &str, blob: &[u8]) -> bool;
    fn remove(&mut self, key: &str);
}

/// One file per key under the platform config directory.
pub struct FileSaveStore {
    save_dir: PathBuf,
}

impl FileSaveStore {
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "mathtrek").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;
        Self::with_dir(project_dirs.config_dir().to_path_buf())
    }

    /// Store rooted at an explicit directory, for embedders and tests.
    pub fn with_dir(save_dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.save_dir.join(format!("{}.dat", key))
    }
}

impl SaveStore for FileSaveStore {
    fn load(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.path_for(key)).ok()
    }

    fn save(&mut self, key: &str, blob: &[u8]) -> bool {
        match fs::write(self.path_for(key), blob) {
            Ok(()) => true,
            Err(err) => {
                warn!("failed to write save key '{}': {}", key, err);
                false
            }
        }
    }

    fn remove(&mut self, key: &str) {
        // Removing an absent key is fine
        let _ = fs::remove_file(self.path_for(key));
    }
}

/// In-memory store for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemorySaveStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemorySaveStore {
    fn load(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, blob: &[u8]) -> bool {
        self.entries.insert(key.to_string(), blob.to_vec());
        true
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Encodes the progress table into the save blob.
///
/// Blob layout:
/// - Version magic (8 bytes)
/// - Payload length (4 bytes)
/// - Bincode-serialized level records (variable length)
/// - SHA256 checksum over everything above (32 bytes)
pub fn encode_progress(progress: &Progress) -> Option<Vec<u8>> {
    let data = match bincode::serialize(progress.levels()) {
        Ok(data) => data,
        Err(err) => {
            warn!("failed to serialize progress: {}", err);
            return None;
        }
    };
    let data_len = data.len() as u32;

    let mut hasher = Sha256::new();
    hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
    hasher.update(data_len.to_le_bytes());
    hasher.update(&data);
    let checksum = hasher.finalize();

    let mut blob = Vec::with_capacity(12 + data.len() + 32);
    blob.extend_from_slice(&SAVE_VERSION_MAGIC.to_le_bytes());
    blob.extend_from_slice(&data_len.to_le_bytes());
    blob.extend_from_slice(&data);
    blob.extend_from_slice(&checksum);
    Some(blob)
}

/// Decodes a progress blob. Bad magic, truncation, a checksum mismatch or
/// an invalid level table all yield `None`, which callers treat exactly
/// like an absent save.
pub fn decode_progress(blob: &[u8]) -> Option<Progress> {
    if blob.len() < 12 + 32 {
        return None;
    }

    let magic = u64::from_le_bytes(blob[0..8].try_into().ok()?);
    if magic != SAVE_VERSION_MAGIC {
        return None;
    }

    let data_len = u32::from_le_bytes(blob[8..12].try_into().ok()?) as usize;
    if blob.len() != 12 + data_len + 32 {
        return None;
    }
    let data = &blob[12..12 + data_len];
    let stored_checksum = &blob[12 + data_len..];

    let mut hasher = Sha256::new();
    hasher.update(&blob[0..12]);
    hasher.update(data);
    if stored_checksum != hasher.finalize().as_slice() {
        return None;
    }

    let levels: Vec<LevelProgress> = bincode::deserialize(data).ok()?;
    Progress::from_levels(levels)
}
