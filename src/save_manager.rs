//! Saving and loading the economy state with a checksummed binary format.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use directories::ProjectDirs;
use sha2::{Digest, Sha256};

use crate::constants::SAVE_VERSION_MAGIC;
use crate::economy::state::EconomyState;

/// Persists the whole aggregate on every mutation (best-effort) and on the
/// autosave timer. There is no migration scheme: a magic bump invalidates
/// old files and the caller starts a fresh game.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager writing to the platform config directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "grandline").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// Creates a SaveManager writing to an explicit file path.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.save_path
    }

    /// Saves the state to disk.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized economy state (variable length)
    /// - SHA256 checksum over the preceding bytes (32 bytes)
    pub fn save(&self, state: &EconomyState) -> io::Result<()> {
        let data = bincode::serialize(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }

    /// Loads the state from disk, verifying magic and checksum.
    pub fn load(&self) -> io::Result<EconomyState> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid save version: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();
        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}
