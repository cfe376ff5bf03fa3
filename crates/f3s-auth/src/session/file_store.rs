//! Session slots persisted to a JSON file.
//!
//! The file is the CLI's analogue of browser local storage: a flat object
//! keyed by slot name, readable only by the owner on unix.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use f3s_core::{AppError, AppResult};

use super::store::{SessionSlot, SessionStore};

type SlotMap = BTreeMap<String, String>;

/// File-backed [`SessionStore`].
///
/// Every read goes to disk, so two processes sharing the file observe each
/// other's writes on their next call (last write wins).
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    /// Creates a store over `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> SlotMap {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return SlotMap::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read session file");
                return SlotMap::new();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Session file is corrupt, ignoring");
            SlotMap::new()
        })
    }

    fn save(&self, slots: &SlotMap) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::with_source(
                    f3s_core::ErrorKind::Storage,
                    format!("Failed to create directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let contents = serde_json::to_string_pretty(slots)?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path).map_err(|e| {
            AppError::with_source(
                f3s_core::ErrorKind::Storage,
                format!("Failed to open {} for writing", self.path.display()),
                e,
            )
        })?;
        file.write_all(contents.as_bytes())?;

        debug!(path = %self.path.display(), slots = slots.len(), "Session file written");
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut SlotMap)) -> AppResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut slots = self.load();
        apply(&mut slots);
        if slots.is_empty() {
            return match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            };
        }
        self.save(&slots)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, slot: SessionSlot) -> Option<String> {
        self.load().remove(slot.key())
    }

    fn set(&self, slot: SessionSlot, value: &str) -> AppResult<()> {
        self.update(|slots| {
            slots.insert(slot.key().to_string(), value.to_string());
        })
    }

    fn remove(&self, slot: SessionSlot) -> AppResult<()> {
        self.update(|slots| {
            slots.remove(slot.key());
        })
    }

    fn clear(&self) -> AppResult<()> {
        self.update(SlotMap::clear)
    }
}
