use crate::validate::is_valid_vid;
use parking_lot::RwLock;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("VID must be a 6-digit number between 100000 and 999999")]
    InvalidVid,
    #[error("failed to persist VID: {0}")]
    Storage(#[from] io::Error),
}

/// Persistence port for the last-used VID.
pub trait VidStore: Send + Sync {
    fn load(&self) -> io::Result<Option<String>>;
    fn save(&self, vid: &str) -> io::Result<()>;
    fn clear(&self) -> io::Result<()>;
}

/// Keeps the identifier in a single file under the data directory.
pub struct FileVidStore {
    path: PathBuf,
}

impl FileVidStore {
    pub const FILE_NAME: &'static str = "ivao_vid";

    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            path: data_dir.join(Self::FILE_NAME),
        }
    }
}

impl VidStore for FileVidStore {
    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let vid = contents.trim();
                Ok((!vid.is_empty()).then(|| vid.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, vid: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, vid)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory store; backs tests and any caller that does not want
/// persistence.
#[derive(Default)]
pub struct MemoryVidStore {
    vid: RwLock<Option<String>>,
}

impl VidStore for MemoryVidStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.vid.read().clone())
    }

    fn save(&self, vid: &str) -> io::Result<()> {
        *self.vid.write() = Some(vid.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.vid.write() = None;
        Ok(())
    }
}

/// The current user identity. Restored from the store at construction;
/// every change is validated and persisted before it becomes visible.
pub struct Session {
    vid: RwLock<Option<String>>,
    store: Box<dyn VidStore>,
}

impl Session {
    pub fn new(store: Box<dyn VidStore>) -> Result<Self, SessionError> {
        let vid = store.load()?.filter(|v| {
            let valid = is_valid_vid(v);
            if !valid {
                warn!(vid = %v, "ignoring malformed persisted VID");
            }
            valid
        });
        Ok(Self {
            vid: RwLock::new(vid),
            store,
        })
    }

    pub fn vid(&self) -> Option<String> {
        self.vid.read().clone()
    }

    pub fn set_vid(&self, vid: &str) -> Result<(), SessionError> {
        let cleaned = vid.trim();
        if !is_valid_vid(cleaned) {
            return Err(SessionError::InvalidVid);
        }
        self.store.save(cleaned)?;
        *self.vid.write() = Some(cleaned.to_string());
        Ok(())
    }

    pub fn clear_vid(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        *self.vid.write() = None;
        Ok(())
    }
}
