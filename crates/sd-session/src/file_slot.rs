use crate::slot::SessionSlot;
use crate::{Result as SessionErrorResult, SessionError};

use std::path::PathBuf;

/// Session slot backed by a single JSON file.
pub struct FileSessionSlot {
    path: PathBuf,
}

impl FileSessionSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionSlot for FileSessionSlot {
    fn read(&self) -> SessionErrorResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| SessionError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(Some(contents))
    }

    fn write(&self, record: &str) -> SessionErrorResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| SessionError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        std::fs::write(&self.path, record).map_err(|e| SessionError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    fn clear(&self) -> SessionErrorResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
