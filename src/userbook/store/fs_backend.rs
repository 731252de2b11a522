use super::StorageBackend;
use crate::error::{Result, UserbookError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn item_filename(key: &str) -> String {
        format!("{}.json", key)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(UserbookError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.root.join(Self::item_filename(key));
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(UserbookError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.root.join(Self::item_filename(key));

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(UserbookError::Io)?;
        fs::rename(&tmp, &target).map_err(UserbookError::Io)?;

        tracing::trace!(path = %target.display(), bytes = value.len(), "wrote item");
        Ok(())
    }

    fn item_location(&self, key: &str) -> PathBuf {
        self.root.join(Self::item_filename(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        assert_eq!(backend.get_item("users").unwrap(), None);
    }

    #[test]
    fn set_then_get_returns_value() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("nested"));
        backend.set_item("users", "[]").unwrap();
        assert_eq!(backend.get_item("users").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested/users.json").exists());
    }

    #[test]
    fn set_overwrites_and_leaves_no_tmp_files() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        backend.set_item("users", "first").unwrap();
        backend.set_item("users", "second").unwrap();

        assert_eq!(backend.get_item("users").unwrap().as_deref(), Some("second"));
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn item_location_points_at_json_file() {
        let backend = FsBackend::new(PathBuf::from("/data"));
        assert_eq!(
            backend.item_location("people"),
            PathBuf::from("/data/people.json")
        );
    }
}
