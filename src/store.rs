use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Basename uploads are stored under; the uploaded extension is kept so a
/// CSV master stays a CSV on disk.
const MASTER_BASENAME: &str = "master_data";

/// Keeps track of which file is the current master spreadsheet. The active
/// path is persisted to a one-line pointer file so it survives restarts.
/// Replacement is wholesale; concurrent writers are out of scope.
#[derive(Clone)]
pub struct MasterStore {
    upload_dir: PathBuf,
    pointer_file: PathBuf,
    default_master: PathBuf,
}

impl MasterStore {
    pub fn new(upload_dir: PathBuf, pointer_file: PathBuf) -> Self {
        let default_master = upload_dir.join("Salary_Slip_Master_Data.xlsx");
        Self {
            upload_dir,
            pointer_file,
            default_master,
        }
    }

    /// Resolve the currently active master path. Falls back to the default
    /// location when no pointer was ever saved, or when the pointed-to file
    /// has since disappeared.
    pub fn active_path(&self) -> PathBuf {
        match fs::read_to_string(&self.pointer_file) {
            Ok(contents) => {
                let path = PathBuf::from(contents.trim());
                if path.as_os_str().is_empty() || !path.exists() {
                    warn!(pointer = %path.display(), "master pointer is stale, using default");
                    self.default_master.clone()
                } else {
                    path
                }
            }
            Err(_) => self.default_master.clone(),
        }
    }

    /// Replace the master spreadsheet with freshly uploaded bytes and
    /// persist the new pointer. The previous master is simply superseded.
    pub fn replace(&self, extension: &str, data: &[u8]) -> io::Result<PathBuf> {
        let path = self
            .upload_dir
            .join(format!("{MASTER_BASENAME}.{extension}"));
        fs::write(&path, data)?;
        fs::write(&self.pointer_file, path.display().to_string())?;
        info!(path = %path.display(), bytes = data.len(), "master spreadsheet replaced");
        Ok(path)
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_without_pointer() {
        let dir = tempfile::tempdir().unwrap();
        let store = MasterStore::new(
            dir.path().to_path_buf(),
            dir.path().join("pointer.txt"),
        );
        assert_eq!(
            store.active_path(),
            dir.path().join("Salary_Slip_Master_Data.xlsx")
        );
    }

    #[test]
    fn replace_persists_pointer_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let pointer = dir.path().join("pointer.txt");
        let store = MasterStore::new(dir.path().to_path_buf(), pointer.clone());

        let saved = store.replace("csv", b"emp code,month\nE1,Jan\n").unwrap();
        assert!(saved.ends_with("master_data.csv"));

        // A fresh instance simulates a restart.
        let reopened = MasterStore::new(dir.path().to_path_buf(), pointer);
        assert_eq!(reopened.active_path(), saved);
    }

    #[test]
    fn stale_pointer_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let pointer = dir.path().join("pointer.txt");
        fs::write(&pointer, dir.path().join("gone.csv").display().to_string()).unwrap();

        let store = MasterStore::new(dir.path().to_path_buf(), pointer);
        assert_eq!(
            store.active_path(),
            dir.path().join("Salary_Slip_Master_Data.xlsx")
        );
    }
}
