use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::ContactStore;
use crate::domain::Contact;
use crate::errors::AppError;

pub const STORAGE_PATH: &str = "./data/contacts.json";

const EMPTY_LIST: &str = "[]";

/// Contacts as a single compact JSON array in one file, replaced wholesale
/// on every save. The new contents are written to a sibling temp file and
/// renamed over the old one, so readers never see a half-written list.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(STORAGE_PATH)
    }
}

impl ContactStore for JsonStore {
    fn initialize(&self) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        if !fs::exists(&self.path)? {
            tracing::info!(path = %self.path.display(), "creating empty contact file");
            fs::write(&self.path, EMPTY_LIST)?;
        }
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Contact>, AppError> {
        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        serde_json::from_str(&data).map_err(|e| AppError::Corrupt(e.to_string()))
    }

    fn save_all(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let json_contacts =
            serde_json::to_string(contacts).map_err(|e| AppError::Corrupt(e.to_string()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json_contacts.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| AppError::Io(e.error))?;

        Ok(())
    }

    fn medium(&self) -> &str {
        "json"
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ana() -> Contact {
        Contact::new(
            "Ana".to_string(),
            "ana@x.com".to_string(),
            "081234567890".to_string(),
        )
    }

    #[test]
    fn initialize_creates_directory_and_empty_list() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("data").join("contacts.json");
        let store = JsonStore::new(&path);

        store.initialize()?;

        assert_eq!(fs::read_to_string(&path)?, "[]");
        assert!(store.load_all()?.is_empty());
        Ok(())
    }

    #[test]
    fn initialize_keeps_existing_contacts() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = JsonStore::new(dir.path().join("contacts.json"));

        store.initialize()?;
        store.add(ana())?;
        store.initialize()?;

        assert_eq!(store.load_all()?, vec![ana()]);
        Ok(())
    }

    #[test]
    fn json_store_writes_compact_array() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        let store = JsonStore::new(&path);
        store.initialize()?;

        store.add(ana())?;

        assert_eq!(
            fs::read_to_string(&path)?,
            r#"[{"name":"Ana","email":"ana@x.com","phone":"081234567890"}]"#
        );
        Ok(())
    }

    #[test]
    fn update_leaves_other_records_byte_identical() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        fs::write(
            &path,
            r#"[{"name":"Ana","email":"ana@x.com","phone":"081234567890"},{"name":"Bob","email":"bob@x.com","phone":"085712345678"}]"#,
        )?;
        let store = JsonStore::new(&path);

        store.update(
            "Ana",
            Contact::new(
                "Ana".to_string(),
                "ana@y.com".to_string(),
                "081234567890".to_string(),
            ),
        )?;

        assert_eq!(
            fs::read_to_string(&path)?,
            r#"[{"name":"Bob","email":"bob@x.com","phone":"085712345678"},{"name":"Ana","email":"ana@y.com","phone":"081234567890"}]"#
        );
        Ok(())
    }

    #[test]
    fn malformed_content_is_corrupt() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        let store = JsonStore::new(&path);

        fs::write(&path, "{not json")?;
        assert!(matches!(store.load_all(), Err(AppError::Corrupt(_))));

        fs::write(&path, r#"{"name":"Ana"}"#)?;
        assert!(matches!(store.load_all(), Err(AppError::Corrupt(_))));

        fs::write(&path, r#"[{"name":"Ana"}]"#)?;
        assert!(matches!(store.load_all(), Err(AppError::Corrupt(_))));
        Ok(())
    }

    #[test]
    fn save_replaces_file_without_leaving_temp_files() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        let store = JsonStore::new(&path);
        store.initialize()?;

        store.add(ana())?;
        store.delete("Ana")?;

        assert_eq!(fs::read_to_string(&path)?, "[]");
        let entries: Vec<_> = fs::read_dir(dir.path())?.collect::<Result<_, _>>()?;
        assert_eq!(entries.len(), 1);
        Ok(())
    }

    #[test]
    fn readers_never_see_partial_writes() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = JsonStore::new(dir.path().join("contacts.json"));
        store.initialize()?;
        let many: Vec<Contact> = (0..200)
            .map(|i| {
                Contact::new(
                    format!("Contact {i}"),
                    format!("c{i}@x.com"),
                    "081234567890".to_string(),
                )
            })
            .collect();

        std::thread::scope(|s| {
            s.spawn(|| {
                for round in 0..50 {
                    let contacts = if round % 2 == 0 { &many[..] } else { &many[..1] };
                    store.save_all(contacts).unwrap();
                }
            });

            for _ in 0..200 {
                let loaded = store.load_all().unwrap();
                assert!(loaded.is_empty() || loaded.len() == 1 || loaded.len() == 200);
            }
        });
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = JsonStore::new(dir.path().join("gone.json"));

        assert!(matches!(store.load_all(), Err(AppError::Io(_))));
        Ok(())
    }
}
