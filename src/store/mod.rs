pub mod json;
pub mod memory;

use std::path::Path;
use std::sync::Arc;

pub use json::JsonStore;
pub use memory::MemStore;

use crate::domain::Contact;
use crate::errors::AppError;

/// Durable CRUD over an ordered list of contacts.
///
/// Implementors provide whole-list `load_all`/`save_all`; every other
/// operation is a full read-modify-write on top of them. Nothing here
/// serializes concurrent callers.
pub trait ContactStore: Send + Sync {
    /// Make sure the backing storage exists. Safe to call on every start.
    fn initialize(&self) -> Result<(), AppError>;

    fn load_all(&self) -> Result<Vec<Contact>, AppError>;

    fn save_all(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn medium(&self) -> &str;

    /// First contact whose name matches exactly (case-sensitive).
    fn find(&self, name: &str) -> Result<Option<Contact>, AppError> {
        Ok(self.load_all()?.into_iter().find(|c| c.name == name))
    }

    fn is_duplicate(&self, name: &str) -> Result<bool, AppError> {
        Ok(self.find(name)?.is_some())
    }

    /// Append without any validation.
    fn add(&self, contact: Contact) -> Result<(), AppError> {
        let mut contacts = self.load_all()?;
        tracing::debug!(name = %contact.name, "adding contact");
        contacts.push(contact);
        self.save_all(&contacts)
    }

    /// Remove the first contact named `old_name` and append `contact`.
    /// When nothing matches `old_name` this is a plain append.
    fn update(&self, old_name: &str, contact: Contact) -> Result<(), AppError> {
        let mut contacts = self.load_all()?;
        if let Some(index) = contacts.iter().position(|c| c.name == old_name) {
            contacts.remove(index);
        } else {
            tracing::debug!(old_name, "update target missing, appending");
        }
        tracing::debug!(old_name, name = %contact.name, "updating contact");
        contacts.push(contact);
        self.save_all(&contacts)
    }

    /// Remove every contact named `name`. The list is rewritten even when
    /// nothing matches.
    fn delete(&self, name: &str) -> Result<(), AppError> {
        let contacts: Vec<Contact> = self
            .load_all()?
            .into_iter()
            .filter(|c| c.name != name)
            .collect();
        tracing::debug!(name, "deleting contact");
        self.save_all(&contacts)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMedium {
    Json,
    Mem,
}

impl StorageMedium {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMedium::Json)
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_ascii_lowercase().as_str() {
            "json" => Ok(StorageMedium::Json),
            "mem" => Ok(StorageMedium::Mem),
            _ => Err(AppError::Config(format!(
                "'{}' is not a recognized storage medium (json, mem)",
                str
            ))),
        }
    }
}

pub fn parse_storage_type(medium: StorageMedium, path: &Path) -> Arc<dyn ContactStore> {
    match medium {
        StorageMedium::Json => Arc::new(JsonStore::new(path)),
        StorageMedium::Mem => Arc::new(MemStore::new()),
    }
}
