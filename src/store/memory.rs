use std::sync::RwLock;

use super::ContactStore;
use crate::domain::Contact;
use crate::errors::AppError;

/// Same contract as [`super::JsonStore`] without touching disk.
#[derive(Debug, Default)]
pub struct MemStore {
    data: RwLock<Vec<Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RwLock::new(contacts),
        }
    }
}

impl ContactStore for MemStore {
    fn initialize(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Contact>, AppError> {
        let data = self.data.read().unwrap_or_else(|e| e.into_inner());
        Ok(data.clone())
    }

    fn save_all(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        *data = contacts.to_vec();
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
