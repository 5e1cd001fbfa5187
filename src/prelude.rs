pub use crate::cli::{Cli, parse_cli};
pub use crate::domain::{Contact, contact};
pub use crate::errors::AppError;
pub use crate::store::{
    self, ContactStore, JsonStore, MemStore, StorageMedium, parse_storage_type,
};
pub use crate::validation::{ContactForm, FieldError, validate_contact};
pub use crate::web::{AppState, create_router, flash::Flash};
