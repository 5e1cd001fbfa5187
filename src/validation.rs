use serde::Deserialize;

use crate::domain::Contact;
use crate::errors::AppError;

pub const DUPLICATE_NAME: &str = "Contact name already exists";
pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Invalid e-mail";
pub const INVALID_PHONE: &str = "Invalid phone number";

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Submitted create/update form. `old_name` is only sent by the edit form
/// and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(rename = "oldName", default)]
    pub old_name: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl ContactForm {
    pub fn trimmed(self) -> Self {
        Self {
            old_name: self.old_name,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            old_name: Some(contact.name.clone()),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }
}

/// Validate a submitted form.
///
/// `name_taken` is whether some stored contact already carries `form.name`.
/// On update, `old_name` is the name being edited; keeping it unchanged is
/// not a duplicate. Every failing field is reported, in field order.
pub fn validate_contact(
    form: &ContactForm,
    old_name: Option<&str>,
    name_taken: bool,
) -> Result<Contact, AppError> {
    let contact = Contact::new(form.name.clone(), form.email.clone(), form.phone.clone());
    let mut errors = Vec::new();

    if !contact.validate_name() {
        errors.push(FieldError::new("name", NAME_REQUIRED));
    } else if name_taken && old_name != Some(contact.name.as_str()) {
        errors.push(FieldError::new("name", DUPLICATE_NAME));
    }

    if !contact.validate_email()? {
        errors.push(FieldError::new("email", INVALID_EMAIL));
    }

    if !contact.validate_phone()? {
        errors.push(FieldError::new("phone", INVALID_PHONE));
    }

    if errors.is_empty() {
        Ok(contact)
    } else {
        Err(AppError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, phone: &str) -> ContactForm {
        ContactForm {
            old_name: None,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    fn field_errors(result: Result<Contact, AppError>) -> Vec<FieldError> {
        match result {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_form() -> Result<(), AppError> {
        let contact = validate_contact(&form("Ana", "ana@x.com", "081234567890"), None, false)?;

        assert_eq!(
            contact,
            Contact::new(
                "Ana".to_string(),
                "ana@x.com".to_string(),
                "081234567890".to_string()
            )
        );
        Ok(())
    }

    #[test]
    fn rejects_invalid_email() {
        let errors = field_errors(validate_contact(
            &form("Ana", "not-an-email", "081234567890"),
            None,
            false,
        ));

        assert_eq!(errors, vec![FieldError::new("email", INVALID_EMAIL)]);
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = field_errors(validate_contact(&form("Ana", "nope", "123"), None, true));

        assert_eq!(
            errors,
            vec![
                FieldError::new("name", DUPLICATE_NAME),
                FieldError::new("email", INVALID_EMAIL),
                FieldError::new("phone", INVALID_PHONE),
            ]
        );
    }

    #[test]
    fn duplicate_name_allowed_when_unchanged_on_update() -> Result<(), AppError> {
        let submitted = form("Ana", "ana@x.com", "081234567890");

        validate_contact(&submitted, Some("Ana"), true)?;

        let errors = field_errors(validate_contact(&submitted, Some("Bob"), true));
        assert_eq!(errors, vec![FieldError::new("name", DUPLICATE_NAME)]);
        Ok(())
    }

    #[test]
    fn blank_name_is_required_not_duplicate() {
        let errors = field_errors(validate_contact(
            &form("", "ana@x.com", "081234567890"),
            None,
            true,
        ));

        assert_eq!(errors, vec![FieldError::new("name", NAME_REQUIRED)]);
    }

    #[test]
    fn trimmed_strips_surrounding_whitespace() {
        let trimmed = form("  Ana ", " ana@x.com", "081234567890 ").trimmed();

        assert_eq!(trimmed, form("Ana", "ana@x.com", "081234567890"));
    }
}
