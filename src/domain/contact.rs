use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Longest address accepted by [`Contact::validate_email`].
pub const MAX_EMAIL_LEN: usize = 254;

/// Longest local part (before the `@`).
pub const MAX_EMAIL_LOCAL_LEN: usize = 64;

// Indonesian mobile numbers: country code or trunk zero, then 8, an operator
// prefix and the subscriber digits.
const ID_MOBILE_PATTERN: &str =
    r"^(\+?62|0)8(1[1-9]|2[1238]|3[1238]|5[1-35-9]|7[78]|8[1-9]|9[5-9])\d{5,11}$";

// Dot-atom local part; hostname labels may not start or end with a hyphen;
// alphabetic TLD of two or more letters.
const EMAIL_PATTERN: &str = concat!(
    r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
    r"@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
);

/// A named record. The name is the only key; there is no separate id.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: String, email: String, phone: String) -> Self {
        Contact { name, email, phone }
    }

    pub fn validate_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn validate_email(&self) -> Result<bool, AppError> {
        // Must not be empty
        // Not more than 254 characters, local part not more than 64
        let re = Regex::new(EMAIL_PATTERN)?;
        let local_len = self.email.split('@').next().map_or(0, str::len);
        Ok(self.email.len() <= MAX_EMAIL_LEN
            && local_len <= MAX_EMAIL_LOCAL_LEN
            && re.is_match(&self.email))
    }

    pub fn validate_phone(&self) -> Result<bool, AppError> {
        let re = Regex::new(ID_MOBILE_PATTERN)?;
        Ok(re.is_match(&self.phone))
    }
}
